use contracts::domain::common::Resource;

/// Ordered in-memory copy of one collection: server order after a load,
/// append order for records created afterwards. This is the single source
/// of truth the table renders from.
#[derive(Debug, Clone)]
pub struct ListStore<R: Resource> {
    records: Vec<R>,
}

impl<R: Resource> Default for ListStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Resource> ListStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Discards the previous contents; only the initial load uses this.
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.records = records;
    }

    /// Adds to the end, after a successful creation.
    pub fn append(&mut self, record: R) {
        self.records.push(record);
    }

    /// Removes the record whose identifier matches. A missing id is a
    /// no-op, not an error.
    pub fn remove_by_id(&mut self, id: i64) {
        self.records.retain(|r| r.id() != Some(id));
    }

    /// Substitutes the matching record in place. No-op when absent.
    pub fn replace_by_id(&mut self, id: i64, record: R) {
        if let Some(slot) = self.records.iter_mut().find(|r| r.id() == Some(id)) {
            *slot = record;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_cliente::Cliente;

    fn cliente(id: i64, nombre: &str) -> Cliente {
        serde_json::from_value(serde_json::json!({ "ID_CLIENTE": id, "NOMBRE": nombre })).unwrap()
    }

    #[test]
    fn load_keeps_server_order() {
        let mut store = ListStore::new();
        store.replace_all(vec![cliente(3, "c"), cliente(1, "a"), cliente(2, "b")]);
        let ids: Vec<_> = store.records().iter().map(|c| c.id_cliente).collect();
        assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
    }

    #[test]
    fn append_then_remove_restores_prior_state() {
        let mut store = ListStore::new();
        store.replace_all(vec![cliente(1, "a")]);
        let before = store.records().to_vec();
        store.append(cliente(9, "z"));
        store.remove_by_id(9);
        assert_eq!(store.records(), &before[..]);
    }

    #[test]
    fn remove_of_unknown_id_is_a_noop() {
        let mut store = ListStore::new();
        store.replace_all(vec![cliente(1, "a")]);
        store.remove_by_id(5);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn replace_by_id_swaps_in_place() {
        let mut store = ListStore::new();
        store.replace_all(vec![cliente(1, "a"), cliente(2, "b")]);
        store.replace_by_id(2, cliente(2, "editado"));
        assert_eq!(store.records()[1].nombre, "editado");
        assert_eq!(store.records()[0].nombre, "a");
    }

    #[test]
    fn replace_by_absent_id_leaves_list_unchanged() {
        let mut store = ListStore::new();
        store.replace_all(vec![cliente(1, "a")]);
        let before = store.records().to_vec();
        store.replace_by_id(7, cliente(7, "fantasma"));
        assert_eq!(store.records(), &before[..]);
    }

    #[test]
    fn replace_all_discards_everything() {
        let mut store = ListStore::new();
        store.replace_all(vec![cliente(1, "a")]);
        store.replace_all(vec![cliente(8, "x")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].id_cliente, Some(8));
    }
}
