/// Transport failure while loading a collection.
pub const FETCH_TRANSPORT: &str = "Error en la comunicación con la API";

/// Transport failure during update/delete.
pub const MUTATION_TRANSPORT: &str = "Error al comunicarse con la API";

/// Fallback when the server rejects an action without a `message` field.
pub const ERROR_FALLBACK: &str = "Ocurrió un error inesperado";

/// Banner texts for one entity. Spanish grammatical gender makes these
/// per-entity data rather than templates ("Habitación creada", "Pedido
/// creado").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrudMessages {
    /// Shown after a successful collection load; some screens stay silent.
    pub fetched: Option<&'static str>,
    /// Non-2xx response on the collection load.
    pub fetch_failed: &'static str,
    pub created: &'static str,
    /// Transport failure on create (non-2xx create failures show the
    /// server-provided message instead).
    pub create_failed: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
    /// Placeholder row when the list is empty.
    pub empty_list: &'static str,
}
