use serde::{Deserialize, Serialize};

use crate::domain::common::{CrudMessages, CrudResource, Draft, Resource, UpdatePolicy};
use crate::shared::js_num;
use crate::shared::serde_ext::lenient_string;

/// Huésped registrado. Referencia a su cuenta por `ID_USUARIO`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    #[serde(rename = "ID_CLIENTE", default, skip_serializing_if = "Option::is_none")]
    pub id_cliente: Option<i64>,
    #[serde(rename = "ID_USUARIO", default)]
    pub id_usuario: Option<i64>,
    #[serde(rename = "CUI", default, deserialize_with = "lenient_string")]
    pub cui: String,
    #[serde(rename = "PASAPORTE", default, deserialize_with = "lenient_string")]
    pub pasaporte: String,
    #[serde(rename = "NOMBRE", default, deserialize_with = "lenient_string")]
    pub nombre: String,
    #[serde(rename = "APELLIDO", default, deserialize_with = "lenient_string")]
    pub apellido: String,
    #[serde(rename = "CORREO", default, deserialize_with = "lenient_string")]
    pub correo: String,
    #[serde(rename = "TELEFONO", default, deserialize_with = "lenient_string")]
    pub telefono: String,
    #[serde(rename = "NACIONALIDAD", default, deserialize_with = "lenient_string")]
    pub nacionalidad: String,
    #[serde(rename = "DIRECCION", default, deserialize_with = "lenient_string")]
    pub direccion: String,
}

impl Resource for Cliente {
    const PATH: &'static str = "clientes";
    const COLLECTION_KEY: &'static str = "clientes";

    fn id(&self) -> Option<i64> {
        self.id_cliente
    }
}

impl CrudResource for Cliente {
    const RECORD_KEY: &'static str = "cliente";
    // La pantalla de clientes nunca llamó al PUT: el guardado de una edición
    // se aplica solo a la lista local.
    const UPDATE_POLICY: UpdatePolicy = UpdatePolicy::LocalOnly;
    const MESSAGES: CrudMessages = CrudMessages {
        fetched: Some("Clientes obtenidos con éxito"),
        fetch_failed: "Error al obtener los clientes",
        created: "Cliente creado con éxito",
        create_failed: "Error al crear el cliente",
        updated: "Cliente editado con éxito",
        update_failed: "Error al editar el cliente",
        deleted: "Cliente eliminado con éxito",
        delete_failed: "Error al eliminar el cliente",
        empty_list: "No hay clientes registrados",
    };

    fn set_id(&mut self, id: Option<i64>) {
        self.id_cliente = id;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClienteDraft {
    pub id_usuario: String,
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub telefono: String,
    pub cui: String,
    pub pasaporte: String,
    pub nacionalidad: String,
    pub direccion: String,
}

impl Draft<Cliente> for ClienteDraft {
    fn from_record(record: &Cliente) -> Self {
        Self {
            id_usuario: js_num::int_field(record.id_usuario),
            nombre: record.nombre.clone(),
            apellido: record.apellido.clone(),
            correo: record.correo.clone(),
            telefono: record.telefono.clone(),
            cui: record.cui.clone(),
            pasaporte: record.pasaporte.clone(),
            nacionalidad: record.nacionalidad.clone(),
            direccion: record.direccion.clone(),
        }
    }

    fn to_record(&self) -> Cliente {
        Cliente {
            id_cliente: None,
            id_usuario: js_num::int_or_null(&self.id_usuario),
            cui: self.cui.clone(),
            pasaporte: self.pasaporte.clone(),
            nombre: self.nombre.clone(),
            apellido: self.apellido.clone(),
            correo: self.correo.clone(),
            telefono: self.telefono.clone(),
            nacionalidad: self.nacionalidad.clone(),
            direccion: self.direccion.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_has_wire_keys_and_no_id() {
        let draft = ClienteDraft {
            id_usuario: "3".into(),
            nombre: "Ana".into(),
            ..Default::default()
        };
        let body = draft.create_body();
        assert_eq!(body["NOMBRE"], "Ana");
        assert_eq!(body["ID_USUARIO"], 3);
        assert_eq!(body["APELLIDO"], "");
        assert!(body.get("ID_CLIENTE").is_none());
    }

    #[test]
    fn unparsable_user_reference_becomes_null() {
        let draft = ClienteDraft {
            id_usuario: "".into(),
            ..Default::default()
        };
        assert_eq!(draft.create_body()["ID_USUARIO"], serde_json::Value::Null);
    }

    #[test]
    fn server_record_round_trips_into_the_list_shape() {
        let cliente: Cliente = serde_json::from_str(
            r#"{"ID_CLIENTE":10,"NOMBRE":"Ana","ID_USUARIO":3,"TELEFONO":null}"#,
        )
        .unwrap();
        assert_eq!(cliente.id_cliente, Some(10));
        assert_eq!(cliente.nombre, "Ana");
        assert_eq!(cliente.telefono, "");
        assert_eq!(cliente.apellido, "");
    }

    #[test]
    fn saving_an_edit_stays_local() {
        assert_eq!(Cliente::UPDATE_POLICY, UpdatePolicy::LocalOnly);
    }

    #[test]
    fn merged_record_keeps_the_identifier() {
        let prior: Cliente =
            serde_json::from_str(r#"{"ID_CLIENTE":7,"NOMBRE":"Luis","CUI":"123"}"#).unwrap();
        let mut draft = ClienteDraft::from_record(&prior);
        draft.nombre = "Luisa".into();
        let merged = draft.merged_record(&prior);
        assert_eq!(merged.id_cliente, Some(7));
        assert_eq!(merged.nombre, "Luisa");
        assert_eq!(merged.cui, "123");
    }
}
