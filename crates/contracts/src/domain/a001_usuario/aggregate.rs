use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::{CrudMessages, CrudResource, Draft, Resource, UpdatePolicy};
use crate::shared::serde_ext::lenient_string;

/// Cuenta de acceso al sistema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    #[serde(rename = "ID_USUARIO", default, skip_serializing_if = "Option::is_none")]
    pub id_usuario: Option<i64>,
    #[serde(rename = "USUARIO", default, deserialize_with = "lenient_string")]
    pub usuario: String,
    #[serde(rename = "CORREO", default, deserialize_with = "lenient_string")]
    pub correo: String,
    #[serde(rename = "FECHA_ULTIMO_ACCESO", default, deserialize_with = "lenient_string")]
    pub fecha_ultimo_acceso: String,
}

impl Resource for Usuario {
    const PATH: &'static str = "usuarios";
    const COLLECTION_KEY: &'static str = "usuarios";

    fn id(&self) -> Option<i64> {
        self.id_usuario
    }
}

impl CrudResource for Usuario {
    const RECORD_KEY: &'static str = "usuario";
    const UPDATE_POLICY: UpdatePolicy = UpdatePolicy::Remote;
    const MESSAGES: CrudMessages = CrudMessages {
        fetched: Some("Usuarios obtenidos con éxito"),
        fetch_failed: "Error al obtener los usuarios",
        created: "Usuario creado con éxito",
        create_failed: "Error al crear el usuario",
        updated: "Usuario editado con éxito",
        update_failed: "Error al editar el usuario",
        deleted: "Usuario eliminado con éxito",
        delete_failed: "Error al eliminar el usuario",
        empty_list: "No hay usuarios registrados",
    };

    fn set_id(&mut self, id: Option<i64>) {
        self.id_usuario = id;
    }
}

/// El endpoint de alta recibe claves en minúsculas, a diferencia del resto
/// de la API, y es el único lugar donde viaja la contraseña.
#[derive(Serialize)]
struct UsuarioAlta<'a> {
    usuario: &'a str,
    correo: &'a str,
    #[serde(rename = "contraseña")]
    contrasena: &'a str,
    fecha_ultimo_acceso: Option<&'a str>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsuarioDraft {
    pub usuario: String,
    pub correo: String,
    /// Nunca se precarga al editar; el operador la escribe de nuevo.
    pub contrasena: String,
    pub fecha_ultimo_acceso: String,
}

impl Draft<Usuario> for UsuarioDraft {
    fn from_record(record: &Usuario) -> Self {
        Self {
            usuario: record.usuario.clone(),
            correo: record.correo.clone(),
            contrasena: String::new(),
            fecha_ultimo_acceso: record.fecha_ultimo_acceso.clone(),
        }
    }

    fn to_record(&self) -> Usuario {
        Usuario {
            id_usuario: None,
            usuario: self.usuario.clone(),
            correo: self.correo.clone(),
            fecha_ultimo_acceso: self.fecha_ultimo_acceso.clone(),
        }
    }

    fn create_body(&self) -> Value {
        let alta = UsuarioAlta {
            usuario: &self.usuario,
            correo: &self.correo,
            contrasena: &self.contrasena,
            fecha_ultimo_acceso: if self.fecha_ultimo_acceso.is_empty() {
                None
            } else {
                Some(&self.fecha_ultimo_acceso)
            },
        };
        serde_json::to_value(alta).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_uses_lowercase_keys_and_password() {
        let draft = UsuarioDraft {
            usuario: "admin".into(),
            correo: "a@b.com".into(),
            contrasena: "secreto".into(),
            fecha_ultimo_acceso: String::new(),
        };
        let body = draft.create_body();
        assert_eq!(body["usuario"], "admin");
        assert_eq!(body["correo"], "a@b.com");
        assert_eq!(body["contraseña"], "secreto");
        assert_eq!(body["fecha_ultimo_acceso"], Value::Null);
        assert!(body.get("USUARIO").is_none());
    }

    #[test]
    fn update_payload_keeps_uppercase_keys_and_drops_password() {
        let prior = Usuario {
            id_usuario: Some(4),
            usuario: "ana".into(),
            correo: "ana@hotel.gt".into(),
            fecha_ultimo_acceso: String::new(),
        };
        let draft = UsuarioDraft {
            usuario: "ana2".into(),
            correo: "ana@hotel.gt".into(),
            contrasena: "nueva".into(),
            fecha_ultimo_acceso: "2024-10-01".into(),
        };
        let merged = draft.merged_record(&prior);
        assert_eq!(merged.id_usuario, Some(4));
        let body = serde_json::to_value(&merged).unwrap();
        assert_eq!(body["USUARIO"], "ana2");
        assert_eq!(body["FECHA_ULTIMO_ACCESO"], "2024-10-01");
        assert!(body.get("contraseña").is_none());
    }

    #[test]
    fn editing_never_prefills_the_password() {
        let record = Usuario {
            id_usuario: Some(1),
            usuario: "root".into(),
            correo: "r@h".into(),
            fecha_ultimo_acceso: "2024-01-01".into(),
        };
        let draft = UsuarioDraft::from_record(&record);
        assert_eq!(draft.contrasena, "");
        assert_eq!(draft.usuario, "root");
    }
}
