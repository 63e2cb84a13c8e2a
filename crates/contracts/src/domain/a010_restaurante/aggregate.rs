use serde::{Deserialize, Serialize};

use crate::domain::common::{CrudMessages, CrudResource, Draft, Resource, UpdatePolicy};
use crate::shared::serde_ext::lenient_string;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurante {
    #[serde(rename = "ID_RESTAURANTE", default, skip_serializing_if = "Option::is_none")]
    pub id_restaurante: Option<i64>,
    #[serde(rename = "NOMBRE", default, deserialize_with = "lenient_string")]
    pub nombre: String,
    #[serde(rename = "UBICACION", default, deserialize_with = "lenient_string")]
    pub ubicacion: String,
    #[serde(rename = "DESCRIPCION", default, deserialize_with = "lenient_string")]
    pub descripcion: String,
}

impl Resource for Restaurante {
    const PATH: &'static str = "restaurantes";
    const COLLECTION_KEY: &'static str = "restaurantes";

    fn id(&self) -> Option<i64> {
        self.id_restaurante
    }
}

impl CrudResource for Restaurante {
    const RECORD_KEY: &'static str = "restaurante";
    const UPDATE_POLICY: UpdatePolicy = UpdatePolicy::Remote;
    const MESSAGES: CrudMessages = CrudMessages {
        fetched: Some("Restaurantes obtenidos con éxito"),
        fetch_failed: "Error al obtener los restaurantes",
        created: "Restaurante creado con éxito",
        create_failed: "Error al crear el restaurante",
        updated: "Restaurante editado con éxito",
        update_failed: "Error al editar el restaurante",
        deleted: "Restaurante eliminado con éxito",
        delete_failed: "Error al eliminar el restaurante",
        empty_list: "No hay restaurantes registrados",
    };

    fn set_id(&mut self, id: Option<i64>) {
        self.id_restaurante = id;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestauranteDraft {
    pub nombre: String,
    pub ubicacion: String,
    pub descripcion: String,
}

impl Draft<Restaurante> for RestauranteDraft {
    fn from_record(record: &Restaurante) -> Self {
        Self {
            nombre: record.nombre.clone(),
            ubicacion: record.ubicacion.clone(),
            descripcion: record.descripcion.clone(),
        }
    }

    fn to_record(&self) -> Restaurante {
        Restaurante {
            id_restaurante: None,
            nombre: self.nombre.clone(),
            ubicacion: self.ubicacion.clone(),
            descripcion: self.descripcion.clone(),
        }
    }
}
