use serde::{Deserialize, Serialize};

use crate::domain::common::{CrudMessages, CrudResource, Draft, Resource, UpdatePolicy};
use crate::shared::js_num;
use crate::shared::serde_ext::lenient_string;

/// Habitación del hotel; `ID_SERVICIO` referencia al servicio incluido.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habitacion {
    #[serde(rename = "ID_HABITACION", default, skip_serializing_if = "Option::is_none")]
    pub id_habitacion: Option<i64>,
    #[serde(rename = "ID_SERVICIO", default)]
    pub id_servicio: Option<i64>,
    #[serde(rename = "NUM_HABITACION", default, deserialize_with = "lenient_string")]
    pub num_habitacion: String,
    #[serde(rename = "TIPO_HABITACION", default, deserialize_with = "lenient_string")]
    pub tipo_habitacion: String,
    // viaja como texto aunque el control sea numérico
    #[serde(rename = "NUMERO_CAMAS", default, deserialize_with = "lenient_string")]
    pub numero_camas: String,
    #[serde(rename = "TIPO_DE_CAMA", default, deserialize_with = "lenient_string")]
    pub tipo_de_cama: String,
    #[serde(rename = "ESTADO", default, deserialize_with = "lenient_string")]
    pub estado: String,
    #[serde(rename = "PRECIO", default)]
    pub precio: f64,
    #[serde(rename = "DESCUENTO", default)]
    pub descuento: f64,
    #[serde(rename = "DESCRIPCION", default, deserialize_with = "lenient_string")]
    pub descripcion: String,
}

impl Resource for Habitacion {
    const PATH: &'static str = "habitaciones";
    const COLLECTION_KEY: &'static str = "habitaciones";

    fn id(&self) -> Option<i64> {
        self.id_habitacion
    }
}

impl CrudResource for Habitacion {
    const RECORD_KEY: &'static str = "habitacion";
    const UPDATE_POLICY: UpdatePolicy = UpdatePolicy::Remote;
    const MESSAGES: CrudMessages = CrudMessages {
        fetched: Some("Habitaciones obtenidas con éxito"),
        fetch_failed: "Error al obtener las habitaciones",
        created: "Habitación creada con éxito",
        create_failed: "Error al crear la habitación",
        updated: "Habitación editada con éxito",
        update_failed: "Error al editar la habitación",
        deleted: "Habitación eliminada con éxito",
        delete_failed: "Error al eliminar la habitación",
        empty_list: "No hay habitaciones registradas",
    };

    fn set_id(&mut self, id: Option<i64>) {
        self.id_habitacion = id;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HabitacionDraft {
    pub id_servicio: String,
    pub num_habitacion: String,
    pub tipo_habitacion: String,
    pub numero_camas: String,
    pub tipo_de_cama: String,
    pub estado: String,
    pub precio: String,
    pub descuento: String,
    pub descripcion: String,
}

impl Draft<Habitacion> for HabitacionDraft {
    fn from_record(record: &Habitacion) -> Self {
        Self {
            id_servicio: js_num::int_field(record.id_servicio),
            num_habitacion: record.num_habitacion.clone(),
            tipo_habitacion: record.tipo_habitacion.clone(),
            numero_camas: record.numero_camas.clone(),
            tipo_de_cama: record.tipo_de_cama.clone(),
            estado: record.estado.clone(),
            precio: js_num::float_field(Some(record.precio)),
            descuento: js_num::float_field(Some(record.descuento)),
            descripcion: record.descripcion.clone(),
        }
    }

    fn to_record(&self) -> Habitacion {
        Habitacion {
            id_habitacion: None,
            id_servicio: js_num::int_or_null(&self.id_servicio),
            num_habitacion: self.num_habitacion.clone(),
            tipo_habitacion: self.tipo_habitacion.clone(),
            numero_camas: self.numero_camas.clone(),
            tipo_de_cama: self.tipo_de_cama.clone(),
            estado: self.estado.clone(),
            precio: js_num::float_or_zero(&self.precio),
            descuento: js_num::float_or_zero(&self.descuento),
            descripcion: self.descripcion.clone(),
        }
    }
}
