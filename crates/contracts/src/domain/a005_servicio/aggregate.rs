use serde::{Deserialize, Serialize};

use crate::domain::common::{CrudMessages, CrudResource, Draft, Resource, UpdatePolicy};
use crate::shared::{fecha, js_num, serde_ext::lenient_string};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Servicio {
    #[serde(rename = "ID_SERVICIO", default, skip_serializing_if = "Option::is_none")]
    pub id_servicio: Option<i64>,
    #[serde(rename = "TIPO_SERVICIO", default, deserialize_with = "lenient_string")]
    pub tipo_servicio: String,
    #[serde(rename = "DURACION", default, deserialize_with = "lenient_string")]
    pub duracion: String,
    #[serde(rename = "DESCRIPCION", default, deserialize_with = "lenient_string")]
    pub descripcion: String,
    /// ISO-8601 UTC, o null si no se programó.
    #[serde(rename = "FECHA_HORA", default)]
    pub fecha_hora: Option<String>,
    #[serde(rename = "PRECIO", default)]
    pub precio: Option<f64>,
}

impl Resource for Servicio {
    const PATH: &'static str = "servicios";
    const COLLECTION_KEY: &'static str = "servicios";

    fn id(&self) -> Option<i64> {
        self.id_servicio
    }
}

impl CrudResource for Servicio {
    const RECORD_KEY: &'static str = "servicio";
    const UPDATE_POLICY: UpdatePolicy = UpdatePolicy::Remote;
    const MESSAGES: CrudMessages = CrudMessages {
        fetched: Some("Servicios obtenidos con éxito"),
        fetch_failed: "Error al obtener los servicios",
        created: "Servicio creado con éxito",
        create_failed: "Error al crear el servicio",
        updated: "Servicio editado con éxito",
        update_failed: "Error al editar el servicio",
        deleted: "Servicio eliminado con éxito",
        delete_failed: "Error al eliminar el servicio",
        empty_list: "No hay servicios registrados",
    };

    fn set_id(&mut self, id: Option<i64>) {
        self.id_servicio = id;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServicioDraft {
    pub tipo_servicio: String,
    pub duracion: String,
    pub descripcion: String,
    pub fecha_hora: String,
    pub precio: String,
}

impl Draft<Servicio> for ServicioDraft {
    fn from_record(record: &Servicio) -> Self {
        Self {
            tipo_servicio: record.tipo_servicio.clone(),
            duracion: record.duracion.clone(),
            descripcion: record.descripcion.clone(),
            fecha_hora: record.fecha_hora.clone().unwrap_or_default(),
            precio: js_num::float_field(record.precio),
        }
    }

    fn to_record(&self) -> Servicio {
        Servicio {
            id_servicio: None,
            tipo_servicio: self.tipo_servicio.clone(),
            duracion: self.duracion.clone(),
            descripcion: self.descripcion.clone(),
            fecha_hora: fecha::iso_datetime(&self.fecha_hora),
            precio: js_num::parse_float(&self.precio),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Draft;

    #[test]
    fn schedule_is_normalized_to_iso_or_null() {
        let draft = ServicioDraft {
            tipo_servicio: "Spa".into(),
            fecha_hora: "2024-11-05T13:30".into(),
            precio: "150.50".into(),
            ..Default::default()
        };
        let body = draft.create_body();
        assert_eq!(body["FECHA_HORA"], "2024-11-05T13:30:00.000Z");
        assert_eq!(body["PRECIO"], 150.5);

        let sin_fecha = ServicioDraft::default().create_body();
        assert_eq!(sin_fecha["FECHA_HORA"], serde_json::Value::Null);
    }
}
