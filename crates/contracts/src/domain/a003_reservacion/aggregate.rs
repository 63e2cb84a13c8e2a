use serde::{Deserialize, Serialize};

use crate::domain::common::{CrudMessages, CrudResource, Draft, Resource, UpdatePolicy};
use crate::shared::js_num;
use crate::shared::serde_ext::lenient_string;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservacion {
    #[serde(rename = "ID_RESERVACION", default, skip_serializing_if = "Option::is_none")]
    pub id_reservacion: Option<i64>,
    #[serde(rename = "ID_CLIENTE", default)]
    pub id_cliente: Option<i64>,
    #[serde(rename = "TIPO_CLIENTE", default, deserialize_with = "lenient_string")]
    pub tipo_cliente: String,
    #[serde(rename = "FECHA_RESERVA", default, deserialize_with = "lenient_string")]
    pub fecha_reserva: String,
    #[serde(rename = "HORA_RESERVA", default, deserialize_with = "lenient_string")]
    pub hora_reserva: String,
    #[serde(rename = "DIAS_RESERVA", default)]
    pub dias_reserva: Option<i64>,
    #[serde(rename = "ESTADO_CANCELACION", default, deserialize_with = "lenient_string")]
    pub estado_cancelacion: String,
    #[serde(rename = "TOTAL", default)]
    pub total: Option<f64>,
    #[serde(rename = "COMENTARIO", default, deserialize_with = "lenient_string")]
    pub comentario: String,
}

impl Resource for Reservacion {
    const PATH: &'static str = "reservaciones";
    const COLLECTION_KEY: &'static str = "reservaciones";

    fn id(&self) -> Option<i64> {
        self.id_reservacion
    }
}

impl CrudResource for Reservacion {
    const RECORD_KEY: &'static str = "reservacion";
    // Igual que Cliente: la edición nunca viajó al PUT.
    const UPDATE_POLICY: UpdatePolicy = UpdatePolicy::LocalOnly;
    const MESSAGES: CrudMessages = CrudMessages {
        // la carga de la lista no se anuncia
        fetched: None,
        fetch_failed: "Error al obtener las reservaciones",
        created: "Reservación creada con éxito",
        create_failed: "Error al crear la reservación",
        updated: "Reservación editada con éxito",
        update_failed: "Error al editar la reservación",
        deleted: "Reservación eliminada con éxito",
        delete_failed: "Error al eliminar la reservación",
        empty_list: "No hay reservaciones registradas",
    };

    fn set_id(&mut self, id: Option<i64>) {
        self.id_reservacion = id;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservacionDraft {
    pub id_cliente: String,
    pub tipo_cliente: String,
    pub fecha_reserva: String,
    pub hora_reserva: String,
    pub dias_reserva: String,
    pub estado_cancelacion: String,
    pub total: String,
    pub comentario: String,
}

impl Draft<Reservacion> for ReservacionDraft {
    fn from_record(record: &Reservacion) -> Self {
        Self {
            id_cliente: js_num::int_field(record.id_cliente),
            tipo_cliente: record.tipo_cliente.clone(),
            fecha_reserva: record.fecha_reserva.clone(),
            hora_reserva: record.hora_reserva.clone(),
            dias_reserva: js_num::int_field(record.dias_reserva),
            estado_cancelacion: record.estado_cancelacion.clone(),
            total: js_num::float_field(record.total),
            comentario: record.comentario.clone(),
        }
    }

    fn to_record(&self) -> Reservacion {
        Reservacion {
            id_reservacion: None,
            // parseInt/parseFloat sin fallback: lo inanalizable viaja como null
            id_cliente: js_num::parse_int(&self.id_cliente),
            tipo_cliente: self.tipo_cliente.clone(),
            fecha_reserva: self.fecha_reserva.clone(),
            hora_reserva: self.hora_reserva.clone(),
            dias_reserva: js_num::parse_int(&self.dias_reserva),
            estado_cancelacion: self.estado_cancelacion.clone(),
            total: js_num::parse_float(&self.total),
            comentario: self.comentario.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Draft;

    #[test]
    fn bare_parses_serialize_null_when_empty() {
        let draft = ReservacionDraft::default();
        let body = draft.create_body();
        assert_eq!(body["ID_CLIENTE"], serde_json::Value::Null);
        assert_eq!(body["DIAS_RESERVA"], serde_json::Value::Null);
        assert_eq!(body["TOTAL"], serde_json::Value::Null);
    }

    #[test]
    fn saving_an_edit_stays_local() {
        assert_eq!(Reservacion::UPDATE_POLICY, UpdatePolicy::LocalOnly);
    }

    #[test]
    fn zero_total_survives_a_bare_parse() {
        let draft = ReservacionDraft {
            total: "0".into(),
            ..Default::default()
        };
        // a diferencia de `|| null`, parseFloat a secas conserva el cero
        assert_eq!(draft.to_record().total, Some(0.0));
    }
}
