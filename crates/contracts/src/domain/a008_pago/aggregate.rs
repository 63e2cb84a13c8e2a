use serde::{Deserialize, Serialize};

use crate::domain::common::{CrudMessages, CrudResource, Draft, Resource, UpdatePolicy};
use crate::shared::js_num;
use crate::shared::serde_ext::lenient_string;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pago {
    #[serde(rename = "ID_PAGO", default, skip_serializing_if = "Option::is_none")]
    pub id_pago: Option<i64>,
    #[serde(rename = "ID_FACTURA", default)]
    pub id_factura: Option<i64>,
    #[serde(rename = "FECHA_PAGO", default, deserialize_with = "lenient_string")]
    pub fecha_pago: String,
    #[serde(rename = "MONTO", default)]
    pub monto: Option<f64>,
    #[serde(rename = "METODO_PAGO", default, deserialize_with = "lenient_string")]
    pub metodo_pago: String,
    #[serde(rename = "ESTADO", default, deserialize_with = "lenient_string")]
    pub estado: String,
    #[serde(rename = "COMENTARIO", default, deserialize_with = "lenient_string")]
    pub comentario: String,
}

impl Resource for Pago {
    const PATH: &'static str = "pagos";
    const COLLECTION_KEY: &'static str = "pagos";

    fn id(&self) -> Option<i64> {
        self.id_pago
    }
}

impl CrudResource for Pago {
    const RECORD_KEY: &'static str = "pago";
    const UPDATE_POLICY: UpdatePolicy = UpdatePolicy::Remote;
    const MESSAGES: CrudMessages = CrudMessages {
        fetched: Some("Pagos obtenidos con éxito"),
        fetch_failed: "Error al obtener los pagos",
        created: "Pago registrado con éxito",
        create_failed: "Error al registrar el pago",
        updated: "Pago editado con éxito",
        update_failed: "Error al editar el pago",
        deleted: "Pago eliminado con éxito",
        delete_failed: "Error al eliminar el pago",
        empty_list: "No hay pagos registrados",
    };

    fn set_id(&mut self, id: Option<i64>) {
        self.id_pago = id;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagoDraft {
    pub id_factura: String,
    pub fecha_pago: String,
    pub monto: String,
    pub metodo_pago: String,
    pub estado: String,
    pub comentario: String,
}

impl Draft<Pago> for PagoDraft {
    fn from_record(record: &Pago) -> Self {
        Self {
            id_factura: js_num::int_field(record.id_factura),
            fecha_pago: record.fecha_pago.clone(),
            monto: js_num::float_field(record.monto),
            metodo_pago: record.metodo_pago.clone(),
            estado: record.estado.clone(),
            comentario: record.comentario.clone(),
        }
    }

    fn to_record(&self) -> Pago {
        Pago {
            id_pago: None,
            id_factura: js_num::int_or_null(&self.id_factura),
            fecha_pago: self.fecha_pago.clone(),
            monto: js_num::parse_float(&self.monto),
            metodo_pago: self.metodo_pago.clone(),
            estado: self.estado.clone(),
            comentario: self.comentario.clone(),
        }
    }
}
