use serde::{Deserialize, Serialize};

use crate::domain::common::{CrudMessages, CrudResource, Draft, Resource, UpdatePolicy};
use crate::shared::js_num;
use crate::shared::serde_ext::lenient_string;

/// Línea de facturación.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetalleFactura {
    #[serde(rename = "ID_DETALLE", default, skip_serializing_if = "Option::is_none")]
    pub id_detalle: Option<i64>,
    #[serde(rename = "ID_FACTURA", default)]
    pub id_factura: Option<i64>,
    #[serde(rename = "DESCRIPCION", default, deserialize_with = "lenient_string")]
    pub descripcion: String,
    #[serde(rename = "CANTIDAD", default)]
    pub cantidad: i64,
    #[serde(rename = "PRECIO_UNITARIO", default)]
    pub precio_unitario: f64,
    #[serde(rename = "SUBTOTAL", default)]
    pub subtotal: f64,
    #[serde(rename = "TOTAL_ITEM", default)]
    pub total_item: f64,
}

impl Resource for DetalleFactura {
    const PATH: &'static str = "detalleFacturacion";
    const COLLECTION_KEY: &'static str = "detalles";

    fn id(&self) -> Option<i64> {
        self.id_detalle
    }
}

impl CrudResource for DetalleFactura {
    const RECORD_KEY: &'static str = "detalle";
    const UPDATE_POLICY: UpdatePolicy = UpdatePolicy::Remote;
    const MESSAGES: CrudMessages = CrudMessages {
        fetched: Some("Detalles obtenidos con éxito"),
        fetch_failed: "Error al obtener los detalles",
        created: "Detalle de facturación creado con éxito",
        create_failed: "Error al crear el detalle de facturación",
        updated: "Detalle editado con éxito",
        update_failed: "Error al editar el detalle",
        deleted: "Detalle eliminado con éxito",
        delete_failed: "Error al eliminar el detalle",
        empty_list: "No hay detalles de facturación registrados",
    };

    fn set_id(&mut self, id: Option<i64>) {
        self.id_detalle = id;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetalleFacturaDraft {
    pub id_factura: String,
    pub descripcion: String,
    pub cantidad: String,
    pub precio_unitario: String,
    pub subtotal: String,
    pub total_item: String,
}

impl Draft<DetalleFactura> for DetalleFacturaDraft {
    fn from_record(record: &DetalleFactura) -> Self {
        Self {
            id_factura: js_num::int_field(record.id_factura),
            descripcion: record.descripcion.clone(),
            cantidad: js_num::int_field(Some(record.cantidad)),
            precio_unitario: js_num::float_field(Some(record.precio_unitario)),
            subtotal: js_num::float_field(Some(record.subtotal)),
            total_item: js_num::float_field(Some(record.total_item)),
        }
    }

    fn to_record(&self) -> DetalleFactura {
        DetalleFactura {
            id_detalle: None,
            id_factura: js_num::int_or_null(&self.id_factura),
            descripcion: self.descripcion.clone(),
            cantidad: js_num::int_or_zero(&self.cantidad),
            precio_unitario: js_num::float_or_zero(&self.precio_unitario),
            subtotal: js_num::float_or_zero(&self.subtotal),
            total_item: js_num::float_or_zero(&self.total_item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Draft;

    #[test]
    fn amounts_default_to_zero_and_fk_to_null() {
        let body = DetalleFacturaDraft::default().create_body();
        assert_eq!(body["ID_FACTURA"], serde_json::Value::Null);
        assert_eq!(body["CANTIDAD"], 0);
        assert_eq!(body["PRECIO_UNITARIO"], 0.0);
        assert_eq!(body["SUBTOTAL"], 0.0);
        assert_eq!(body["TOTAL_ITEM"], 0.0);
    }
}
