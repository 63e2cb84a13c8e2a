use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::serde_ext::lenient_string;

/// Factura emitida. No tiene pantalla propia: se consulta para los
/// selectores de pagos y detalles y para el tablero de resumen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factura {
    #[serde(rename = "ID_FACTURA", default, skip_serializing_if = "Option::is_none")]
    pub id_factura: Option<i64>,
    #[serde(rename = "FECHA_EMISION", default, deserialize_with = "lenient_string")]
    pub fecha_emision: String,
    #[serde(rename = "NOMBRE_CLIENTE", default)]
    pub nombre_cliente: Option<String>,
    #[serde(rename = "TOTAL", default)]
    pub total: Option<f64>,
    #[serde(rename = "ESTADO", default, deserialize_with = "lenient_string")]
    pub estado: String,
}

impl Resource for Factura {
    const PATH: &'static str = "facturacion";
    const COLLECTION_KEY: &'static str = "facturas";

    fn id(&self) -> Option<i64> {
        self.id_factura
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_sparse_rows() {
        let f: Factura = serde_json::from_str(
            r#"{"ID_FACTURA":2,"TOTAL":350.75,"NOMBRE_CLIENTE":null,"ESTADO":"Pendiente"}"#,
        )
        .unwrap();
        assert_eq!(f.id_factura, Some(2));
        assert_eq!(f.nombre_cliente, None);
        assert_eq!(f.fecha_emision, "");
    }
}
