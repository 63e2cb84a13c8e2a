//! Respuestas de los endpoints de agregación del tablero de resumen.

use serde::{Deserialize, Serialize};

use crate::shared::serde_ext::{lenient_f64, lenient_i64, lenient_string};

/// `{ "count": n }`, la respuesta de `/clientes/count`, `/empleados/count`,
/// `/reservaciones/activas`, `/habitaciones/disponibles` y
/// `/facturacion/pendientes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Conteo {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub count: i64,
}

/// Fila de `/facturacion/ingreso-mensual`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngresoMensual {
    #[serde(default, deserialize_with = "lenient_string")]
    pub mes: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_ingresos: f64,
}

/// Fila de `/reservaciones/estado`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservacionesPorEstado {
    #[serde(rename = "ESTADO_CANCELACION", default, deserialize_with = "lenient_string")]
    pub estado_cancelacion: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub cantidad: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_rows_tolerate_sql_string_numerics() {
        let filas: Vec<IngresoMensual> = serde_json::from_str(
            r#"[{"mes":"2024-10","total_ingresos":"8200.50"},{"mes":"2024-11","total_ingresos":9100}]"#,
        )
        .unwrap();
        assert_eq!(filas[0].total_ingresos, 8200.5);
        assert_eq!(filas[1].total_ingresos, 9100.0);

        let estados: Vec<ReservacionesPorEstado> = serde_json::from_str(
            r#"[{"ESTADO_CANCELACION":"Confirmada","cantidad":"12"}]"#,
        )
        .unwrap();
        assert_eq!(estados[0].cantidad, 12);
    }

    #[test]
    fn count_defaults_to_zero() {
        let c: Conteo = serde_json::from_str("{}").unwrap();
        assert_eq!(c.count, 0);
    }
}
