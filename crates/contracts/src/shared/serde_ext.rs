//! Deserialization helpers for the backend's loosely typed JSON.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a text field tolerating `null` and bare numbers: `null` and
/// a missing key become the empty string, numbers keep their JSON rendering.
/// The backend stores several "text" columns as numerics (TELEFONO, CUI) and
/// the forms must never see a null.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// Numeric field that may arrive as a number, a numeric string (SQL
/// decimals), or null; anything unparsable counts as zero.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Same rule for integer counts.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().unwrap_or_else(|| {
            n.as_f64().map(|f| f as i64).unwrap_or(0)
        }),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_string")]
        telefono: String,
    }

    #[test]
    fn null_and_missing_become_empty() {
        let row: Row = serde_json::from_str(r#"{"telefono":null}"#).unwrap();
        assert_eq!(row.telefono, "");
        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row.telefono, "");
    }

    #[test]
    fn numbers_keep_their_rendering() {
        let row: Row = serde_json::from_str(r#"{"telefono":55512345}"#).unwrap();
        assert_eq!(row.telefono, "55512345");
        let row: Row = serde_json::from_str(r#"{"telefono":"555-123"}"#).unwrap();
        assert_eq!(row.telefono, "555-123");
    }

    #[derive(Deserialize)]
    struct Monto {
        #[serde(default, deserialize_with = "lenient_f64")]
        total: f64,
        #[serde(default, deserialize_with = "lenient_i64")]
        cantidad: i64,
    }

    #[test]
    fn numeric_fields_accept_strings_and_null() {
        let m: Monto = serde_json::from_str(r#"{"total":"1500.25","cantidad":"7"}"#).unwrap();
        assert_eq!(m.total, 1500.25);
        assert_eq!(m.cantidad, 7);
        let m: Monto = serde_json::from_str(r#"{"total":null}"#).unwrap();
        assert_eq!(m.total, 0.0);
        assert_eq!(m.cantidad, 0);
    }
}
