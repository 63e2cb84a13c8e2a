//! Date rendering for the dashboard.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

const MESES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    // ingreso-mensual reports periods as YYYY-MM
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok()
}

/// "2024-11" / "2024-11-01T00:00:00.000Z" → "noviembre 2024".
/// Unparsable input is shown as-is.
pub fn mes_label(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => format!("{} {}", MESES[d.month0() as usize], d.year()),
        None => raw.to_string(),
    }
}

/// Value of a `datetime-local` control → ISO-8601 UTC, the
/// `new Date(v).toISOString()` shape the backend stores. Empty or
/// unparsable input maps to `None`.
pub fn iso_datetime(raw: &str) -> Option<String> {
    const ISO: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).format(ISO).to_string());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.and_utc().format(ISO).to_string());
        }
    }
    None
}

/// `toLocaleDateString()` equivalent for the recent-transactions table.
pub fn fecha_corta(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => format!("{}/{}/{}", d.day(), d.month(), d.year()),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_labels() {
        assert_eq!(mes_label("2024-11"), "noviembre 2024");
        assert_eq!(mes_label("2025-01-01"), "enero 2025");
        assert_eq!(mes_label("2024-07-01T00:00:00.000Z"), "julio 2024");
        assert_eq!(mes_label("garbage"), "garbage");
    }

    #[test]
    fn datetime_local_to_iso() {
        assert_eq!(
            iso_datetime("2024-11-05T13:30").as_deref(),
            Some("2024-11-05T13:30:00.000Z")
        );
        assert_eq!(
            iso_datetime("2024-11-05T13:30:00.000Z").as_deref(),
            Some("2024-11-05T13:30:00.000Z")
        );
        assert_eq!(iso_datetime(""), None);
        assert_eq!(iso_datetime("mañana"), None);
    }

    #[test]
    fn short_dates() {
        assert_eq!(fecha_corta("2024-11-05"), "5/11/2024");
        assert_eq!(fecha_corta("2024-11-05T13:30:00.000Z"), "5/11/2024");
        assert_eq!(fecha_corta(""), "");
    }
}
