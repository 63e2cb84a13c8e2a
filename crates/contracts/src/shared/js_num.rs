//! Numeric coercion with the browser's parsing rules.
//!
//! Form fields arrive as free text and the backend expects browser-coerced
//! numbers, so parsing follows `parseInt`/`parseFloat`: leading whitespace
//! is skipped and the longest valid numeric prefix wins (`"12 noches"` →
//! 12). The `_or_zero`/`_or_null` variants reproduce the `|| 0` / `|| null`
//! fallbacks, which also coerce a parsed zero to the fallback value.

/// `parseInt(s, 10)`: longest decimal prefix after optional sign.
pub fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1i64, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = rest
        .as_bytes()
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|n| sign * n)
}

/// `parseFloat(s)`: longest prefix of the form `[+-]digits[.digits][e[+-]digits]`,
/// with at least one digit before any exponent.
pub fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut has_digits = i > int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        has_digits |= i > frac_start;
    }
    if !has_digits {
        return None;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    s[..i].parse::<f64>().ok()
}

/// `parseInt(s, 10) || 0`
pub fn int_or_zero(s: &str) -> i64 {
    parse_int(s).unwrap_or(0)
}

/// `parseInt(s, 10) || null`
pub fn int_or_null(s: &str) -> Option<i64> {
    parse_int(s).filter(|n| *n != 0)
}

/// `parseFloat(s) || 0`
pub fn float_or_zero(s: &str) -> f64 {
    parse_float(s).unwrap_or(0.0)
}

/// `parseFloat(s) || null`
pub fn float_or_null(s: &str) -> Option<f64> {
    parse_float(s).filter(|v| *v != 0.0)
}

/// Form-field text for an optional integer; zero and absent both map to the
/// empty string (`record.CAMPO || ''`).
pub fn int_field(value: Option<i64>) -> String {
    match value {
        Some(n) if n != 0 => n.to_string(),
        _ => String::new(),
    }
}

/// Form-field text for an optional float, same fallback rule.
pub fn float_field(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => fmt_float(v),
        _ => String::new(),
    }
}

/// Renders a float the way the browser stringifies numbers: no trailing
/// `.0` on whole values.
pub fn fmt_float(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_takes_decimal_prefix() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("  42"), Some(42));
        assert_eq!(parse_int("42 noches"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("7.9"), Some(7));
    }

    #[test]
    fn parse_int_rejects_non_numeric() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int(".5"), None);
    }

    #[test]
    fn parse_float_prefix_rules() {
        assert_eq!(parse_float("150.50"), Some(150.5));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("3."), Some(3.0));
        assert_eq!(parse_float("12.5Q"), Some(12.5));
        assert_eq!(parse_float("1e3"), Some(1000.0));
        assert_eq!(parse_float("2e"), Some(2.0));
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("Q150"), None);
    }

    #[test]
    fn fallbacks_treat_zero_as_falsy() {
        assert_eq!(int_or_null("0"), None);
        assert_eq!(int_or_null("3"), Some(3));
        assert_eq!(int_or_null("x"), None);
        assert_eq!(int_or_zero("x"), 0);
        assert_eq!(float_or_null("0.0"), None);
        assert_eq!(float_or_zero("x"), 0.0);
        assert_eq!(float_or_zero("99.99"), 99.99);
    }

    #[test]
    fn field_text_hides_zero_and_absent() {
        assert_eq!(int_field(None), "");
        assert_eq!(int_field(Some(0)), "");
        assert_eq!(int_field(Some(12)), "12");
        assert_eq!(float_field(Some(150.5)), "150.5");
        assert_eq!(float_field(Some(150.0)), "150");
        assert_eq!(float_field(None), "");
    }
}
