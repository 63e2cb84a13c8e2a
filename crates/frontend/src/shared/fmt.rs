//! Cell rendering for table values: absent is blank, zero is `0`, floats
//! print the way the browser stringifies numbers.

use contracts::shared::js_num::fmt_float;

pub fn opt_int(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

pub fn opt_float(value: Option<f64>) -> String {
    value.map(fmt_float).unwrap_or_default()
}

pub fn float(value: f64) -> String {
    fmt_float(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_render_like_the_browser() {
        assert_eq!(opt_int(None), "");
        assert_eq!(opt_int(Some(0)), "0");
        assert_eq!(opt_float(Some(150.5)), "150.5");
        assert_eq!(opt_float(Some(200.0)), "200");
        assert_eq!(opt_float(None), "");
    }
}
