//! API URL construction.
//!
//! The backend is a hosted service shared by every deployment of this
//! dashboard, so the base URL is a constant rather than derived from the
//! window location.

pub const API_BASE: &str = "https://apistart.onrender.com/api";

/// Build a full API URL from a path starting with `/`.
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/clientes/all");
/// assert_eq!(url, "https://apistart.onrender.com/api/clientes/all");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}
