//! DTOs de `POST /usuarios/login`.
//!
//! El control de acceso real vive en el backend; aquí solo viaja la
//! credencial y vuelve un rol informativo que la interfaz no impone.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Credenciales {
    pub usuario: String,
    #[serde(rename = "contraseña")]
    pub contrasena: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_use_the_accented_key() {
        let body = serde_json::to_value(Credenciales {
            usuario: "admin".into(),
            contrasena: "1234".into(),
        })
        .unwrap();
        assert_eq!(body["usuario"], "admin");
        assert_eq!(body["contraseña"], "1234");
    }
}
