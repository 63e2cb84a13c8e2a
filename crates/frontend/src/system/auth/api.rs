use contracts::system::auth::{Credenciales, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// `POST /usuarios/login`. A transport failure maps to the fixed
/// connection-error string; an unsuccessful login surfaces the server's
/// message.
pub async fn login(usuario: String, contrasena: String) -> Result<LoginResponse, String> {
    let body = Credenciales {
        usuario,
        contrasena,
    };
    let response = Request::post(&api_url("/usuarios/login"))
        .json(&body)
        .map_err(|_| "Error de conexión al servidor".to_string())?
        .send()
        .await
        .map_err(|_| "Error de conexión al servidor".to_string())?;

    response
        .json::<LoginResponse>()
        .await
        .map_err(|_| "Error de conexión al servidor".to_string())
}
