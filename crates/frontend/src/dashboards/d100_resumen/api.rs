use contracts::dashboards::d100_resumen::{Conteo, IngresoMensual, ReservacionesPorEstado};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;
use crate::shared::crud::ApiError;

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Application {
            status: response.status(),
            message: None,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

pub async fn conteo(path: &str) -> Result<i64, ApiError> {
    get_json::<Conteo>(path).await.map(|c| c.count)
}

pub async fn ingreso_mensual() -> Result<Vec<IngresoMensual>, ApiError> {
    get_json("/facturacion/ingreso-mensual").await
}

pub async fn reservaciones_por_estado() -> Result<Vec<ReservacionesPorEstado>, ApiError> {
    get_json("/reservaciones/estado").await
}
