//! Generic HTTP layer: one function per verb of the resource API.

use contracts::domain::common::{CrudResource, Resource};
use gloo_net::http::{Request, Response};
use serde_json::Value;

use crate::shared::api_utils::api_url;

/// The two failure kinds the screens distinguish. A body that cannot be
/// parsed counts as `Transport`: it lands in the same catch-all path a
/// network failure does.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a usable HTTP response.
    Transport(String),
    /// HTTP response with a non-2xx status, with the server's `message`
    /// field when the body carried one.
    Application { status: u16, message: Option<String> },
}

async fn error_from_response(resp: Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<Value>()
        .await
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str().map(str::to_string)));
    ApiError::Application { status, message }
}

fn transport(err: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Pulls the collection out of the `{ "<clave>": [...] }` envelope.
pub fn parse_collection<R: Resource>(body: Value) -> Result<Vec<R>, ApiError> {
    let items = body
        .get(R::COLLECTION_KEY)
        .cloned()
        .ok_or_else(|| transport(format!("falta la clave '{}'", R::COLLECTION_KEY)))?;
    serde_json::from_value(items).map_err(transport)
}

/// Pulls the created record out of the `{ "<clave>": {...} }` envelope.
pub fn parse_record<R: CrudResource>(body: Value) -> Result<R, ApiError> {
    let record = body
        .get(R::RECORD_KEY)
        .cloned()
        .ok_or_else(|| transport(format!("falta la clave '{}'", R::RECORD_KEY)))?;
    serde_json::from_value(record).map_err(transport)
}

/// `GET /{path}/all`, server order preserved.
pub async fn fetch_all<R: Resource>() -> Result<Vec<R>, ApiError> {
    let resp = Request::get(&api_url(&format!("/{}/all", R::PATH)))
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    let body: Value = resp.json().await.map_err(transport)?;
    parse_collection::<R>(body)
}

/// `POST /{path}/create`; returns the authoritative record, id included.
pub async fn create<R: CrudResource>(body: &Value) -> Result<R, ApiError> {
    let resp = Request::post(&api_url(&format!("/{}/create", R::PATH)))
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    let body: Value = resp.json().await.map_err(transport)?;
    parse_record::<R>(body)
}

/// `PUT /{path}/update/:id`. Some endpoints echo the updated record under
/// the singular key, others answer `{ ok }`; the caller reconciles with
/// whichever came back.
pub async fn update<R: CrudResource>(id: i64, record: &R) -> Result<Option<R>, ApiError> {
    let resp = Request::put(&api_url(&format!("/{}/update/{}", R::PATH, id)))
        .json(record)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    let body: Value = resp.json().await.unwrap_or(Value::Null);
    Ok(parse_record::<R>(body).ok())
}

/// `DELETE /{path}/delete/:id`; a 2xx status is all that matters.
pub async fn delete<R: CrudResource>(id: i64) -> Result<(), ApiError> {
    let resp = Request::delete(&api_url(&format!("/{}/delete/{}", R::PATH, id)))
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_cliente::Cliente;
    use serde_json::json;

    #[test]
    fn collection_envelope_unwraps_in_server_order() {
        let body = json!({ "clientes": [
            { "ID_CLIENTE": 2, "NOMBRE": "B" },
            { "ID_CLIENTE": 1, "NOMBRE": "A" },
        ]});
        let clientes = parse_collection::<Cliente>(body).unwrap();
        assert_eq!(clientes.len(), 2);
        assert_eq!(clientes[0].id_cliente, Some(2));
    }

    #[test]
    fn missing_envelope_key_is_a_transport_error() {
        let err = parse_collection::<Cliente>(json!({ "otros": [] })).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn create_envelope_yields_the_record_with_its_id() {
        let body = json!({ "cliente": { "ID_CLIENTE": 10, "NOMBRE": "Ana", "ID_USUARIO": 3 } });
        let cliente = parse_record::<Cliente>(body).unwrap();
        assert_eq!(cliente.id_cliente, Some(10));
        assert_eq!(cliente.nombre, "Ana");
    }
}
