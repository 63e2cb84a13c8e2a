use serde::de::DeserializeOwned;
use serde::Serialize;

use super::messages::CrudMessages;

/// How a saved edit reaches the backend.
///
/// `LocalOnly` entities apply the merged record to the list without any
/// network call; their edit forms were never wired to the PUT endpoint and
/// that behavior is kept, declared per entity instead of implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// PUT to `/{resource}/update/:id`, reconcile the list on success.
    Remote,
    /// No network call; the merged record replaces the prior one directly.
    LocalOnly,
}

/// A collection the API exposes under `/{path}/all`.
///
/// Implemented by every record type, including read-only ones that are only
/// fetched for dropdowns and the dashboard.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// URL path segment, e.g. `clientes`.
    const PATH: &'static str;

    /// Key wrapping the collection in the `GET /{path}/all` body,
    /// e.g. `{ "clientes": [...] }`.
    const COLLECTION_KEY: &'static str;

    /// Backend-assigned identifier; `None` on a record not yet created.
    fn id(&self) -> Option<i64>;
}

/// A resource with create/update/delete endpoints and a CRUD screen.
pub trait CrudResource: Resource {
    /// Key wrapping the single record in the `POST /{path}/create` body,
    /// e.g. `{ "cliente": {...} }`.
    const RECORD_KEY: &'static str;

    const UPDATE_POLICY: UpdatePolicy;

    /// Banner texts for this entity, bit-exact Spanish strings.
    const MESSAGES: CrudMessages;

    fn set_id(&mut self, id: Option<i64>);
}
