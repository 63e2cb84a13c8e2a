//! The CRUD engine every entity screen is built on.
//!
//! One resource screen is always the same machine: a list store holding the
//! collection, an edit-mode toggle feeding the form, and a dispatcher that
//! turns a user action into at most one request, at most one list mutation
//! and exactly one banner update. The per-entity pieces (wire names, update
//! policy, messages, coercion) live in `contracts`; everything here is
//! generic over them.

pub mod api;
pub mod banner;
pub mod edit_mode;
pub mod list_store;
pub mod lookup;
pub mod view_model;

pub use api::ApiError;
pub use banner::Banner;
pub use edit_mode::EditMode;
pub use list_store::ListStore;
pub use lookup::use_lookup;
pub use view_model::CrudVm;
