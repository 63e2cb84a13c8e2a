//! Common traits and types shared by every resource family.

pub mod draft;
pub mod messages;
pub mod resource;

pub use draft::Draft;
pub use messages::{CrudMessages, ERROR_FALLBACK, FETCH_TRANSPORT, MUTATION_TRANSPORT};
pub use resource::{CrudResource, Resource, UpdatePolicy};
