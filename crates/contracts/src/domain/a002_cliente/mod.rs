pub mod aggregate;

pub use aggregate::{Cliente, ClienteDraft};
