pub mod aggregate;

pub use aggregate::{Usuario, UsuarioDraft};
