pub mod aggregate;

pub use aggregate::{Servicio, ServicioDraft};
