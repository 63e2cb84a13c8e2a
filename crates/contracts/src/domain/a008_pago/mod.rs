pub mod aggregate;

pub use aggregate::{Pago, PagoDraft};
