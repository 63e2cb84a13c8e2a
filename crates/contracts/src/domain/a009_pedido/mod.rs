pub mod aggregate;

pub use aggregate::{Pedido, PedidoDraft};
