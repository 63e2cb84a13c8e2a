pub mod aggregate;

pub use aggregate::{DetalleFactura, DetalleFacturaDraft};
