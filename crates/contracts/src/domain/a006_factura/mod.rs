pub mod aggregate;

pub use aggregate::Factura;
