pub mod aggregate;

pub use aggregate::{Empleado, EmpleadoDraft};
