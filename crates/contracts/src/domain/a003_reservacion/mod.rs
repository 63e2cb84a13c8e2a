pub mod aggregate;

pub use aggregate::{Reservacion, ReservacionDraft};
