pub mod aggregate;

pub use aggregate::{Habitacion, HabitacionDraft};
