pub mod aggregate;

pub use aggregate::{Restaurante, RestauranteDraft};
