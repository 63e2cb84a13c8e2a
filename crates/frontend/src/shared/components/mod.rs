pub mod banner_alert;
pub mod charts;
pub mod form;
pub mod stat_card;

pub use banner_alert::BannerAlert;
pub use form::{SelectField, TextField};
pub use stat_card::StatCard;
