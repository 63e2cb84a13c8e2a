pub mod aggregate;

pub use aggregate::{Reporte, ReporteDraft};
