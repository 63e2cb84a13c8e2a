pub mod fecha;
pub mod js_num;
pub mod serde_ext;
