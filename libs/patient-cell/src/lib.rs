pub mod models;

pub use models::*;
pub use prescription_cell::Prescription;
