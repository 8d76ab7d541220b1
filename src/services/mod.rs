pub mod browse;
pub mod catalog;
pub mod detail;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
