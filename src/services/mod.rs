pub use self::errors::{ServiceError, ServiceResult};

pub mod errors;
pub mod main;
pub mod products;
