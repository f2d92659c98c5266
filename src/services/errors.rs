use thiserror::Error;

use crate::forms::products::{AddProductFormError, EditProductFormError};
use crate::repository::errors::RepositoryError;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// A submitted form failed conversion.
    #[error("{0}")]
    Form(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<AddProductFormError> for ServiceError {
    fn from(value: AddProductFormError) -> Self {
        ServiceError::Form(value.to_string())
    }
}

impl From<EditProductFormError> for ServiceError {
    fn from(value: EditProductFormError) -> Self {
        ServiceError::Form(value.to_string())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => {
                log::error!("Repository error: {other}");
                ServiceError::Internal
            }
        }
    }
}
