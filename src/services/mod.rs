//! Business logic behind the contract list screen.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod contracts;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    #[error("Type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),

    #[error("Internal error")]
    Internal,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
