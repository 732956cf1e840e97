use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => RepositoryError::NotFound,
            _ => RepositoryError::StorageError(format!("I/O error: {err}")),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            RepositoryError::StorageError(format!("I/O error: {err}"))
        } else {
            RepositoryError::ValidationError(format!("Malformed dataset: {err}"))
        }
    }
}

impl From<serde_html_form::ser::Error> for RepositoryError {
    fn from(err: serde_html_form::ser::Error) -> Self {
        RepositoryError::Unexpected(format!("Query encoding error: {err}"))
    }
}
