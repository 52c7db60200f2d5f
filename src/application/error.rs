// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

// Keeps the failure kind so the HTTP layer can pick the right status.
impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Forbidden(msg) => Self::Forbidden(msg),
            DomainError::Persistence(msg) => Self::Infrastructure(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_kind() {
        assert!(matches!(
            ApplicationError::from(DomainError::NotFound("comment 1".into())),
            ApplicationError::NotFound(_)
        ));
        assert!(matches!(
            ApplicationError::from(DomainError::Forbidden("nope".into())),
            ApplicationError::Forbidden(_)
        ));
        assert!(matches!(
            ApplicationError::from(DomainError::Persistence("db down".into())),
            ApplicationError::Infrastructure(_)
        ));
    }
}
