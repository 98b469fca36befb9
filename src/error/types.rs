// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// One problem found in a submitted form before any entity is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Entity construction failed (inner validation layer)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Submitted form failed the request-shape checks (outer layer)
    #[error("Submitted form is invalid ({} issue(s))", .0.len())]
    RequestRejected(Vec<FieldIssue>),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Lookup by ID found nothing; carries the resource name
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Other error: {0}")]
    Other(String),
}

impl From<std::net::AddrParseError> for AppError {
    fn from(err: std::net::AddrParseError) -> Self {
        AppError::Config(format!("Invalid bind address: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
