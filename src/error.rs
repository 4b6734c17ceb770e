use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed for `{field}`: {message}")]
    Validation { field: String, message: String },
    #[error("Validation failed: {}", .0.join(", "))]
    Form(Vec<String>),
    #[error("Template error: {0}")]
    Template(String),
    #[error("Could not decode model output: {0}")]
    Decode(String),
    #[error("Model invocation failed: {0}")]
    Invocation(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation { field: field.into(), message: message.into() }
    }

    /// The offending field, for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            AppError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Re-labels a schema failure on a model response as a decode failure.
    pub fn into_decode(self) -> Self {
        match self {
            AppError::Validation { field, message } => AppError::Decode(format!("{field}: {message}")),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
