use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("Unsupported {operation} variant: {detail}")]
    UnsupportedVariantError { operation: String, detail: String },

    #[error("Invalid value '{value}' for field {field}: {reason}")]
    FieldValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Required field missing: {field}")]
    MissingFieldError { field: String },

    #[error("Field {field} repeated {count} times, at most {max} allowed")]
    ArityError {
        field: String,
        count: usize,
        max: usize,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Logger initialization failed: {0}")]
    LoggerError(String),
}

impl SegmentError {
    pub fn unsupported(operation: &str, detail: impl Into<String>) -> Self {
        SegmentError::UnsupportedVariantError {
            operation: operation.to_string(),
            detail: detail.into(),
        }
    }

    /// Name of the offending field, for errors that carry one.
    pub fn field(&self) -> Option<&str> {
        match self {
            SegmentError::FieldValidationError { field, .. }
            | SegmentError::MissingFieldError { field }
            | SegmentError::ArityError { field, .. }
            | SegmentError::ConfigError { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SegmentError>;
