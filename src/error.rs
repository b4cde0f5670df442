use thiserror::Error;

use crate::types::PayloadTag;

/// Main error type for the report decoding system
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Payload `{tag}` does not match its expected shape: {message}")]
    PayloadShape { tag: PayloadTag, message: String },

    #[error("No `{0}` payload was extracted from this section")]
    MissingPayload(PayloadTag),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ReportError::Serialization(_) => "SERIALIZATION_ERROR",
            ReportError::PayloadShape { .. } => "PAYLOAD_SHAPE_ERROR",
            ReportError::MissingPayload(_) => "MISSING_PAYLOAD",
            ReportError::Io(_) => "IO_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        })
    }
}
