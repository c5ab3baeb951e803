//! Type-safe error codes for API responses.
//!
//! Every code has a wire identifier, an integer for logs and a default
//! message.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A field rule failed
    ValidationError,
    /// The body was not the expected JSON
    JsonExtraction,
    NotFound,
    /// Malformed request that is not a field validation failure
    BadRequest,
    InternalError,
}

impl ErrorCode {
    /// `(identifier, integer code, default message)`
    const fn parts(self) -> (&'static str, i32, &'static str) {
        match self {
            Self::ValidationError => ("VALIDATION_ERROR", 1001, "Request validation failed"),
            Self::JsonExtraction => ("JSON_EXTRACTION", 1003, "Failed to parse request body"),
            Self::NotFound => ("NOT_FOUND", 1004, "Resource not found"),
            Self::InternalError => ("INTERNAL_ERROR", 1005, "An internal server error occurred"),
            Self::BadRequest => ("BAD_REQUEST", 1012, "Bad request"),
        }
    }

    /// Identifier clients match on; same as the serde form.
    pub const fn as_str(&self) -> &'static str {
        self.parts().0
    }

    /// Integer code for structured logs and metrics.
    pub const fn code(&self) -> i32 {
        self.parts().1
    }

    /// Default user-facing message. Handlers may override it.
    pub const fn default_message(&self) -> &'static str {
        self.parts().2
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
