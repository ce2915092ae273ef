//! Error types for ticket operations

use thiserror::Error;

/// Result type for ticket operations
pub type Result<T> = std::result::Result<T, TicketError>;

/// Errors that can occur in ticket operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TicketError {
    /// Ticket not found
    #[error("ticket not found: {id}")]
    NotFound { id: String },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl TicketError {
    /// Create a not found error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}
