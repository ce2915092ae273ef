//! Error types for the kanban engine

use std::path::PathBuf;
use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Rule not found
    #[error("rule not found: {id}")]
    RuleNotFound { id: String },

    /// Column has tasks and cannot be deleted
    #[error("column '{id}' has {count} tasks and cannot be deleted")]
    ColumnNotEmpty { id: String, count: usize },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// A drag gesture is already active
    #[error("a drag is already in progress for task {id}")]
    DragInProgress { id: String },

    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Figment extraction error
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    /// Board file could not be written
    #[error("failed to persist board to {path}: {message}")]
    Persist { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl KanbanError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error was caused by bad caller input.
    ///
    /// Validation errors leave the board unchanged and are meant to be shown
    /// to the user; everything else is an environment failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound { .. }
                | Self::ColumnNotFound { .. }
                | Self::RuleNotFound { .. }
                | Self::ColumnNotEmpty { .. }
                | Self::DuplicateId { .. }
                | Self::InvalidValue { .. }
                | Self::DragInProgress { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KanbanError::TaskNotFound {
            id: "abc123".into(),
        };
        assert_eq!(err.to_string(), "task not found: abc123");
    }

    #[test]
    fn test_column_not_empty_display() {
        let err = KanbanError::ColumnNotEmpty {
            id: "column-1".into(),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "column 'column-1' has 2 tasks and cannot be deleted"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(KanbanError::invalid_value("title", "empty").is_validation());
        assert!(KanbanError::duplicate_id("task", "t1").is_validation());
        assert!(!KanbanError::config("bad").is_validation());
        let io = std::io::Error::other("disk");
        assert!(!KanbanError::from(io).is_validation());
    }
}
