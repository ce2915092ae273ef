//! Board change notifications
//!
//! The controller queues one event per applied change. The presentation
//! layer drains the queue after each call and turns events into toasts.

use crate::types::{ColumnId, RuleId, TaskId};
use serde::{Deserialize, Serialize};

/// A change that happened on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoardEvent {
    TaskAdded {
        task_id: TaskId,
        title: String,
        column_id: ColumnId,
        column_title: String,
    },
    TaskUpdated {
        task_id: TaskId,
        title: String,
    },
    TaskDeleted {
        task_id: TaskId,
        title: String,
    },
    TaskDuplicated {
        source_id: TaskId,
        task_id: TaskId,
        title: String,
        column_id: ColumnId,
    },
    /// Cross-column move from a drag or a direct call
    TaskMoved {
        task_id: TaskId,
        title: String,
        from: ColumnId,
        to: ColumnId,
        to_title: String,
    },
    TaskReordered {
        task_id: TaskId,
        column_id: ColumnId,
        from_index: usize,
        to_index: usize,
    },
    /// Cross-column move applied by the rule engine
    TaskMovedByRule {
        task_id: TaskId,
        title: String,
        from: ColumnId,
        to: ColumnId,
        to_title: String,
        rule_id: RuleId,
        rule_name: String,
    },
    ColumnAdded {
        column_id: ColumnId,
        title: String,
    },
    ColumnUpdated {
        column_id: ColumnId,
        title: String,
    },
    ColumnDeleted {
        column_id: ColumnId,
        title: String,
    },
    RuleAdded {
        rule_id: RuleId,
        name: String,
    },
    RuleUpdated {
        rule_id: RuleId,
        name: String,
    },
    RuleDeleted {
        rule_id: RuleId,
        name: String,
    },
}

impl BoardEvent {
    /// Short human-readable description suitable for a toast
    pub fn message(&self) -> String {
        match self {
            Self::TaskAdded {
                title,
                column_title,
                ..
            } => format!("\"{}\" added to {}", title, column_title),
            Self::TaskUpdated { title, .. } => format!("\"{}\" has been updated", title),
            Self::TaskDeleted { title, .. } => format!("\"{}\" has been deleted", title),
            Self::TaskDuplicated { title, .. } => format!("\"{}\" created", title),
            Self::TaskMoved {
                title, to_title, ..
            } => format!("\"{}\" moved to {}", title, to_title),
            Self::TaskReordered {
                from_index,
                to_index,
                ..
            } => format!("Task moved from position {} to {}", from_index + 1, to_index + 1),
            Self::TaskMovedByRule {
                title,
                to_title,
                rule_name,
                ..
            } => format!(
                "\"{}\" moved to {} by rule: {}",
                title, to_title, rule_name
            ),
            Self::ColumnAdded { title, .. } => format!("\"{}\" column has been added", title),
            Self::ColumnUpdated { title, .. } => format!("\"{}\" column has been updated", title),
            Self::ColumnDeleted { title, .. } => {
                format!("\"{}\" column has been deleted", title)
            }
            Self::RuleAdded { name, .. } => format!("\"{}\" has been added", name),
            Self::RuleUpdated { name, .. } => format!("\"{}\" has been updated", name),
            Self::RuleDeleted { name, .. } => format!("\"{}\" has been deleted", name),
        }
    }

    /// True for moves made automatically by a rule
    pub fn is_automatic(&self) -> bool {
        matches!(self, Self::TaskMovedByRule { .. })
    }
}
