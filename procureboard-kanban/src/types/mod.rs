//! Core types for the kanban engine

mod board;
mod ids;
mod rule;
mod task;

// Re-export all types
pub use board::{Board, Column};
pub use ids::{ColumnId, CustomFieldId, RuleId, SubtaskId, TaskId};
pub use rule::{Action, Condition, FieldOperator, Rule};
pub use task::{CustomField, Priority, Subtask, Task};
