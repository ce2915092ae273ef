//! Built-in board layout.
//!
//! A fresh board gets the four procurement workflow columns and the two
//! automation rules the dashboard ships with.

use crate::types::{Action, Board, Column, Condition, Rule};

/// Column ids of the built-in layout
pub const TODO_COLUMN: &str = "column-1";
pub const IN_PROGRESS_COLUMN: &str = "column-2";
pub const BLOCKED_COLUMN: &str = "column-3";
pub const COMPLETED_COLUMN: &str = "column-4";

/// Default columns, in display order
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("To Do")
            .with_id(TODO_COLUMN)
            .with_color("bg-blue-50 dark:bg-blue-900/30"),
        Column::new("In Progress")
            .with_id(IN_PROGRESS_COLUMN)
            .with_color("bg-yellow-50 dark:bg-yellow-900/30"),
        Column::new("Blocked")
            .with_id(BLOCKED_COLUMN)
            .with_color("bg-red-50 dark:bg-red-900/30"),
        Column::new("Completed")
            .with_id(COMPLETED_COLUMN)
            .with_color("bg-green-50 dark:bg-green-900/30"),
    ]
}

/// Default automation rules, in evaluation order
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "Move overdue tasks to Blocked",
            Condition::DueDateOverdue,
            Action::move_to(BLOCKED_COLUMN),
        ),
        Rule::new(
            "Move completed tasks when all subtasks done",
            Condition::AllSubtasksCompleted,
            Action::move_to(COMPLETED_COLUMN),
        ),
    ]
}

/// A board with the default columns and rules and no tasks
pub fn default_board() -> Board {
    Board::new(default_columns(), default_rules())
}
