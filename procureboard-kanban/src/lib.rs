//! Kanban board engine for procurement work
//!
//! This crate holds the board behind the procurement dashboard: columns
//! owning ordered task cards, automation rules that move cards when their
//! conditions hold, and the drag reconciliation that turns pointer gestures
//! into board edits. Everything is in-memory and synchronous; rendering and
//! storage are collaborators on the outside.
//!
//! ## Overview
//!
//! - **One owner** - [`BoardController`] is the only thing that mutates a board
//! - **Status follows placement** - a task's `status` is always the title of
//!   the column holding it
//! - **Rules settle every call** - each mutation ends with a rule pass
//! - **Notifications** - every applied change queues a [`BoardEvent`]
//!
//! ## Basic Usage
//!
//! ```rust
//! use procureboard_kanban::{
//!     defaults::TODO_COLUMN, BoardConfig, BoardController, DragReconciler, DragTarget, Task,
//! };
//!
//! let mut board = BoardController::new(BoardConfig::default());
//! let a = board.add_task(&TODO_COLUMN.into(), Task::new("Laptops"))?;
//! let b = board.add_task(&TODO_COLUMN.into(), Task::new("Licenses"))?;
//!
//! let mut drag = DragReconciler::new();
//! drag.pick_up(&board, &a)?;
//! drag.drop(&mut board, Some(&DragTarget::Task(b.clone())))?;
//!
//! let todo = board.find_column(&TODO_COLUMN.into()).unwrap();
//! assert_eq!(todo.task_ids(), vec![b, a]);
//!
//! for event in board.drain_events() {
//!     println!("{}", event.message());
//! }
//! # Ok::<(), procureboard_kanban::KanbanError>(())
//! ```

pub mod config;
mod controller;
pub mod defaults;
pub mod drag;
mod error;
pub mod events;
pub mod rules;
pub mod store;
pub mod types;

pub use config::BoardConfig;
pub use controller::{BoardController, ColumnUpdate, RuleUpdate};
pub use drag::{DragReconciler, DragState, DragTarget};
pub use error::{KanbanError, Result};
pub use events::BoardEvent;
pub use rules::{RuleEngine, RuleMove};
pub use store::{BoardStore, MemoryStore, YamlFileStore};

// Re-export commonly used types
pub use types::{
    Action, Board, Column, ColumnId, Condition, CustomField, CustomFieldId, FieldOperator,
    Priority, Rule, RuleId, Subtask, SubtaskId, Task, TaskId,
};
