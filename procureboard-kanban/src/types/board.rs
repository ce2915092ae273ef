//! Board model: Board and Column
//!
//! The model is plain data. Reads are public; structural edits are
//! crate-private and only the controller calls them.

use super::ids::{ColumnId, RuleId, TaskId};
use super::rule::Rule;
use super::task::Task;
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A column defines a workflow stage. Its title doubles as the status of
/// every task it contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Column {
    /// Create an empty column with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
            tasks: Vec::new(),
            color: None,
        }
    }

    /// Set the id (used when seeding or restoring)
    pub fn with_id(mut self, id: impl Into<ColumnId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the display color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Position of a task in this column
    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Task ids in display order
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|t| t.id.clone()).collect()
    }
}

/// The full board: ordered columns (owning their tasks) and ordered rules.
///
/// This is also the read-only snapshot handed to the presentation layer and
/// the unit written by a [`crate::BoardStore`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub(crate) columns: Vec<Column>,
    #[serde(default)]
    pub(crate) rules: Vec<Rule>,
}

impl Board {
    /// Build a board from columns and rules.
    ///
    /// Task statuses are normalized to their containing column title.
    pub fn new(columns: Vec<Column>, rules: Vec<Rule>) -> Self {
        let mut board = Self { columns, rules };
        board.normalize_statuses();
        board
    }

    /// Columns in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Find a column by ID
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Find a rule by ID
    pub fn find_rule(&self, id: &RuleId) -> Option<&Rule> {
        self.rules.iter().find(|r| &r.id == id)
    }

    /// Find a task by ID across all columns
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.locate_task(id)
            .map(|(col, idx)| &self.columns[col].tasks[idx])
    }

    /// The column currently holding a task
    pub fn column_of(&self, id: &TaskId) -> Option<&Column> {
        self.locate_task(id).map(|(col, _)| &self.columns[col])
    }

    /// Every task paired with its owning column, in board order
    pub fn all_tasks(&self) -> Vec<(&Column, &Task)> {
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter().map(move |t| (c, t)))
            .collect()
    }

    /// Total number of tasks on the board
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Fail on the first column, task or rule id that appears twice.
    ///
    /// A task id held by two columns would give the task two owners.
    pub fn check_unique_ids(&self) -> Result<()> {
        let mut columns = HashSet::new();
        let mut tasks = HashSet::new();
        for column in &self.columns {
            if !columns.insert(&column.id) {
                return Err(KanbanError::duplicate_id("column", column.id.to_string()));
            }
            for task in &column.tasks {
                if !tasks.insert(&task.id) {
                    return Err(KanbanError::duplicate_id("task", task.id.to_string()));
                }
            }
        }

        let mut rules = HashSet::new();
        for rule in &self.rules {
            if !rules.insert(&rule.id) {
                return Err(KanbanError::duplicate_id("rule", rule.id.to_string()));
            }
        }
        Ok(())
    }

    // =========================================================================
    // Crate-private structure edits
    // =========================================================================

    pub(crate) fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    pub(crate) fn rule_index(&self, id: &RuleId) -> Option<usize> {
        self.rules.iter().position(|r| &r.id == id)
    }

    /// (column index, task index) of a task
    pub(crate) fn locate_task(&self, id: &TaskId) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(ci, c)| c.task_index(id).map(|ti| (ci, ti)))
    }

    pub(crate) fn find_task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        let (col, idx) = self.locate_task(id)?;
        Some(&mut self.columns[col].tasks[idx])
    }

    /// Remove a task, keeping the order of the rest. Returns the column
    /// index it came from.
    pub(crate) fn take_task(&mut self, id: &TaskId) -> Option<(usize, Task)> {
        let (col, idx) = self.locate_task(id)?;
        Some((col, self.columns[col].tasks.remove(idx)))
    }

    /// Append a task to the end of a column and sync its status
    pub(crate) fn push_task(&mut self, column: usize, mut task: Task) {
        let column = &mut self.columns[column];
        task.status = column.title.clone();
        column.tasks.push(task);
    }

    pub(crate) fn columns_mut(&mut self) -> &mut Vec<Column> {
        &mut self.columns
    }

    pub(crate) fn rules_mut(&mut self) -> &mut Vec<Rule> {
        &mut self.rules
    }

    /// Force every task's status to its column title
    pub(crate) fn normalize_statuses(&mut self) {
        for column in &mut self.columns {
            for task in &mut column.tasks {
                if task.status != column.title {
                    task.status = column.title.clone();
                }
            }
        }
    }
}
