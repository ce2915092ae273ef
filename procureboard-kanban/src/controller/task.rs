//! Task operations

use super::BoardController;
use crate::error::{KanbanError, Result};
use crate::events::BoardEvent;
use crate::types::{ColumnId, SubtaskId, Task, TaskId};
use chrono::Utc;
use tracing::debug;

impl BoardController {
    /// Append a task to the end of a column.
    ///
    /// Fails if the column does not exist, the title is blank, or the id is
    /// already on the board.
    pub fn add_task(&mut self, column_id: &ColumnId, task: Task) -> Result<TaskId> {
        let id = self.insert_task(column_id, task)?;
        self.settle();
        Ok(id)
    }

    /// Validate and append without running a rule pass
    fn insert_task(&mut self, column_id: &ColumnId, task: Task) -> Result<TaskId> {
        let column = self
            .board
            .column_index(column_id)
            .ok_or_else(|| KanbanError::ColumnNotFound {
                id: column_id.to_string(),
            })?;
        if task.title.trim().is_empty() {
            return Err(KanbanError::invalid_value("title", "task title cannot be empty"));
        }
        if self.board.find_task(&task.id).is_some() {
            return Err(KanbanError::duplicate_id("task", task.id.to_string()));
        }

        let id = task.id.clone();
        let title = task.title.clone();
        self.board.push_task(column, task);
        let column_title = self.board.columns()[column].title.clone();

        debug!(task_id = %id, column = %column_title, "task added");
        self.emit(BoardEvent::TaskAdded {
            task_id: id.clone(),
            title,
            column_id: column_id.clone(),
            column_title,
        });
        Ok(id)
    }

    /// Replace the task with the same id, wherever it sits.
    ///
    /// Returns `Ok(false)` without changes when no such task exists. The
    /// stored `created_at` and the placement-derived `status` win over the
    /// values carried by `updated`.
    pub fn update_task(&mut self, updated: Task) -> Result<bool> {
        if updated.title.trim().is_empty() {
            return Err(KanbanError::invalid_value("title", "task title cannot be empty"));
        }
        let Some(task) = self.board.find_task_mut(&updated.id) else {
            debug!(task_id = %updated.id, "update of unknown task ignored");
            return Ok(false);
        };

        let created_at = task.created_at;
        let status = std::mem::take(&mut task.status);
        *task = Task {
            created_at,
            status,
            ..updated
        };

        let event = BoardEvent::TaskUpdated {
            task_id: task.id.clone(),
            title: task.title.clone(),
        };
        debug!(task_id = %task.id, "task updated");
        self.emit(event);
        self.settle();
        Ok(true)
    }

    /// Flip one subtask's completion flag. Returns the new flag, or `None`
    /// when the task or subtask is unknown.
    pub fn toggle_subtask(&mut self, task_id: &TaskId, subtask_id: &SubtaskId) -> Option<bool> {
        let task = self.board.find_task_mut(task_id)?;
        let completed = task.toggle_subtask(subtask_id)?;
        let event = BoardEvent::TaskUpdated {
            task_id: task.id.clone(),
            title: task.title.clone(),
        };
        debug!(task_id = %task_id, subtask_id = %subtask_id, completed, "subtask toggled");
        self.emit(event);
        self.settle();
        Some(completed)
    }

    /// Remove a task. Unknown ids are a no-op.
    pub fn delete_task(&mut self, id: &TaskId) -> Option<Task> {
        let (_, task) = self.board.take_task(id)?;
        debug!(task_id = %id, "task deleted");
        self.emit(BoardEvent::TaskDeleted {
            task_id: task.id.clone(),
            title: task.title.clone(),
        });
        self.settle();
        Some(task)
    }

    /// Deep-copy `source` under a new id and append it to `column_id`, or
    /// to the column currently holding `source` when none is given.
    ///
    /// `source` need not be on the board when a column is named.
    pub fn duplicate_task(&mut self, source: &Task, column_id: Option<&ColumnId>) -> Result<TaskId> {
        let target = match column_id {
            Some(id) => id.clone(),
            None => self
                .board
                .column_of(&source.id)
                .map(|c| c.id.clone())
                .ok_or_else(|| KanbanError::TaskNotFound {
                    id: source.id.to_string(),
                })?,
        };

        let copy = Task {
            id: TaskId::new(),
            title: format!("{}{}", source.title, self.config.copy_suffix),
            created_at: Utc::now(),
            ..source.clone()
        };
        let copy_title = copy.title.clone();

        let id = self.insert_task(&target, copy)?;
        self.emit(BoardEvent::TaskDuplicated {
            source_id: source.id.clone(),
            task_id: id.clone(),
            title: copy_title,
            column_id: target,
        });
        self.settle();
        Ok(id)
    }

    /// Move a task to the end of another column.
    ///
    /// Moving into the column it already occupies is a no-op.
    pub fn move_across_columns(&mut self, task_id: &TaskId, column_id: &ColumnId) -> Result<()> {
        if self.relocate_task(task_id, column_id)? {
            self.settle();
        }
        Ok(())
    }

    /// Move the task at `from` to position `to` within one column, shifting
    /// the tasks in between (a move, not a swap).
    pub fn reorder_within_column(
        &mut self,
        column_id: &ColumnId,
        from: usize,
        to: usize,
    ) -> Result<()> {
        if self.reorder_tasks(column_id, from, to)? {
            self.settle();
        }
        Ok(())
    }

    // =========================================================================
    // Gesture primitives: same edits, no rule pass
    // =========================================================================

    /// Returns true if the task changed column
    pub(crate) fn relocate_task(&mut self, task_id: &TaskId, column_id: &ColumnId) -> Result<bool> {
        let target = self
            .board
            .column_index(column_id)
            .ok_or_else(|| KanbanError::ColumnNotFound {
                id: column_id.to_string(),
            })?;
        let (source, _) = self
            .board
            .locate_task(task_id)
            .ok_or_else(|| KanbanError::TaskNotFound {
                id: task_id.to_string(),
            })?;
        if source == target {
            return Ok(false);
        }

        let from = self.board.columns()[source].id.clone();
        if let Some((_, task)) = self.board.take_task(task_id) {
            self.board.push_task(target, task);
        }

        let column = &self.board.columns()[target];
        let event = BoardEvent::TaskMoved {
            task_id: task_id.clone(),
            title: column
                .tasks
                .last()
                .map(|t| t.title.clone())
                .unwrap_or_default(),
            from,
            to: column.id.clone(),
            to_title: column.title.clone(),
        };
        debug!(task_id = %task_id, to = %column.title, "task moved across columns");
        self.emit(event);
        Ok(true)
    }

    /// Returns true if the order changed
    pub(crate) fn reorder_tasks(&mut self, column_id: &ColumnId, from: usize, to: usize) -> Result<bool> {
        let index = self
            .board
            .column_index(column_id)
            .ok_or_else(|| KanbanError::ColumnNotFound {
                id: column_id.to_string(),
            })?;
        let tasks = &mut self.board.columns_mut()[index].tasks;
        let len = tasks.len();
        if from >= len || to >= len {
            return Err(KanbanError::invalid_value(
                "index",
                format!("positions {} and {} must be below {}", from, to, len),
            ));
        }
        if from == to {
            return Ok(false);
        }

        let task = tasks.remove(from);
        let task_id = task.id.clone();
        tasks.insert(to, task);

        debug!(column = %column_id, task_id = %task_id, from, to, "task reordered");
        self.emit(BoardEvent::TaskReordered {
            task_id,
            column_id: column_id.clone(),
            from_index: from,
            to_index: to,
        });
        Ok(true)
    }
}
