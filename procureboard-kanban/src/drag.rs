//! Drag reconciler
//!
//! Turns the three logical drag events (pick up, hover, drop) into board
//! edits. Cross-column moves happen live while hovering a column;
//! reordering inside a column waits for the drop. One rule pass runs when
//! the gesture ends and it changed the board.

use crate::controller::BoardController;
use crate::error::{KanbanError, Result};
use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// What the pointer is over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum DragTarget {
    Column(ColumnId),
    Task(TaskId),
}

/// Reconciler state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        task_id: TaskId,
        /// Column the task was picked up from
        origin: ColumnId,
    },
}

/// Drag gesture state machine
#[derive(Debug, Clone, Default)]
pub struct DragReconciler {
    state: DragState,
}

impl DragReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// True between pick-up and drop/cancel
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Start dragging a task
    pub fn pick_up(&mut self, board: &BoardController, task_id: &TaskId) -> Result<()> {
        if let DragState::Dragging { task_id: active, .. } = &self.state {
            return Err(KanbanError::DragInProgress {
                id: active.to_string(),
            });
        }
        let origin = board
            .board()
            .column_of(task_id)
            .ok_or_else(|| KanbanError::TaskNotFound {
                id: task_id.to_string(),
            })?;

        debug!(task_id = %task_id, origin = %origin.id, "drag started");
        self.state = DragState::Dragging {
            task_id: task_id.clone(),
            origin: origin.id.clone(),
        };
        Ok(())
    }

    /// Pointer moved over a target. Returns true if the board changed.
    ///
    /// Hovering a different column moves the task to the end of it
    /// immediately. Hovering a task never changes the board.
    pub fn hover(&mut self, board: &mut BoardController, target: &DragTarget) -> Result<bool> {
        let DragState::Dragging { task_id, .. } = &self.state else {
            return Ok(false);
        };

        match target {
            DragTarget::Column(column_id) => {
                let Some(current) = board.board().column_of(task_id) else {
                    return Ok(false);
                };
                if &current.id == column_id || board.find_column(column_id).is_none() {
                    return Ok(false);
                }
                trace!(task_id = %task_id, column = %column_id, "drag crossed into column");
                board.relocate_task(task_id, column_id)
            }
            DragTarget::Task(_) => Ok(false),
        }
    }

    /// Release over `target` (or nowhere). Returns true if a reorder happened.
    ///
    /// Dropping onto another task in the same column moves the dragged task
    /// to that task's index. The reconciler is Idle afterwards whatever the
    /// outcome.
    pub fn drop(
        &mut self,
        board: &mut BoardController,
        target: Option<&DragTarget>,
    ) -> Result<bool> {
        let DragState::Dragging { task_id, origin } = std::mem::take(&mut self.state) else {
            return Ok(false);
        };

        let mut reordered = false;
        if let Some(DragTarget::Task(over_id)) = target {
            if over_id != &task_id {
                if let Some((column_id, from, to)) = same_column_indices(board, &task_id, over_id)
                {
                    reordered = board.reorder_tasks(&column_id, from, to)?;
                }
            }
        }

        debug!(task_id = %task_id, reordered, "drag dropped");
        if reordered || moved_from_origin(board, &task_id, &origin) {
            board.run_rules();
        }
        Ok(reordered)
    }

    /// Abandon the gesture. Live cross-column moves already made are kept.
    pub fn cancel(&mut self, board: &mut BoardController) {
        let DragState::Dragging { task_id, origin } = std::mem::take(&mut self.state) else {
            return;
        };
        debug!(task_id = %task_id, "drag cancelled");
        if moved_from_origin(board, &task_id, &origin) {
            board.run_rules();
        }
    }
}

/// (column, dragged index, target index) when both tasks share a column
fn same_column_indices(
    board: &BoardController,
    dragged: &TaskId,
    over: &TaskId,
) -> Option<(ColumnId, usize, usize)> {
    let column = board.board().column_of(dragged)?;
    let from = column.task_index(dragged)?;
    let to = column.task_index(over)?;
    Some((column.id.clone(), from, to))
}

fn moved_from_origin(board: &BoardController, task_id: &TaskId, origin: &ColumnId) -> bool {
    board
        .board()
        .column_of(task_id)
        .is_some_and(|c| &c.id != origin)
}
