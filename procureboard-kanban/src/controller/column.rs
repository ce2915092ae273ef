//! Column operations

use super::BoardController;
use crate::error::{KanbanError, Result};
use crate::events::BoardEvent;
use crate::types::{Column, ColumnId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Partial update of a column. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnUpdate {
    /// New title; tasks in the column take it as their status
    pub title: Option<String>,
    /// New color (None = don't change, Some(None) = clear, Some(Some(x)) = set)
    pub color: Option<Option<String>>,
}

impl ColumnUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set or clear the color
    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = Some(color);
        self
    }
}

impl BoardController {
    /// Append a new empty column. Blank titles are rejected.
    pub fn add_column(&mut self, title: impl Into<String>) -> Result<ColumnId> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(KanbanError::invalid_value("title", "column title cannot be empty"));
        }

        let column = Column::new(title);
        let id = column.id.clone();
        let event = BoardEvent::ColumnAdded {
            column_id: id.clone(),
            title: column.title.clone(),
        };
        self.board.columns_mut().push(column);

        debug!(column_id = %id, "column added");
        self.emit(event);
        self.settle();
        Ok(id)
    }

    /// Apply a partial update. Returns `Ok(false)` when the column is unknown.
    pub fn update_column(&mut self, id: &ColumnId, update: ColumnUpdate) -> Result<bool> {
        if let Some(title) = &update.title {
            if title.trim().is_empty() {
                return Err(KanbanError::invalid_value("title", "column title cannot be empty"));
            }
        }
        let Some(index) = self.board.column_index(id) else {
            debug!(column_id = %id, "update of unknown column ignored");
            return Ok(false);
        };

        let column = &mut self.board.columns_mut()[index];
        if let Some(title) = update.title {
            column.title = title;
        }
        if let Some(color) = update.color {
            column.color = color;
        }
        let event = BoardEvent::ColumnUpdated {
            column_id: column.id.clone(),
            title: column.title.clone(),
        };

        self.board.normalize_statuses();
        debug!(column_id = %id, "column updated");
        self.emit(event);
        self.settle();
        Ok(true)
    }

    /// Remove an empty column.
    ///
    /// Returns `Ok(None)` when the column is unknown and
    /// [`KanbanError::ColumnNotEmpty`] while it still holds tasks.
    pub fn delete_column(&mut self, id: &ColumnId) -> Result<Option<Column>> {
        let Some(index) = self.board.column_index(id) else {
            return Ok(None);
        };
        let count = self.board.columns()[index].tasks.len();
        if count > 0 {
            return Err(KanbanError::ColumnNotEmpty {
                id: id.to_string(),
                count,
            });
        }

        let column = self.board.columns_mut().remove(index);
        debug!(column_id = %id, "column deleted");
        self.emit(BoardEvent::ColumnDeleted {
            column_id: column.id.clone(),
            title: column.title.clone(),
        });
        self.settle();
        Ok(Some(column))
    }
}
