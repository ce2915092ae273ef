//! Board persistence
//!
//! Storage sits outside the core behind a synchronous save/load contract.
//! A save completes before the next read.

use crate::error::{KanbanError, Result};
use crate::types::Board;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Somewhere a board can be saved to and loaded from
pub trait BoardStore {
    /// Persist the whole board, replacing what was there
    fn save(&mut self, board: &Board) -> Result<()>;

    /// Read the board back. `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Board>>;
}

/// Keeps the last saved board in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    board: Option<Board>,
}

impl BoardStore for MemoryStore {
    fn save(&mut self, board: &Board) -> Result<()> {
        self.board = Some(board.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Board>> {
        Ok(self.board.clone())
    }
}

/// Stores the board as a single YAML document
#[derive(Debug, Clone)]
pub struct YamlFileStore {
    path: PathBuf,
}

impl YamlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the board file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BoardStore for YamlFileStore {
    fn save(&mut self, board: &Board) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let yaml = serde_yaml_ng::to_string(board)?;
        // Write beside the target and rename so readers never see a torn file
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(yaml.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| KanbanError::Persist {
            path: self.path.clone(),
            message: e.error.to_string(),
        })?;

        debug!(path = %self.path.display(), tasks = board.task_count(), "board saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<Board>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let mut board: Board = serde_yaml_ng::from_str(&contents)?;
        board.check_unique_ids()?;
        board.normalize_statuses();
        debug!(path = %self.path.display(), tasks = board.task_count(), "board loaded");
        Ok(Some(board))
    }
}
