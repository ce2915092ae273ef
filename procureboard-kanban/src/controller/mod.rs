//! BoardController - the single owner of the board
//!
//! Every mutation goes through the controller. Each public mutating call
//! validates its input, edits the board, records notifications, and then
//! runs a rule pass before returning, so callers always observe a board
//! where statuses match placement and rules have settled.

mod column;
mod rule;
mod task;

pub use column::ColumnUpdate;
pub use rule::RuleUpdate;

use crate::config::BoardConfig;
use crate::defaults::default_board;
use crate::error::{KanbanError, Result};
use crate::events::BoardEvent;
use crate::rules::{RuleEngine, RuleMove};
use crate::store::BoardStore;
use crate::types::{Board, Column, ColumnId, Rule, Task, TaskId};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Façade over the board model, drag reconciliation and rule engine
#[derive(Debug, Clone)]
pub struct BoardController {
    board: Board,
    config: BoardConfig,
    events: Vec<BoardEvent>,
}

impl BoardController {
    /// Create a controller. The default layout is seeded when
    /// `config.seed_defaults` is set, otherwise the board starts empty.
    pub fn new(config: BoardConfig) -> Self {
        let board = if config.seed_defaults {
            default_board()
        } else {
            Board::default()
        };
        Self {
            board,
            config,
            events: Vec::new(),
        }
    }

    /// Wrap an existing board. Statuses are resynced to placement.
    ///
    /// Fails with [`KanbanError::DuplicateId`] when a column, task or rule id
    /// repeats.
    pub fn from_board(mut board: Board, config: BoardConfig) -> Result<Self> {
        board.check_unique_ids()?;
        board.normalize_statuses();
        Ok(Self {
            board,
            config,
            events: Vec::new(),
        })
    }

    /// Restore from a store, falling back to [`BoardController::new`] when the
    /// store is empty.
    pub fn load_from(store: &impl BoardStore, config: BoardConfig) -> Result<Self> {
        match store.load()? {
            Some(board) => {
                debug!(
                    columns = board.columns().len(),
                    tasks = board.task_count(),
                    "board loaded from store"
                );
                Self::from_board(board, config)
            }
            None => Ok(Self::new(config)),
        }
    }

    /// Write the current board to a store
    pub fn save_to(&self, store: &mut impl BoardStore) -> Result<()> {
        store.save(&self.board)
    }

    /// Restore from the file at `config.store_path`, or start fresh when no
    /// path is configured or the file does not exist yet.
    pub fn open(config: BoardConfig) -> Result<Self> {
        match config.file_store() {
            Some(store) => Self::load_from(&store, config),
            None => Ok(Self::new(config)),
        }
    }

    /// Write the board to the file at `config.store_path`
    pub fn save(&self) -> Result<()> {
        let mut store = self
            .config
            .file_store()
            .ok_or_else(|| KanbanError::config("store_path is not set"))?;
        self.save_to(&mut store)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Borrow the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the board for rendering or persistence
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Columns in display order
    pub fn columns(&self) -> &[Column] {
        self.board.columns()
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        self.board.rules()
    }

    /// Find a task by ID
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.board.find_task(id)
    }

    /// Find a column by ID
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.board.find_column(id)
    }

    /// Active configuration
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Notifications queued since the last drain, oldest first
    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    /// Take all queued notifications
    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: BoardEvent) {
        debug!(event = ?event, "board event");
        self.events.push(event);
    }

    // =========================================================================
    // Rule passes
    // =========================================================================

    /// Run a rule pass now
    pub fn run_rules(&mut self) -> Vec<RuleMove> {
        self.run_rules_at(Utc::now())
    }

    /// Run a rule pass as of `now`. Returns the moves applied.
    pub fn run_rules_at(&mut self, now: DateTime<Utc>) -> Vec<RuleMove> {
        let engine = RuleEngine::new(&self.config.terminal_column);
        let moves = engine.run(&mut self.board, now);
        for mv in &moves {
            self.events.push(BoardEvent::TaskMovedByRule {
                task_id: mv.task_id.clone(),
                title: mv.title.clone(),
                from: mv.from.clone(),
                to: mv.to.clone(),
                to_title: mv.to_title.clone(),
                rule_id: mv.rule_id.clone(),
                rule_name: mv.rule_name.clone(),
            });
        }
        moves
    }

    /// Pass run at the end of every public mutation
    fn settle(&mut self) {
        self.run_rules();
    }
}
