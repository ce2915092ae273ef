//! Rule operations

use super::BoardController;
use crate::error::{KanbanError, Result};
use crate::events::BoardEvent;
use crate::types::{Action, Condition, Rule, RuleId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Partial update of a rule. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleUpdate {
    pub name: Option<String>,
    pub condition: Option<Condition>,
    pub action: Option<Action>,
    pub enabled: Option<bool>,
}

impl RuleUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the condition
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Replace the action
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Enable or disable the rule
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

impl BoardController {
    /// Append a rule and run a pass, so it may move tasks immediately.
    ///
    /// A target column that does not exist is accepted; the rule is skipped
    /// during passes until the column appears.
    pub fn add_rule(&mut self, rule: Rule) -> Result<RuleId> {
        if rule.name.trim().is_empty() {
            return Err(KanbanError::invalid_value("name", "rule name cannot be empty"));
        }
        if self.board.find_rule(&rule.id).is_some() {
            return Err(KanbanError::duplicate_id("rule", rule.id.to_string()));
        }

        let id = rule.id.clone();
        let event = BoardEvent::RuleAdded {
            rule_id: id.clone(),
            name: rule.name.clone(),
        };
        self.board.rules_mut().push(rule);

        debug!(rule_id = %id, "rule added");
        self.emit(event);
        self.settle();
        Ok(id)
    }

    /// Apply a partial update. Returns `Ok(false)` when the rule is unknown.
    pub fn update_rule(&mut self, id: &RuleId, update: RuleUpdate) -> Result<bool> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(KanbanError::invalid_value("name", "rule name cannot be empty"));
            }
        }
        let Some(index) = self.board.rule_index(id) else {
            debug!(rule_id = %id, "update of unknown rule ignored");
            return Ok(false);
        };

        let rule = &mut self.board.rules_mut()[index];
        if let Some(name) = update.name {
            rule.name = name;
        }
        if let Some(condition) = update.condition {
            rule.condition = condition;
        }
        if let Some(action) = update.action {
            rule.action = action;
        }
        if let Some(enabled) = update.enabled {
            rule.enabled = enabled;
        }
        let event = BoardEvent::RuleUpdated {
            rule_id: rule.id.clone(),
            name: rule.name.clone(),
        };

        debug!(rule_id = %id, "rule updated");
        self.emit(event);
        self.settle();
        Ok(true)
    }

    /// Remove a rule. Unknown ids are a no-op.
    pub fn delete_rule(&mut self, id: &RuleId) -> Option<Rule> {
        let index = self.board.rule_index(id)?;
        let rule = self.board.rules_mut().remove(index);
        debug!(rule_id = %id, "rule deleted");
        self.emit(BoardEvent::RuleDeleted {
            rule_id: rule.id.clone(),
            name: rule.name.clone(),
        });
        self.settle();
        Some(rule)
    }
}
