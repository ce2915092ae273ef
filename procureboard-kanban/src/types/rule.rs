//! Automation rule types: Rule, Condition, FieldOperator, Action

use super::ids::{ColumnId, RuleId};
use serde::{Deserialize, Serialize};

/// A declarative condition → action pair evaluated against every task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: RuleId,
    pub name: String,
    pub condition: Condition,
    pub action: Action,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Rule {
    /// Create a new, enabled rule
    pub fn new(name: impl Into<String>, condition: Condition, action: Action) -> Self {
        Self {
            id: RuleId::new(),
            name: name.into(),
            condition,
            action,
            enabled: true,
        }
    }

    /// Set the id (used when seeding or restoring)
    pub fn with_id(mut self, id: impl Into<RuleId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the enabled flag
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// What a rule checks on a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Condition {
    /// Due date passed and the task is not in the terminal column
    DueDateOverdue,
    /// At least one subtask and all of them completed
    AllSubtasksCompleted,
    /// Compare a named custom field against a fixed value
    CustomField {
        field: String,
        operator: FieldOperator,
        value: String,
    },
}

impl Condition {
    /// Shorthand for a custom field comparison
    pub fn custom_field(
        field: impl Into<String>,
        operator: FieldOperator,
        value: impl Into<String>,
    ) -> Self {
        Self::CustomField {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

/// Comparison applied to a custom field's string value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldOperator {
    Equals,
    NotEquals,
    /// Substring test on the field value
    Contains,
}

impl FieldOperator {
    /// Apply the operator with the field value on the left
    pub fn apply(self, actual: &str, expected: &str) -> bool {
        match self {
            Self::Equals => actual == expected,
            Self::NotEquals => actual != expected,
            Self::Contains => actual.contains(expected),
        }
    }
}

/// What a rule does when its condition holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Action {
    MoveToColumn {
        #[serde(rename = "targetColumnId")]
        target_column_id: ColumnId,
    },
}

impl Action {
    /// Shorthand for a move-to-column action
    pub fn move_to(column: impl Into<ColumnId>) -> Self {
        Self::MoveToColumn {
            target_column_id: column.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FieldOperator::Equals, "IT", "IT", true)]
    #[case(FieldOperator::Equals, "IT", "HR", false)]
    #[case(FieldOperator::NotEquals, "IT", "HR", true)]
    #[case(FieldOperator::NotEquals, "IT", "IT", false)]
    #[case(FieldOperator::Contains, "Budget approval pending", "approval", true)]
    #[case(FieldOperator::Contains, "Budget approval pending", "Approval", false)]
    #[case(FieldOperator::Contains, "anything", "", true)]
    fn test_field_operator(
        #[case] op: FieldOperator,
        #[case] actual: &str,
        #[case] expected: &str,
        #[case] result: bool,
    ) {
        assert_eq!(op.apply(actual, expected), result);
    }

    #[test]
    fn test_rule_serialization_shape() {
        let rule = Rule::new(
            "Blocker present",
            Condition::custom_field("Blocker", FieldOperator::NotEquals, ""),
            Action::move_to("column-3"),
        )
        .with_id("rule-1");

        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["condition"]["type"], "custom-field");
        assert_eq!(json["condition"]["operator"], "not-equals");
        assert_eq!(json["action"]["type"], "move-to-column");
        assert_eq!(json["action"]["targetColumnId"], "column-3");

        let parsed: Rule = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, rule);
    }

    #[test]
    fn test_rule_enabled_defaults_to_true() {
        let json = r#"{
            "id": "rule-1",
            "name": "Overdue",
            "condition": {"type": "due-date-overdue"},
            "action": {"type": "move-to-column", "targetColumnId": "column-3"}
        }"#;
        let rule: Rule = serde_json::from_str(json).unwrap();
        assert!(rule.enabled);
        assert_eq!(rule.condition, Condition::DueDateOverdue);
    }
}
