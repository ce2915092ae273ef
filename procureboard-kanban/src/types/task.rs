//! Task types: Task, Priority, Subtask, CustomField

use super::ids::{CustomFieldId, SubtaskId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Urgency of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// A task/card on the kanban board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,

    /// Title of the containing column. The controller keeps this in sync
    /// with placement; values set by callers are overwritten.
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub priority: Priority,

    /// No due date means no deadline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub subtasks: Vec<Subtask>,

    #[serde(default)]
    pub custom_fields: Vec<CustomField>,

    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: String::new(),
            status: String::new(),
            priority: Priority::default(),
            due_date: None,
            subtasks: Vec::new(),
            custom_fields: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Set the id (used when seeding or restoring)
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Append a subtask
    pub fn with_subtask(mut self, subtask: Subtask) -> Self {
        self.subtasks.push(subtask);
        self
    }

    /// Append a custom field
    pub fn with_custom_field(mut self, field: CustomField) -> Self {
        self.custom_fields.push(field);
        self
    }

    /// True when the due date lies strictly before `now`
    pub fn is_past_due(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| due < now)
    }

    /// True when there is at least one subtask and every subtask is done
    pub fn all_subtasks_completed(&self) -> bool {
        !self.subtasks.is_empty() && self.subtasks.iter().all(|s| s.completed)
    }

    /// Look up a custom field by name (first match wins)
    pub fn custom_field(&self, name: &str) -> Option<&CustomField> {
        self.custom_fields.iter().find(|f| f.name == name)
    }

    /// Find a subtask by ID (mutable)
    pub fn find_subtask_mut(&mut self, id: &SubtaskId) -> Option<&mut Subtask> {
        self.subtasks.iter_mut().find(|s| &s.id == id)
    }

    /// Flip a subtask's completion flag. Returns the new value.
    pub fn toggle_subtask(&mut self, id: &SubtaskId) -> Option<bool> {
        let subtask = self.find_subtask_mut(id)?;
        subtask.completed = !subtask.completed;
        Some(subtask.completed)
    }
}

/// A checklist item on a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Subtask {
    /// Create a new, incomplete subtask
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: SubtaskId::new(),
            title: title.into(),
            completed: false,
        }
    }

    /// Mark the subtask as completed
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// A free-form name/value pair attached to a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: CustomFieldId,
    pub name: String,
    pub value: String,
}

impl CustomField {
    /// Create a new custom field
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: CustomFieldId::new(),
            name: name.into(),
            value: value.into(),
        }
    }
}
