//! Typed identifiers.
//!
//! Ids are opaque strings. Fresh ids are ULIDs; seeded ids such as
//! `column-3` are accepted through `from_string`.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a new unique id
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Wrap an existing id string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }
    };
}

string_id!(
    /// Identifier of a task card
    TaskId
);
string_id!(
    /// Identifier of a board column
    ColumnId
);
string_id!(
    /// Identifier of an automation rule
    RuleId
);
string_id!(
    /// Identifier of a subtask checklist item
    SubtaskId
);
string_id!(
    /// Identifier of a custom field on a task
    CustomFieldId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique_ulids() {
        let a = TaskId::new();
        let b = TaskId::new();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 26);
    }

    #[test]
    fn test_from_string_keeps_value() {
        let id = ColumnId::from_string("column-3");
        assert_eq!(id.as_str(), "column-3");
        assert_eq!(id.to_string(), "column-3");
        assert_eq!(ColumnId::from("column-3"), id);
    }

    #[test]
    fn test_serializes_transparently() {
        let id = RuleId::from_string("rule-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"rule-1\"");
    }
}
