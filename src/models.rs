//! Frontend Models
//!
//! Data structures for the todo list and its persisted form.

use serde::{Deserialize, Serialize};

/// A single todo entry: nothing but its text. An item has no id or
/// metadata; its position in the list is its only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoItem {
    pub text: String,
}

impl TodoItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Wire shape of the persisted slot: `{"todos":["...", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedTodos {
    pub todos: Vec<TodoItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_as_bare_string() {
        let item = TodoItem::new("buy milk");
        assert_eq!(serde_json::to_string(&item).unwrap(), "\"buy milk\"");
    }

    #[test]
    fn test_saved_todos_shape() {
        let saved = SavedTodos {
            todos: vec![TodoItem::new("a"), TodoItem::new("b")],
        };
        assert_eq!(
            serde_json::to_string(&saved).unwrap(),
            r#"{"todos":["a","b"]}"#
        );
    }
}
