//! Application State Store
//!
//! `TodoState` is the single source of truth for the list and the draft.
//! `TodoStore` wraps it in a Leptos signal so the views re-render on every
//! mutation, and writes the list through to local storage.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::models::TodoItem;
use crate::storage;

/// The list, the input draft, and the latest persistence failure.
#[derive(Clone, Debug, Default)]
pub struct TodoState {
    /// All todos in display order
    pub todos: Vec<TodoItem>,
    /// Text currently staged in the input field
    pub draft: String,
    /// Most recent storage error, surfaced in the status bar
    pub last_error: Option<String>,
}

impl TodoState {
    /// Append `text` as a new item at the end of the list.
    pub fn add(&mut self, text: &str, config: &AppConfig) -> Result<()> {
        if !config.allow_empty && text.is_empty() {
            return Err(Error::EmptyText);
        }
        self.todos.push(TodoItem::new(text));
        Ok(())
    }

    /// Remove the item at `position`; later items shift down by one.
    /// Out-of-range positions leave the list untouched.
    pub fn delete_at(&mut self, position: usize) -> Result<TodoItem> {
        if position >= self.todos.len() {
            return Err(Error::OutOfRange {
                position,
                len: self.todos.len(),
            });
        }
        Ok(self.todos.remove(position))
    }

    /// Pull the item at `position` out of the list and stage its text in the
    /// draft. Resubmitting the draft appends it at the end of the list; an
    /// abandoned draft is not restored.
    pub fn begin_edit(&mut self, position: usize) -> Result<()> {
        let removed = self.delete_at(position)?;
        self.draft = removed.text;
        Ok(())
    }
}

/// Reactive handle to the app state, shared via context
#[derive(Clone, Copy)]
pub struct TodoStore {
    state: RwSignal<TodoState>,
    config: AppConfig,
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

impl TodoStore {
    /// Seed the store from the persisted slot. A missing slot or missing
    /// storage facility starts the list empty; a corrupt slot additionally
    /// surfaces the error instead of silently discarding the saved data.
    pub fn load(config: AppConfig) -> Self {
        let mut state = TodoState::default();
        match storage::load() {
            Ok(todos) => {
                log::info!("Loaded {} todos from LocalStorage", todos.len());
                state.todos = todos;
            }
            Err(Error::StorageUnavailable) => {
                log::warn!("LocalStorage unavailable, starting with an empty list");
            }
            Err(err) => {
                log::error!("Discarding saved todo list: {err}");
                state.last_error = Some(err.to_string());
            }
        }
        Self {
            state: RwSignal::new(state),
            config,
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Append the given text as a new item, then persist.
    pub fn add(&self, text: &str) -> Result<()> {
        self.state.write().add(text, &self.config)?;
        self.persist();
        Ok(())
    }

    /// Delete the item at `position`, then persist.
    pub fn delete_at(&self, position: usize) -> Result<()> {
        self.state.write().delete_at(position)?;
        self.persist();
        Ok(())
    }

    /// Stage the item at `position` in the draft and remove it from the
    /// list, then persist. The input field picks the draft up for editing.
    pub fn begin_edit(&self, position: usize) -> Result<()> {
        self.state.write().begin_edit(position)?;
        self.persist();
        Ok(())
    }

    /// Replace the draft text (input field binding).
    pub fn set_draft(&self, text: String) {
        self.state.write().draft = text;
    }

    // ========================
    // Reactive reads
    // ========================

    pub fn todos(&self) -> Vec<TodoItem> {
        self.state.with(|s| s.todos.clone())
    }

    pub fn count(&self) -> usize {
        self.state.with(|s| s.todos.len())
    }

    pub fn draft(&self) -> String {
        self.state.with(|s| s.draft.clone())
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.with(|s| s.last_error.clone())
    }

    /// Write the current list through to local storage. The in-memory
    /// mutation stands either way; a failed write is logged and surfaced so
    /// the divergence is visible.
    fn persist(&self) {
        let result = self.state.with_untracked(|s| storage::save(&s.todos));
        match result {
            Ok(()) => {
                if self.state.with_untracked(|s| s.last_error.is_some()) {
                    self.state.write().last_error = None;
                }
            }
            Err(err) => {
                log::error!("Failed to persist todo list: {err}");
                self.state.write().last_error = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_of(texts: &[&str]) -> TodoState {
        TodoState {
            todos: texts.iter().map(|t| TodoItem::new(*t)).collect(),
            ..Default::default()
        }
    }

    fn texts(state: &TodoState) -> Vec<&str> {
        state.todos.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let config = AppConfig::default();
        let mut state = TodoState::default();
        state.add("buy milk", &config).unwrap();
        state.add("walk dog", &config).unwrap();
        assert_eq!(texts(&state), ["buy milk", "walk dog"]);
    }

    #[test]
    fn test_add_accepts_empty_by_default() {
        let mut state = TodoState::default();
        state.add("", &AppConfig::default()).unwrap();
        assert_eq!(texts(&state), [""]);
    }

    #[test]
    fn test_add_rejects_empty_when_configured() {
        let config = AppConfig { allow_empty: false };
        let mut state = TodoState::default();
        let err = state.add("", &config).unwrap_err();
        assert!(matches!(err, Error::EmptyText));
        assert!(state.todos.is_empty());
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let mut state = state_of(&["a", "b", "c"]);
        let removed = state.delete_at(1).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(texts(&state), ["a", "c"]);
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut state = TodoState::default();
        let err = state.delete_at(0).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { position: 0, len: 0 }));

        let mut state = state_of(&["a", "b"]);
        let err = state.delete_at(5).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { position: 5, len: 2 }));
        assert_eq!(texts(&state), ["a", "b"]);
    }

    #[test]
    fn test_begin_edit_stages_draft_and_removes() {
        let mut state = state_of(&["a", "b"]);
        state.begin_edit(0).unwrap();
        assert_eq!(state.draft, "a");
        assert_eq!(texts(&state), ["b"]);

        // Resubmitting the draft appends at the end, not back at position 0
        let draft = state.draft.clone();
        state.add(&format!("{draft}-edited"), &AppConfig::default()).unwrap();
        assert_eq!(texts(&state), ["b", "a-edited"]);
    }

    #[test]
    fn test_begin_edit_matches_delete_plus_stage() {
        let mut edited = state_of(&["x", "y", "z"]);
        edited.begin_edit(1).unwrap();

        let mut manual = state_of(&["x", "y", "z"]);
        manual.draft = manual.todos[1].text.clone();
        manual.delete_at(1).unwrap();

        assert_eq!(edited.draft, manual.draft);
        assert_eq!(texts(&edited), texts(&manual));
    }

    #[test]
    fn test_begin_edit_out_of_range_leaves_draft() {
        let mut state = state_of(&["a"]);
        state.draft = "typing".to_string();
        let err = state.begin_edit(3).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { position: 3, len: 1 }));
        assert_eq!(state.draft, "typing");
        assert_eq!(texts(&state), ["a"]);
    }
}
