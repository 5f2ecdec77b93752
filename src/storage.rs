//! LocalStorage Persistence
//!
//! The whole list lives under a single key as `{"todos":[...]}`. The slot is
//! rewritten after every mutation and read once at startup.

use crate::error::{Error, Result};
use crate::models::{SavedTodos, TodoItem};

/// LocalStorage key holding the serialized list
pub const STORAGE_KEY: &str = "todos";

/// Serialize the list into the persisted `{"todos":[...]}` shape.
pub fn encode(todos: &[TodoItem]) -> Result<String> {
    serde_json::to_string(&SavedTodos {
        todos: todos.to_vec(),
    })
    .map_err(|e| Error::WriteFailed(e.to_string()))
}

/// Parse a persisted slot back into the item list.
///
/// Anything that does not decode as `{"todos":[...]}` is reported as a
/// corrupt slot, never as a raw parse panic.
pub fn decode(raw: &str) -> Result<Vec<TodoItem>> {
    let saved: SavedTodos =
        serde_json::from_str(raw).map_err(|e| Error::CorruptSlot(e.to_string()))?;
    Ok(saved.todos)
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

/// Load the saved list from LocalStorage (WASM only).
///
/// An absent slot is an empty list; an absent storage facility or an
/// unreadable slot is reported to the caller, who starts empty anyway.
#[cfg(target_arch = "wasm32")]
pub fn load() -> Result<Vec<TodoItem>> {
    let Some(storage) = local_storage() else {
        return Err(Error::StorageUnavailable);
    };

    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => decode(&raw),
        Ok(None) => Ok(Vec::new()),
        Err(_) => Err(Error::StorageUnavailable),
    }
}

/// Overwrite the slot with the current list (WASM only).
#[cfg(target_arch = "wasm32")]
pub fn save(todos: &[TodoItem]) -> Result<()> {
    let json = encode(todos)?;

    let Some(storage) = local_storage() else {
        return Err(Error::StorageUnavailable);
    };

    storage
        .set_item(STORAGE_KEY, &json)
        .map_err(|e| Error::WriteFailed(format!("{e:?}")))
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> Result<Vec<TodoItem>> {
    Ok(Vec::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(_todos: &[TodoItem]) -> Result<()> {
    // No-op for native
    Ok(())
}
