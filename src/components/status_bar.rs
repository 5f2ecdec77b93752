//! Status Bar Component
//!
//! Item count plus the latest storage error, if any. Storage failures keep
//! the in-memory list working, so this is the only place the user learns
//! that saving stopped.

use leptos::prelude::*;

use crate::store::use_todo_store;

#[component]
pub fn StatusBar() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <footer class="status-bar">
            <p class="item-count">{move || format!("{} items", store.count())}</p>
            {move || {
                store.last_error().map(|err| {
                    view! { <p class="storage-error">{format!("Storage error: {err}")}</p> }
                })
            }}
        </footer>
    }
}
