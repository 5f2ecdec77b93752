//! Delete Button Component
//!
//! Two-step delete control: deleting is irreversible here (no undo), so the
//! × asks for confirmation before the row goes away.

use leptos::prelude::*;

use crate::store::use_todo_store;

/// Delete control for the item at `position`.
#[component]
pub fn DeleteButton(position: usize) -> impl IntoView {
    let store = use_todo_store();
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || {
                view! {
                    <button class="delete-btn" on:click=move |_| set_confirming.set(true)>
                        "×"
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        if let Err(err) = store.delete_at(position) {
                            log::warn!("Delete rejected: {err}");
                        }
                    }
                >
                    "Yes"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}
