//! Todo List Component
//!
//! Renders the items in display order with edit and delete controls.

use leptos::prelude::*;

use crate::components::DeleteButton;
use crate::store::use_todo_store;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    let entries = move || store.todos().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <ul class="todo-list">
            <For
                each=entries
                // Position is the item's identity; the text is included so
                // an edit that changes a position's text re-renders the row
                key=|(position, item)| (*position, item.text.clone())
                children=move |(position, item)| {
                    view! {
                        <li class="todo-row">
                            <span class="todo-text">{item.text.clone()}</span>
                            <button
                                class="edit-btn"
                                on:click=move |_| {
                                    if let Err(err) = store.begin_edit(position) {
                                        log::warn!("Edit rejected: {err}");
                                    }
                                }
                            >
                                "Edit"
                            </button>
                            <DeleteButton position=position />
                        </li>
                    }
                }
            />
        </ul>
    }
}
