//! Todo Input Component
//!
//! Text field bound to the shared draft, plus the submit control.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::use_todo_store;

/// Form for composing a new todo or resubmitting an edited one. The field
/// is bound to the store draft, so starting an edit fills it in here.
#[component]
pub fn TodoInput() -> impl IntoView {
    let store = use_todo_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = store.draft();
        match store.add(&text) {
            Ok(()) => store.set_draft(String::new()),
            Err(err) => log::warn!("Submission rejected: {err}"),
        }
    };

    view! {
        <form class="todo-input" on:submit=submit>
            <input
                type="text"
                placeholder="Enter to do..."
                prop:value=move || store.draft()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    store.set_draft(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
