//! Todo Frontend App
//!
//! Root component: seeds the store from local storage once at mount and
//! lays out the input, list, and status views.

use leptos::prelude::*;

use crate::components::{StatusBar, TodoInput, TodoList};
use crate::config::AppConfig;
use crate::store::TodoStore;

#[component]
pub fn App() -> impl IntoView {
    let store = TodoStore::load(AppConfig::default());

    // Provide the store to all children
    provide_context(store);

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"To Do"</h1>
                <TodoInput />
                <TodoList />
                <StatusBar />
            </main>
        </div>
    }
}
