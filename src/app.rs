//! Todo List App
//!
//! Root component: owns the store and wires the page together.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActivityLog, FilterBar, NewTodoForm, NoticeLine, TodoList, Toolbar};
use crate::config::AppConfig;
use crate::context::{initial_state, AppContext};
use crate::state::AppStateStoreFields;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(initial_state(&config.storage_key));

    let ctx = AppContext::new(store, config);
    provide_context(ctx);

    // Write back right away so a repaired or fresh state is on disk
    ctx.persist();

    let count = move || {
        let visible = store.todos().with(|t| t.len());
        let hidden = store.hidden_todos().with(|t| t.len());
        format!("{} items, {} hidden", visible, hidden)
    };

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Todo List"</h1>

                <NewTodoForm />
                <FilterBar />
                <Toolbar />
                <NoticeLine />

                <TodoList />

                <p class="item-count">{count}</p>
                <ActivityLog />
            </main>
        </div>
    }
}
