//! Todo List Component
//!
//! Renders the filtered todos. Rows are keyed on everything they display so
//! any change rebuilds the affected row.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::use_app_context;
use crate::filter::filter_todos;
use crate::state::AppStateStoreFields;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let visible = Memo::new(move |_| {
        let word = store.filter_word().get();
        store.todos().with(|todos| filter_todos(todos, &word))
    });

    let empty_message = move || {
        if !visible.with(|v| v.is_empty()) {
            None
        } else if store.todos().with(|t| t.is_empty()) {
            Some("Nothing on the list yet.")
        } else {
            Some("No items match the filter.")
        }
    };

    view! {
        <ul id="shopping-list" class="todo-list">
            <For
                each=move || visible.get()
                key=|f| (f.todo.id, f.todo.text.clone(), f.todo.completed, f.start_match, f.end_match)
                children=move |filtered| view! { <TodoItem filtered=filtered /> }
            />
        </ul>
        {move || empty_message().map(|msg| view! { <p class="empty-list">{msg}</p> })}
    }
}
