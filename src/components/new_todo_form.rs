//! New Todo Form Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::error::AppError;

/// Text input plus Add button. Enter submits.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        match ctx.apply("add", |state| state.add_todo(&text)) {
            Ok(_) => set_new_text.set(String::new()),
            Err(AppError::InvalidInput(_)) => {}
            Err(e) => ctx.notify(format!("Could not add item: {}", e)),
        }
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                id="shopping-input"
                type="text"
                placeholder="Add new item..."
                autocomplete="off"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button id="shopping-add" type="submit">"Add"</button>
        </form>
    }
}
