//! Todo Item Component
//!
//! One `<li>` of the list: highlighted text, checkbox, delete and edit
//! buttons. Edit mode swaps the row for an input; Enter commits, Escape
//! cancels.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::filter::FilteredTodo;

#[component]
pub fn TodoItem(filtered: FilteredTodo) -> impl IntoView {
    let ctx = use_app_context();

    let id = filtered.todo.id;
    let completed = filtered.todo.completed;
    let text = filtered.todo.text.clone();
    let (before, matched, after) = filtered.segments();
    let (before, matched, after) = (before.to_string(), matched.to_string(), after.to_string());

    let row_class = if completed { "completed" } else { "" };

    let (editing, set_editing) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus and select the whole text once the edit input is mounted
    Effect::new(move |_| {
        if !editing.get() {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    // Failures are logged by the state itself
    let toggle = move |_| {
        let _ = ctx.apply("toggle", |state| state.toggle_todo(id));
    };

    let remove = move |_| {
        let _ = ctx.apply("remove", |state| state.remove_todo(id));
    };

    let commit = move |new_text: String| {
        let _ = ctx.apply("edit", |state| state.edit_todo(id, &new_text));
        set_editing.set(false);
    };

    view! {
        <li class=row_class>
            {move || {
                if editing.get() {
                    view! {
                        <input
                            class="edit-input"
                            type="text"
                            node_ref=input_ref
                            value=text.clone()
                            on:keyup=move |ev| match ev.key().as_str() {
                                "Enter" => commit(event_target_value(&ev)),
                                "Escape" => set_editing.set(false),
                                _ => {}
                            }
                        />
                    }
                        .into_any()
                } else {
                    view! {
                        <span class="todo-text">
                            {before.clone()}
                            {(!matched.is_empty()).then(|| view! { <mark>{matched.clone()}</mark> })}
                            {after.clone()}
                        </span>
                        <input type="checkbox" checked=completed on:change=toggle />
                        <button class="delete-btn" title="Delete" on:click=remove>"🗑️"</button>
                        <button class="edit-btn" title="Edit" on:click=move |_| set_editing.set(true)>"✏️"</button>
                    }
                        .into_any()
                }
            }}
        </li>
    }
}
