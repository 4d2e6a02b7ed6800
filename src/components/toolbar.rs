//! Toolbar Component
//!
//! Hide/show completed, delete all and sample import.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::state::AppStateStoreFields;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();
    let (importing, set_importing) = signal(false);

    // Only one of hide/show is offered at a time
    let has_hidden = move || ctx.store.hidden_todos().with(|h| !h.is_empty());

    let hide_completed = move |_| {
        ctx.apply("hide_completed", |state| state.hide_completed());
    };

    let show_completed = move |_| {
        ctx.apply("show_completed", |state| state.show_completed());
    };

    let delete_all = move |_: ()| {
        ctx.apply("delete_all", |state| state.delete_all());
    };

    let import = move |_| {
        if importing.get_untracked() {
            return;
        }
        set_importing.set(true);
        let url = ctx.config.with_value(|c| c.import_url.clone());
        spawn_local(async move {
            match commands::fetch_random_todo(&url).await {
                Ok(remote) => {
                    if let Err(e) = ctx.apply("import", |state| state.import_todo(remote)) {
                        ctx.notify(format!("Import failed: {}", e));
                    }
                }
                Err(e) => {
                    log::error!("[IMPORT] {}", e);
                    ctx.notify(format!("Import failed: {}", e));
                }
            }
            set_importing.set(false);
        });
    };

    view! {
        <div class="toolbar">
            <button
                id="shopping-completed-hide"
                class=move || if has_hidden() { "filtered" } else { "" }
                on:click=hide_completed
            >
                "Hide completed"
            </button>
            <button
                id="shopping-completed-show"
                class=move || if has_hidden() { "" } else { "filtered" }
                on:click=show_completed
            >
                "Show completed"
            </button>
            <DeleteConfirmButton
                button_id="shopping-delete-all"
                label="Delete all"
                prompt="Delete every item?"
                on_confirm=delete_all
            />
            <button id="shopping-import" disabled=move || importing.get() on:click=import>
                {move || if importing.get() { "Importing..." } else { "Import" }}
            </button>
        </div>
    }
}
