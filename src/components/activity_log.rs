//! Activity Log Component
//!
//! Collapsible panel with the logger's recent lines, newest first.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ActivityLog() -> impl IntoView {
    let ctx = use_app_context();
    let (open, set_open) = signal(false);

    let lines = move || {
        // re-read after every mutation
        ctx.revision.track();
        let mut lines = rolling_logger::recent();
        lines.reverse();
        lines
    };

    view! {
        <section class="activity-log">
            <button class="activity-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                {move || if open.get() { "Hide activity" } else { "Show activity" }}
            </button>
            <Show when=move || open.get()>
                <ol class="activity-lines">
                    {move || lines().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ol>
            </Show>
        </section>
    }
}
