//! Notice Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Status line for failures the user should see
#[component]
pub fn NoticeLine() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.notice.get().map(|notice| view! {
            <p class="notice" role="status">{notice.text}</p>
        })}
    }
}
