//! Filter Bar Component
//!
//! Filters the list on every keystroke. The input mirrors the stored filter
//! word so a reload keeps it.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::state::AppStateStoreFields;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let filter_word = ctx.store.filter_word();

    view! {
        <div class="filter-bar">
            <input
                id="shopping-filter"
                type="search"
                placeholder="Filter..."
                autocomplete="off"
                prop:value=move || filter_word.get()
                on:input=move |ev| {
                    let word = event_target_value(&ev);
                    ctx.apply("filter", |state| state.set_filter_word(&word));
                }
            />
        </div>
    }
}
