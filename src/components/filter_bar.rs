//! Filter Bar Component
//!
//! All / Active / Done filter buttons and the sort-by-deadline action.
//! Exactly one of them is drawn active.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{ActiveControl, FilterMode};
use crate::store::{store_mark_sorted, store_select_filter, use_view_store, ViewStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let view_store = use_view_store();

    let is_highlighted = move |control: ActiveControl| view_store.highlighted().get() == control;

    let sort = move |_| {
        ctx.apply("sort", |store| store.sort_by_deadline().map(|_| true));
        store_mark_sorted(&view_store);
    };

    view! {
        <div class="filter-bar">
            {FilterMode::ALL.iter().map(|&mode| {
                view! {
                    <button
                        type="button"
                        class=move || {
                            if is_highlighted(ActiveControl::Filter(mode)) { "filter-btn active" } else { "filter-btn" }
                        }
                        on:click=move |_| {
                            store_select_filter(&view_store, mode);
                            ctx.reload();
                        }
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}

            <button
                type="button"
                class=move || {
                    if is_highlighted(ActiveControl::SortByDeadline) { "sort-btn active" } else { "sort-btn" }
                }
                on:click=sort
            >
                "Sort by deadline"
            </button>
        </div>
    }
}
