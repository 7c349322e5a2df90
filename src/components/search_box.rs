//! Search Box Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_set_keyword, use_view_store, ViewStateStoreFields};

/// Keyword search over task text (view-only)
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let view_store = use_view_store();

    view! {
        <input
            type="search"
            class="search-box"
            placeholder="Search tasks..."
            prop:value=move || view_store.keyword().get()
            on:input=move |ev| {
                store_set_keyword(&view_store, event_target_value(&ev));
                ctx.reload();
            }
        />
    }
}
