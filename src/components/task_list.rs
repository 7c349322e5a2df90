//! Task List Component
//!
//! Renders the visible subset of the collection in stored order.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::deadline::today;
use crate::query::compute_visible;
use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let view_store = use_view_store();

    let visible = move || {
        compute_visible(
            &view_store.tasks().read(),
            view_store.filter().get(),
            &view_store.keyword().read(),
        )
    };

    view! {
        <ul class="task-list">
            <For
                each=visible
                // Position and every field, so a reorder or edit re-renders the row
                key=|v| (v.index, v.task.clone())
                children=move |v| view! { <TaskRow task=v.task today=today() /> }
            />
        </ul>
        <Show when=move || visible().is_empty()>
            <p class="empty-list">"No tasks"</p>
        </Show>
    }
}
