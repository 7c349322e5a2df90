//! Progress Bar Component

use leptos::prelude::*;

use crate::store::{use_view_store, ViewStateStoreFields};
use crate::summary::Progress;

/// Done/total counter over the whole collection (ignores filter and search)
#[component]
pub fn ProgressBar() -> impl IntoView {
    let view_store = use_view_store();
    let progress = move || Progress::of(&view_store.tasks().read());

    view! {
        <div class="progress">
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style:width=move || format!("{:.0}%", progress().percent_done())
                />
            </div>
            <span class="progress-label">{move || progress().label()}</span>
        </div>
    }
}
