//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the last
//! loaded task snapshot plus the filter/search/highlight selections; none of
//! this is persisted.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ActiveControl, FilterMode, Task};

#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Collection as last read from storage
    pub tasks: Vec<Task>,
    pub filter: FilterMode,
    /// Search keyword (case-insensitive)
    pub keyword: String,
    /// Toolbar control drawn as active
    pub highlighted: ActiveControl,
}

impl ViewState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Default::default()
        }
    }
}

pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_tasks(store: &ViewStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

/// Show only tasks admitted by `mode` and highlight its button
pub fn store_select_filter(store: &ViewStore, mode: FilterMode) {
    *store.filter().write() = mode;
    *store.highlighted().write() = ActiveControl::Filter(mode);
}

pub fn store_set_keyword(store: &ViewStore, keyword: String) {
    *store.keyword().write() = keyword;
}

/// Highlight the sort button; the active filter keeps applying
pub fn store_mark_sorted(store: &ViewStore) {
    *store.highlighted().write() = ActiveControl::SortByDeadline;
}
