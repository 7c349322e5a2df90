//! Task List App
//!
//! Root component: opens storage, provides context, and re-reads the
//! collection every time an action bumps the reload trigger.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DueTodayBanner, FilterBar, NewTaskForm, ProgressBar, SearchBox, TaskList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::deadline::today;
use crate::storage::{open_backend, TaskRepository};
use crate::store::{store_set_tasks, ViewState};
use crate::summary::due_today_pending;
use crate::tasks::TaskStore;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let task_store = TaskStore::new(TaskRepository::new(open_backend(), config.storage_key.clone()));

    let initial = task_store.tasks();
    let due_today = due_today_pending(&initial, today());
    log::info!("[APP] Loaded {} tasks, {} due today", initial.len(), due_today);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), task_store, config);
    provide_context(ctx);

    let view_store = Store::new(ViewState::new(initial));
    provide_context(view_store);

    // Reload after every action
    Effect::new(move |prev: Option<()>| {
        let trigger = reload_trigger.get();
        if prev.is_none() {
            return;
        }
        let tasks = ctx.with_tasks(|store| store.tasks());
        log::debug!("[APP] Reloaded {} tasks, trigger={}", tasks.len(), trigger);
        store_set_tasks(&view_store, tasks);
    });

    view! {
        <main class="app">
            <DueTodayBanner count=due_today />

            <h1>"To-Do"</h1>

            <NewTaskForm />

            <div class="toolbar">
                <FilterBar />
                <SearchBox />
            </div>

            <ProgressBar />

            <TaskList />
        </main>
    }
}
