//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::error::StorageResult;
use crate::storage::KeyValueStore;
use crate::tasks::TaskStore;

pub type AppTaskStore = TaskStore<Box<dyn KeyValueStore>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload tasks from storage - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from storage - write
    set_reload_trigger: WriteSignal<u32>,
    tasks: StoredValue<AppTaskStore, LocalStorage>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        tasks: AppTaskStore,
        config: AppConfig,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            tasks: StoredValue::new_local(tasks),
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of tasks
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Read through the task store without mutating anything
    pub fn with_tasks<R>(&self, f: impl FnOnce(&AppTaskStore) -> R) -> R {
        self.tasks.with_value(f)
    }

    /// Run one store action, log the outcome, then reload.
    /// Returns whether the stored collection changed.
    pub fn apply(
        &self,
        action: &str,
        op: impl FnOnce(&AppTaskStore) -> StorageResult<bool>,
    ) -> bool {
        let changed = match self.tasks.with_value(op) {
            Ok(changed) => {
                if !changed {
                    log::debug!("[APP] {} changed nothing", action);
                }
                changed
            }
            Err(e) => {
                log::error!("[APP] {} failed: {}", action, e);
                false
            }
        };
        self.reload();
        changed
    }
}
