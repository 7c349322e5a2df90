//! Persistence Layer
//!
//! A single key-value slot holds the whole task collection as JSON.
//! `KeyValueStore` abstracts the medium: `BrowserStorage` (localStorage),
//! `MemoryStore` for tests and as a fallback when storage is disabled.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::error::{StorageError, StorageResult};
use crate::models::{Task, TaskId};

/// Synchronous key-value medium with whole-value overwrite
pub trait KeyValueStore {
    /// Read the raw value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

// ========================
// Browser localStorage
// ========================

#[derive(Clone)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// localStorage when the browser allows it, otherwise an in-memory slot
pub fn open_backend() -> Box<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("[STORE] {}; tasks will not survive a reload", e);
            Box::new(MemoryStore::new())
        }
    }
}

// ========================
// In-memory store
// ========================

#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.slots.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ========================
// Task repository
// ========================

/// Serializes the task collection to and from one storage key
pub struct TaskRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TaskRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Load the collection, surfacing corrupt state as an error
    pub fn try_load(&self) -> StorageResult<Vec<Task>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let mut tasks: Vec<Task> =
            serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                key: self.key.clone(),
                source,
            })?;
        normalize_ids(&mut tasks);
        Ok(tasks)
    }

    /// Load the collection; unreadable or corrupt state loads as empty
    pub fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => tasks,
            Err(e) => {
                log::warn!("[STORE] {}; starting from an empty list", e);
                Vec::new()
            }
        }
    }

    /// Storage key the collection lives under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Overwrite the stored collection with `tasks`
    pub fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        let raw = serde_json::to_string(tasks).map_err(|e| StorageError::Write {
            key: self.key.clone(),
            reason: e.to_string(),
        })?;
        self.store.set(&self.key, &raw)
    }
}

fn max_id(tasks: &[Task]) -> u32 {
    tasks.iter().map(|t| t.id.0).max().unwrap_or(0)
}

/// Next free id: one past the largest id in use, `None` once the id space
/// is used up
pub fn next_id(tasks: &[Task]) -> Option<TaskId> {
    max_id(tasks).checked_add(1).map(TaskId)
}

/// Number the collection 1..=n in order
pub(crate) fn renumber(tasks: &mut [Task]) {
    for (n, task) in (1u32..).zip(tasks.iter_mut()) {
        task.id = TaskId(n);
    }
}

/// Give records stored without an id, or repeating an earlier record's id,
/// a fresh one in collection order. When fresh ids would run past
/// `u32::MAX` the whole collection is renumbered instead.
/// Deterministic, so repeated loads of the same value agree.
fn normalize_ids(tasks: &mut [Task]) {
    let mut seen = HashSet::new();
    let fresh: Vec<bool> = tasks
        .iter()
        .map(|t| !(t.id.is_assigned() && seen.insert(t.id)))
        .collect();
    let needed = fresh.iter().filter(|f| **f).count();
    if needed == 0 {
        return;
    }

    let max = max_id(tasks);
    let fits = u32::try_from(needed).ok().and_then(|n| max.checked_add(n)).is_some();
    if !fits {
        log::warn!("[STORE] Task ids exhausted, renumbering {} tasks", tasks.len());
        renumber(tasks);
        return;
    }

    let mut next = max;
    for (task, fresh) in tasks.iter_mut().zip(fresh) {
        if fresh {
            next += 1;
            if task.id.is_assigned() {
                log::warn!("[STORE] Duplicate task id {}, reassigning to #{}", task.id, next);
            }
            task.id = TaskId(next);
        }
    }
}
