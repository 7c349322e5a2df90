//! Task Store
//!
//! Mutation operations over the persisted collection. Every call reloads
//! the full collection, applies one change, and writes the whole thing
//! back; nothing is cached between calls.
//!
//! Operations return `Ok(true)` when the stored collection changed and
//! `Ok(false)` for the silent no-op cases (blank text, cancelled edit,
//! unknown id).

use crate::deadline::parse_date;
use crate::error::{StorageError, StorageResult};
use crate::models::{Task, TaskId};
use crate::query;
use crate::storage::{next_id, renumber, KeyValueStore, TaskRepository};

pub struct TaskStore<S> {
    repo: TaskRepository<S>,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn new(repo: TaskRepository<S>) -> Self {
        Self { repo }
    }

    /// Current collection, as stored
    pub fn tasks(&self) -> Vec<Task> {
        self.repo.load()
    }

    /// Resolve a position in the current collection to a task id
    pub fn id_at(&self, index: usize) -> Option<TaskId> {
        self.repo.load().get(index).map(|t| t.id)
    }

    /// Append a new task. Blank text is ignored without touching storage.
    pub fn add_task(&self, text: &str, deadline: Option<&str>) -> StorageResult<Option<TaskId>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let mut tasks = self.repo.load();
        let id = match next_id(&tasks) {
            Some(id) => id,
            None => {
                log::warn!("[STORE] Task ids exhausted, renumbering {} tasks", tasks.len());
                renumber(&mut tasks);
                next_id(&tasks).ok_or_else(|| StorageError::IdsExhausted {
                    key: self.repo.key().to_string(),
                })?
            }
        };
        tasks.push(Task::new(id, text, deadline.and_then(parse_date)));
        self.repo.save(&tasks)?;
        log::info!("[STORE] Added task {}", id);
        Ok(Some(id))
    }

    pub fn toggle_done(&self, id: TaskId) -> StorageResult<bool> {
        self.mutate(id, |task| task.done = !task.done)
    }

    /// Remove a task; later tasks move up one position
    pub fn delete_task(&self, id: TaskId) -> StorageResult<bool> {
        let mut tasks = self.repo.load();
        let Some(pos) = position(&tasks, id) else {
            return Ok(false);
        };
        tasks.remove(pos);
        self.repo.save(&tasks)?;
        log::info!("[STORE] Deleted task {}", id);
        Ok(true)
    }

    /// Overwrite text and deadline. Absent or blank text aborts the whole
    /// edit, as does an absent (cancelled) deadline; a blank or unparseable
    /// deadline clears it.
    pub fn edit_task(
        &self,
        id: TaskId,
        new_text: Option<&str>,
        new_deadline: Option<&str>,
    ) -> StorageResult<bool> {
        let Some(text) = new_text.map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(false);
        };
        let Some(deadline) = new_deadline else {
            return Ok(false);
        };
        let deadline = parse_date(deadline);
        self.mutate(id, |task| {
            task.text = text.to_string();
            task.deadline = deadline;
        })
    }

    /// Reorder the stored collection by deadline (persisted, not view-only)
    pub fn sort_by_deadline(&self) -> StorageResult<()> {
        let tasks = self.repo.load();
        self.repo.save(&query::sort_by_deadline(&tasks))
    }

    fn mutate(&self, id: TaskId, f: impl FnOnce(&mut Task)) -> StorageResult<bool> {
        let mut tasks = self.repo.load();
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            log::debug!("[STORE] No task {}, ignoring", id);
            return Ok(false);
        };
        f(task);
        self.repo.save(&tasks)?;
        Ok(true)
    }
}

fn position(tasks: &[Task], id: TaskId) -> Option<usize> {
    tasks.iter().position(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::summary::Progress;

    fn empty_store() -> TaskStore<MemoryStore> {
        TaskStore::new(TaskRepository::new(MemoryStore::new(), "tasks"))
    }

    fn store_with(raw: &str) -> TaskStore<MemoryStore> {
        TaskStore::new(TaskRepository::new(MemoryStore::with_value("tasks", raw), "tasks"))
    }

    fn texts(store: &TaskStore<MemoryStore>) -> Vec<String> {
        store.tasks().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_add_task() {
        let store = empty_store();
        let id = store.add_task("  Buy milk ", Some("2024-06-10")).unwrap().unwrap();

        let tasks = store.tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].text, "Buy milk");
        assert!(!tasks[0].done);
        assert_eq!(tasks[0].deadline, parse_date("2024-06-10"));
    }

    #[test]
    fn test_add_blank_text_is_noop() {
        let store = empty_store();
        store.add_task("A", None).unwrap();
        for deadline in [None, Some(""), Some("2024-06-10")] {
            assert_eq!(store.add_task("", deadline).unwrap(), None);
            assert_eq!(store.add_task("   ", deadline).unwrap(), None);
        }
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_add_without_deadline() {
        let store = empty_store();
        store.add_task("A", Some("")).unwrap();
        store.add_task("B", None).unwrap();
        assert!(store.tasks().iter().all(|t| t.deadline.is_none()));
    }

    #[test]
    fn test_toggle_updates_progress() {
        let store = empty_store();
        store.add_task("Buy milk", Some("2024-06-10")).unwrap();
        let id = store.id_at(0).unwrap();

        assert!(store.toggle_done(id).unwrap());
        let progress = Progress::of(&store.tasks());
        assert_eq!((progress.done, progress.total), (1, 1));

        assert!(store.toggle_done(id).unwrap());
        let progress = Progress::of(&store.tasks());
        assert_eq!((progress.done, progress.total), (0, 1));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let store = empty_store();
        store.add_task("A", None).unwrap();
        let before = store.tasks();

        assert!(!store.toggle_done(TaskId(99)).unwrap());
        assert!(!store.delete_task(TaskId(99)).unwrap());
        assert!(!store.edit_task(TaskId(99), Some("B"), Some("")).unwrap());
        assert_eq!(store.tasks(), before);
        assert_eq!(store.id_at(5), None);
    }

    #[test]
    fn test_delete_shifts_positions() {
        let store = empty_store();
        for text in ["A", "B", "C"] {
            store.add_task(text, None).unwrap();
        }
        let b = store.id_at(1).unwrap();

        assert!(store.delete_task(store.id_at(0).unwrap()).unwrap());
        assert_eq!(texts(&store), vec!["B", "C"]);
        assert_eq!(store.id_at(0), Some(b));
    }

    #[test]
    fn test_ids_not_reused_after_delete_of_middle() {
        let store = empty_store();
        let a = store.add_task("A", None).unwrap().unwrap();
        let b = store.add_task("B", None).unwrap().unwrap();
        let c = store.add_task("C", None).unwrap().unwrap();
        store.delete_task(b).unwrap();
        let d = store.add_task("D", None).unwrap().unwrap();
        assert!(d != a && d != c);
    }

    #[test]
    fn test_edit_task() {
        let store = empty_store();
        let id = store.add_task("A", Some("2024-06-10")).unwrap().unwrap();

        assert!(store.edit_task(id, Some(" A2 "), Some("2024-07-01")).unwrap());
        let task = &store.tasks()[0];
        assert_eq!(task.text, "A2");
        assert_eq!(task.deadline, parse_date("2024-07-01"));

        // Empty deadline clears it
        assert!(store.edit_task(id, Some("A3"), Some("")).unwrap());
        assert_eq!(store.tasks()[0].deadline, None);
    }

    #[test]
    fn test_edit_cancelled_deadline_aborts() {
        let store = empty_store();
        let id = store.add_task("A", Some("2024-06-10")).unwrap().unwrap();
        let before = store.tasks();

        assert!(!store.edit_task(id, Some("A edited"), None).unwrap());
        assert_eq!(store.tasks(), before);
    }

    #[test]
    fn test_add_after_max_id_renumbers() {
        let store = store_with(r#"[{"id":4294967295,"text":"A","done":false,"deadline":null}]"#);
        let id = store.add_task("B", None).unwrap().unwrap();
        assert_eq!(id, TaskId(2));

        let ids: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(1), TaskId(2)]);
        assert_eq!(texts(&store), vec!["A", "B"]);
    }

    #[test]
    fn test_edit_blank_or_cancelled_text_aborts() {
        let store = empty_store();
        let id = store.add_task("A", Some("2024-06-10")).unwrap().unwrap();
        let before = store.tasks();

        assert!(!store.edit_task(id, None, Some("2024-07-01")).unwrap());
        assert!(!store.edit_task(id, Some("  "), None).unwrap());
        assert_eq!(store.tasks(), before);
    }

    #[test]
    fn test_sort_by_deadline_persists() {
        let store = store_with(
            r#"[{"text":"A","done":false,"deadline":null},
                {"text":"B","done":false,"deadline":"2024-01-01"}]"#,
        );
        store.sort_by_deadline().unwrap();
        assert_eq!(texts(&store), vec!["B", "A"]);
    }

    #[test]
    fn test_corrupt_state_recovers_as_empty() {
        let store = store_with("not json at all");
        assert!(store.tasks().is_empty());
        store.add_task("Fresh", None).unwrap();
        assert_eq!(texts(&store), vec!["Fresh"]);
    }
}
