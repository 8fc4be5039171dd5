use std::time::{Duration, Instant};

use crate::models::Todo;
use crate::storage::Storage;
use crate::utils::now_timestamp;

/// The authoritative in-memory task list.
///
/// Every mutation is visible immediately; persistence trails behind it.
/// Instead of writing on every keystroke, mutations restamp a dirty instant
/// and `maybe_save` (called from the event-loop tick) writes once the
/// debounce window has passed with no further edits, so a burst of changes
/// collapses into a single write of the final state.
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
    storage: Storage,
    debounce: Duration,
    dirty_since: Option<Instant>,
}

impl TodoStore {
    /// Open the store, performing the one-shot load from storage. A failed
    /// load yields an empty list; there is no retry. Because the load
    /// happens here, before the store value exists, no mutation can ever
    /// race ahead of it.
    pub fn open(storage: Storage, debounce: Duration) -> Self {
        let todos = storage.load_todos().unwrap_or_default();
        let next_id = todos.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        Self {
            todos,
            next_id,
            storage,
            debounce,
            dirty_since: None,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Add a new task at the front of the list. Whitespace-only text is a
    /// silent no-op. Returns the new id when a record was created.
    pub fn add(&mut self, text: &str, due_date: Option<String>) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.todos.insert(0, Todo::new(id, text.to_string(), due_date));
        self.mark_dirty();
        Some(id)
    }

    /// Flip the completion flag. Completing a task stamps `done_at`, and
    /// stamps `worked_at` too if this is the first time it was touched.
    /// Un-completing clears `done_at` but leaves `worked_at` alone.
    pub fn toggle(&mut self, id: u64) {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return;
        };

        todo.done = !todo.done;
        if todo.done {
            let now = now_timestamp();
            if todo.worked_at.is_none() {
                todo.worked_at = Some(now.clone());
            }
            todo.done_at = Some(now);
        } else {
            todo.done_at = None;
        }
        self.mark_dirty();
    }

    /// Record that work on a task has started. Only the first call sticks;
    /// `worked_at` is never overwritten or cleared.
    pub fn mark_worked(&mut self, id: u64) {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if todo.worked_at.is_some() {
            return;
        }

        todo.worked_at = Some(now_timestamp());
        self.mark_dirty();
    }

    pub fn remove(&mut self, id: u64) {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        if self.todos.len() != before {
            self.mark_dirty();
        }
    }

    /// Write the list out if it is dirty and the debounce window has been
    /// quiet. Save failures are dropped: the in-memory list stays the source
    /// of truth for the session either way.
    pub fn maybe_save(&mut self) {
        if let Some(since) = self.dirty_since {
            if since.elapsed() >= self.debounce {
                let _ = self.storage.save_todos(&self.todos);
                self.dirty_since = None;
            }
        }
    }

    /// Write immediately if there are unsaved changes. Used on quit and by
    /// the one-shot CLI commands, where waiting out the debounce would lose
    /// the edit.
    pub fn flush(&mut self) {
        if self.dirty_since.is_some() {
            let _ = self.storage.save_todos(&self.todos);
            self.dirty_since = None;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty_since.is_some()
    }

    fn mark_dirty(&mut self) {
        // Restamp, not set-once: each edit restarts the quiet period.
        self.dirty_since = Some(Instant::now());
    }
}
