use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Serialized field names stay camelCase so that `todos.json` files written
/// by earlier versions of the app load unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub done: bool,
    #[serde(default, rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>, // ISO 8601: YYYY-MM-DD
    #[serde(default, rename = "workedAt", skip_serializing_if = "Option::is_none")]
    pub worked_at: Option<String>,
    #[serde(default, rename = "doneAt", skip_serializing_if = "Option::is_none")]
    pub done_at: Option<String>,
}

impl Todo {
    /// Create a fresh, not-done record. Timestamps are stamped later by the
    /// store operations that give them meaning (toggle, mark-worked).
    pub fn new(id: u64, text: String, due_date: Option<String>) -> Self {
        Self {
            id,
            text,
            done: false,
            due_date,
            worked_at: None,
            done_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_is_not_done_and_unstamped() {
        let todo = Todo::new(1, "Buy milk".to_string(), None);
        assert!(!todo.done);
        assert!(todo.worked_at.is_none());
        assert!(todo.done_at.is_none());
    }

    #[test]
    fn deserializes_legacy_camel_case_document() {
        let json = r#"[
            {"id": 3, "text": "Water plants", "done": true,
             "dueDate": "2025-06-01", "workedAt": "2025-05-30 09:00:00",
             "doneAt": "2025-05-30 09:15:00"},
            {"id": 2, "text": "Call dentist", "done": false}
        ]"#;
        let todos: Vec<Todo> = serde_json::from_str(json).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].due_date.as_deref(), Some("2025-06-01"));
        assert_eq!(todos[0].done_at.as_deref(), Some("2025-05-30 09:15:00"));
        assert!(todos[1].due_date.is_none());
        assert!(todos[1].worked_at.is_none());
    }

    #[test]
    fn serializes_optionals_only_when_present() {
        let todo = Todo::new(1, "Read".to_string(), None);
        let json = serde_json::to_string(&todo).unwrap();
        assert!(!json.contains("dueDate"));
        assert!(!json.contains("workedAt"));
        assert!(!json.contains("doneAt"));

        let with_due = Todo::new(2, "Ship".to_string(), Some("2025-12-01".to_string()));
        let json = serde_json::to_string(&with_due).unwrap();
        assert!(json.contains("\"dueDate\":\"2025-12-01\""));
    }
}
