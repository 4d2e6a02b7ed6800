//! Frontend Models
//!
//! Data structures stored in localStorage and fetched from the sample API.

use serde::{Deserialize, Serialize};

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u32, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Sample todo as returned by the random-todo endpoint
///
/// `{"id": 17, "todo": "Buy milk", "completed": false, "userId": 3}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteTodo {
    pub id: u32,
    #[serde(rename = "todo")]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(3, "Bread".to_string());
        assert_eq!(todo.id, 3);
        assert_eq!(todo.text, "Bread");
        assert!(!todo.completed);
    }

    #[test]
    fn test_remote_todo_drops_user_id() {
        let json = r#"{"id":42,"todo":"Water the plants","completed":true,"userId":7}"#;
        let remote: RemoteTodo = serde_json::from_str(json).unwrap();
        assert_eq!(remote.id, 42);
        assert_eq!(remote.text, "Water the plants");
        assert!(remote.completed);
    }

    #[test]
    fn test_todo_missing_completed_defaults_false() {
        let todo: Todo = serde_json::from_str(r#"{"id":1,"text":"Eggs"}"#).unwrap();
        assert!(!todo.completed);
    }
}
