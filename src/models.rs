//! Frontend Models
//!
//! Data structures matching the todo API's JSON bodies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier.
///
/// The API only promises an opaque value, so both JSON numbers and strings
/// are accepted and written back in the shape they arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    /// Any JSON number, kept exactly as the server wrote it
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{}", n),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TodoId {
    fn from(n: i64) -> Self {
        TodoId::Number(n.into())
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId::Text(s.to_string())
    }
}

/// Todo item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

/// Body of `POST /api/todos`
#[derive(Debug, Serialize)]
pub struct NewTodo<'a> {
    pub text: &'a str,
}

/// Partial update for `PUT /api/todos/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl TodoPatch {
    pub fn done(done: bool) -> Self {
        Self { done: Some(done), ..Default::default() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), ..Default::default() }
    }
}

/// `{"error": "..."}` body the server sends with failing responses
#[derive(Debug, Deserialize)]
pub struct ServerError {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Health {
    #[serde(default)]
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_body_parses_in_order() {
        let body = r#"[{"id":1,"text":"buy milk","done":false},{"id":2,"text":"wash car","done":true}]"#;
        let todos: Vec<Todo> = serde_json::from_str(body).unwrap();

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, TodoId::from(1));
        assert_eq!(todos[0].text, "buy milk");
        assert!(!todos[0].done);
        assert_eq!(todos[1].id, TodoId::from(2));
        assert!(todos[1].done);
    }

    #[test]
    fn test_string_ids_are_accepted() {
        let todo: Todo = serde_json::from_value(json!({"id": "a7f3", "text": "x", "done": true})).unwrap();
        assert_eq!(todo.id, TodoId::Text("a7f3".to_string()));
        assert_eq!(todo.id.to_string(), "a7f3");
        assert_eq!(serde_json::to_value(&todo.id).unwrap(), json!("a7f3"));
    }

    #[test]
    fn test_large_and_float_ids_are_accepted() {
        let body = r#"[{"id":1,"text":"a","done":false},{"id":18446744073709551615,"text":"b","done":false}]"#;
        let todos: Vec<Todo> = serde_json::from_str(body).unwrap();

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, TodoId::from(1));
        assert_eq!(todos[1].id.to_string(), "18446744073709551615");
        assert_eq!(serde_json::to_value(&todos[1].id).unwrap(), json!(18446744073709551615u64));

        let todo: Todo = serde_json::from_value(json!({"id": 2.0, "text": "c"})).unwrap();
        assert_eq!(todo.id.to_string(), "2.0");
        assert_eq!(serde_json::to_value(&todo.id).unwrap(), json!(2.0));
    }

    #[test]
    fn test_missing_done_defaults_to_false() {
        let todo: Todo = serde_json::from_value(json!({"id": 3, "text": "x"})).unwrap();
        assert!(!todo.done);
    }

    #[test]
    fn test_patch_only_writes_set_fields() {
        assert_eq!(serde_json::to_value(TodoPatch::done(true)).unwrap(), json!({"done": true}));
        assert_eq!(serde_json::to_value(TodoPatch::text("new")).unwrap(), json!({"text": "new"}));
        assert_eq!(serde_json::to_value(TodoPatch::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_new_todo_body() {
        let body = serde_json::to_value(NewTodo { text: "wash car" }).unwrap();
        assert_eq!(body, json!({"text": "wash car"}));
    }
}
