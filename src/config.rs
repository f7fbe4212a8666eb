//! Client Configuration
//!
//! Defaults match the server's fixed routes. A host page can override them
//! with `<meta name="todo-..." content="...">` tags.

use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::TodoId;

/// DOM ids the page relies on
pub const TODO_LIST_ID: &str = "todo-list";
pub const TODO_INPUT_ID: &str = "todo-input";
pub const ADD_BUTTON_ID: &str = "add-btn";

const DEFAULT_TODOS_URL: &str = "/api/todos";
const DEFAULT_HEALTH_URL: &str = "/health";
const DEFAULT_ERROR_DISMISS_MS: u32 = 5_000;

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Where the todo API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    todos_url: String,
    health_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            todos_url: DEFAULT_TODOS_URL.to_string(),
            health_url: DEFAULT_HEALTH_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(todos_url: &str, health_url: &str) -> Self {
        Self {
            todos_url: trim_url(todos_url),
            health_url: trim_url(health_url),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.todos_url
    }

    pub fn item_url(&self, id: &TodoId) -> String {
        let segment = id.to_string();
        format!("{}/{}", self.todos_url, utf8_percent_encode(&segment, PATH_SEGMENT))
    }

    pub fn health_url(&self) -> &str {
        &self.health_url
    }
}

fn trim_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() { "/".to_string() } else { trimmed.to_string() }
}

/// Application-wide settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub log_level: log::Level,
    /// Auto-dismiss delay for the error banner; 0 keeps it until dismissed
    pub error_dismiss_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            log_level: log::Level::Info,
            error_dismiss_ms: DEFAULT_ERROR_DISMISS_MS,
        }
    }
}

impl AppConfig {
    /// Build a config from a `name -> content` lookup of page meta tags.
    pub fn from_meta<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let todos_url = lookup("todo-api-base").unwrap_or_else(|| DEFAULT_TODOS_URL.to_string());
        let health_url = lookup("todo-health-url").unwrap_or_else(|| DEFAULT_HEALTH_URL.to_string());

        let log_level = lookup("todo-log-level")
            .and_then(|v| log::Level::from_str(v.trim()).ok())
            .unwrap_or(defaults.log_level);

        let error_dismiss_ms = lookup("todo-error-dismiss-ms")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.error_dismiss_ms);

        Self {
            api: ApiConfig::new(&todos_url, &health_url),
            log_level,
            error_dismiss_ms,
        }
    }

    /// Read overrides from the current document's `<meta>` tags.
    pub fn from_document() -> Self {
        let document = leptos::prelude::document();
        Self::from_meta(|name| {
            document
                .query_selector(&format!("meta[name=\"{}\"]", name))
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
        })
    }
}
