//! UI Components
//!
//! Leptos components for the todo page.

mod error_banner;
mod new_todo_form;
mod todo_list;
mod todo_row;

pub use error_banner::ErrorBanner;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::{label_class, TodoRow};
