//! Render Cycle and Message Dispatch
//!
//! Row controls emit a [`Msg`]; [`Controller::dispatch`] performs the matching
//! API call and then runs one full render cycle. Nothing is kept between
//! cycles: every pass clears the rows and rebuilds them from a fresh list.

use crate::api::TodoApi;
use crate::error::ApiError;
use crate::models::{Todo, TodoId, TodoPatch};

/// User actions coming out of the view
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Checkbox changed to `done`
    Toggle { id: TodoId, done: bool },
    /// Edit prompt answered; `None` when it was cancelled
    Edit { id: TodoId, text: Option<String> },
    Delete { id: TodoId },
    /// Add requested with the current input value
    Add { text: String },
}

/// What a render cycle writes into
pub trait TodoView {
    /// Drop every row. Runs before the list request goes out.
    fn clear_rows(&mut self);

    /// Replace the rows with `todos`, in order.
    fn show_rows(&mut self, todos: Vec<Todo>);

    /// Empty the new-item input.
    fn clear_input(&mut self);
}

#[derive(Debug, Clone)]
pub struct Controller<A> {
    api: A,
}

impl<A: TodoApi> Controller<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Clear the rows, fetch the collection, rebuild the rows.
    ///
    /// On failure the rows stay cleared.
    pub async fn render_cycle<V: TodoView>(&self, view: &mut V) -> Result<(), ApiError> {
        view.clear_rows();
        let todos = self.api.list().await?;
        log::debug!("[render] {} rows", todos.len());
        view.show_rows(todos);
        Ok(())
    }

    /// Apply one message. A successful mutation is followed by exactly one
    /// render cycle; a failed one skips it.
    pub async fn dispatch<V: TodoView>(&self, msg: Msg, view: &mut V) -> Result<(), ApiError> {
        match msg {
            Msg::Toggle { id, done } => {
                log::debug!("[app] toggle {} -> {}", id, done);
                self.api.update(&id, &TodoPatch::done(done)).await?;
            }
            Msg::Edit { id, text } => {
                let Some(text) = text else {
                    log::debug!("[app] edit {} cancelled", id);
                    return Ok(());
                };
                let Some(text) = non_blank(&text) else {
                    log::debug!("[app] edit {} skipped: empty text", id);
                    return Ok(());
                };
                self.api.update(&id, &TodoPatch::text(text)).await?;
            }
            Msg::Delete { id } => {
                log::debug!("[app] delete {}", id);
                self.api.delete(&id).await?;
            }
            Msg::Add { text } => {
                let Some(text) = non_blank(&text) else {
                    log::debug!("[app] add skipped: empty text");
                    return Ok(());
                };
                self.api.create(text).await?;
                view.clear_input();
            }
        }

        self.render_cycle(view).await
    }
}

/// Trimmed text, or `None` if nothing is left.
pub fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
