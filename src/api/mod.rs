//! Todo API Client
//!
//! `TodoApi` is the seam between the view layer and the server. The browser
//! build talks HTTP through [`HttpTodoApi`].

mod http;

use crate::error::ApiError;
use crate::models::{Todo, TodoId, TodoPatch};

pub use http::HttpTodoApi;

/// One request/response exchange per call. No retry, no timeout.
#[allow(async_fn_in_trait)]
pub trait TodoApi {
    /// `GET` the collection, in server order
    async fn list(&self) -> Result<Vec<Todo>, ApiError>;

    /// `POST` a new item; the server assigns the id
    async fn create(&self, text: &str) -> Result<Todo, ApiError>;

    /// `PUT` a partial patch onto an item
    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> Result<Todo, ApiError>;

    /// `DELETE` an item, returning whatever confirmation the server sends
    async fn delete(&self, id: &TodoId) -> Result<serde_json::Value, ApiError>;
}
