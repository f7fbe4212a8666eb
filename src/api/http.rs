//! HTTP Bindings
//!
//! `TodoApi` over the browser's fetch, via gloo-net.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::TodoApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, Op};
use crate::models::{Health, NewTodo, ServerError, Todo, TodoId, TodoPatch};

#[derive(Debug, Clone, Default)]
pub struct HttpTodoApi {
    config: ApiConfig,
}

impl HttpTodoApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Probe the server's health endpoint.
    ///
    /// A non-2xx answer is reported as unhealthy rather than as an error.
    pub async fn health(&self) -> Result<bool, ApiError> {
        let response = Request::get(self.config.health_url()).send().await?;
        if !response.ok() {
            log::warn!("[api] GET {} -> {}", response.url(), response.status());
            return Ok(false);
        }
        let health: Health = response.json().await?;
        Ok(health.ok)
    }
}

impl TodoApi for HttpTodoApi {
    async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let response = Request::get(self.config.collection_url())
            .header("Accept", "application/json")
            .send()
            .await?;
        read_json(response, Op::List).await
    }

    async fn create(&self, text: &str) -> Result<Todo, ApiError> {
        let response = Request::post(self.config.collection_url())
            .json(&NewTodo { text })?
            .send()
            .await?;
        read_json(response, Op::Create).await
    }

    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> Result<Todo, ApiError> {
        let response = Request::put(&self.config.item_url(id))
            .json(patch)?
            .send()
            .await?;
        read_json(response, Op::Update).await
    }

    async fn delete(&self, id: &TodoId) -> Result<serde_json::Value, ApiError> {
        let response = Request::delete(&self.config.item_url(id)).send().await?;
        read_json(response, Op::Delete).await
    }
}

/// Parse a 2xx body, or turn any other status into `RequestFailed`.
async fn read_json<T: DeserializeOwned>(response: Response, op: Op) -> Result<T, ApiError> {
    let status = response.status();
    if response.ok() {
        log::debug!("[api] {} {} -> {}", op.method(), response.url(), status);
        return Ok(response.json().await?);
    }

    // The server's message only goes to the console.
    let url = response.url();
    match response.json::<ServerError>().await {
        Ok(body) => log::warn!("[api] {} {} -> {}: {}", op.method(), url, status, body.error),
        Err(_) => log::warn!("[api] {} {} -> {}", op.method(), url, status),
    }
    Err(ApiError::RequestFailed(op))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    fn server_error(status: u16) -> Response {
        Response::builder()
            .status(status)
            .json(&json!({"error": "not found or update failed"}))
            .unwrap()
    }

    #[wasm_bindgen_test]
    async fn non_2xx_maps_to_fixed_message_per_op() {
        let cases = [
            (Op::List, "failed to load todos"),
            (Op::Create, "failed to add todo"),
            (Op::Update, "failed to update todo"),
            (Op::Delete, "failed to delete todo"),
        ];

        for (op, expected) in cases {
            let err = read_json::<serde_json::Value>(server_error(500), op).await.unwrap_err();
            assert!(matches!(err, ApiError::RequestFailed(failed) if failed == op));
            assert_eq!(err.to_string(), expected);
        }
    }

    #[wasm_bindgen_test]
    async fn plain_text_error_body_still_maps_to_request_failed() {
        let response = Response::builder().status(404).body(Some("not found")).unwrap();

        let err = read_json::<serde_json::Value>(response, Op::Delete).await.unwrap_err();

        assert!(matches!(err, ApiError::RequestFailed(Op::Delete)));
        assert_eq!(err.to_string(), "failed to delete todo");
    }

    #[wasm_bindgen_test]
    async fn success_body_parses() {
        let response = Response::builder()
            .status(200)
            .json(&json!({"id": 1, "text": "buy milk", "done": true}))
            .unwrap();

        let todo: Todo = read_json(response, Op::Update).await.unwrap();

        assert_eq!(todo, Todo { id: TodoId::from(1), text: "buy milk".to_string(), done: true });
    }

    #[wasm_bindgen_test]
    async fn created_status_counts_as_success() {
        let response = Response::builder()
            .status(201)
            .json(&json!({"id": 7, "text": "wash car", "done": false}))
            .unwrap();

        let todo: Todo = read_json(response, Op::Create).await.unwrap();
        assert_eq!(todo.text, "wash car");
    }

    #[wasm_bindgen_test]
    async fn malformed_success_body_is_transport_error() {
        let response = Response::builder().status(200).body(Some("<html>")).unwrap();

        let err = read_json::<Vec<Todo>>(response, Op::List).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
