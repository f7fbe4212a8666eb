//! Application State Store
//!
//! Holds what the current render cycle produced. Nothing here survives as a
//! cache: every cycle clears `todos` before it asks the server again.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::TodoView;
use crate::models::Todo;

/// Error currently shown in the banner
#[derive(Clone, Debug, PartialEq)]
pub struct UiError {
    /// Increases with every reported error, so a stale timer can tell it is stale
    pub seq: u64,
    pub message: String,
}

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rows of the latest render cycle
    pub todos: Vec<Todo>,
    /// Value of the new-item input
    pub draft: String,
    pub error: Option<UiError>,
    /// Last `UiError::seq` handed out
    pub error_seq: u64,
}

pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show `message` in the banner, returning its sequence number
pub fn store_show_error(store: &AppStore, message: String) -> u64 {
    let seq = store.error_seq().get_untracked() + 1;
    store.error_seq().set(seq);
    store.error().set(Some(UiError { seq, message }));
    seq
}

/// Hide the banner. With `Some(seq)`, only if that error is still the one shown.
pub fn store_dismiss_error(store: &AppStore, seq: Option<u64>) {
    let current = store.error().get_untracked().map(|e| e.seq);
    if seq.is_none() || current == seq {
        store.error().set(None);
    }
}

/// [`TodoView`] backed by the store; the components re-render from it.
pub struct StoreView {
    store: AppStore,
}

impl StoreView {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl TodoView for StoreView {
    fn clear_rows(&mut self) {
        self.store.todos().set(Vec::new());
    }

    fn show_rows(&mut self, todos: Vec<Todo>) {
        self.store.todos().set(todos);
    }

    fn clear_input(&mut self) {
        self.store.draft().set(String::new());
    }
}
