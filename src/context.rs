//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::controller::Msg;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to start a fresh render cycle - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to start a fresh render cycle - write
    set_reload_trigger: WriteSignal<u32>,
    /// Entry point for row and form messages
    dispatch: Callback<Msg>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), dispatch: Callback<Msg>) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            dispatch,
        }
    }

    /// Run another render cycle without a mutation
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn dispatcher(&self) -> Callback<Msg> {
        self.dispatch
    }
}
