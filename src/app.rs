//! Todo App
//!
//! Wires the store, the controller and the components together. Every
//! failure from the controller ends up here, in the log and the banner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpTodoApi;
use crate::components::{ErrorBanner, NewTodoForm, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::{Controller, Msg};
use crate::error::ApiError;
use crate::store::{store_dismiss_error, store_show_error, AppState, AppStore, StoreView};

/// Log `err` and put it in the banner, scheduling auto-dismiss if configured.
fn report_error(store: AppStore, dismiss_after_ms: u32, err: ApiError) {
    log::error!("[app] {}", err);
    let seq = store_show_error(&store, err.to_string());

    if dismiss_after_ms > 0 {
        spawn_local(async move {
            TimeoutFuture::new(dismiss_after_ms).await;
            store_dismiss_error(&store, Some(seq));
        });
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let controller = Controller::new(HttpTodoApi::new(config.api.clone()));
    let dismiss_after_ms = config.error_dismiss_ms;

    let dispatch = Callback::new({
        let controller = controller.clone();
        move |msg: Msg| {
            let controller = controller.clone();
            spawn_local(async move {
                if let Err(err) = controller.dispatch(msg, &mut StoreView::new(store)).await {
                    report_error(store, dismiss_after_ms, err);
                }
            });
        }
    });

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), dispatch);
    provide_context(ctx);

    // Initial render cycle, and again on every reload
    Effect::new({
        let controller = controller.clone();
        move |_| {
            let trigger = reload_trigger.get();
            log::debug!("[app] render cycle, trigger={}", trigger);
            let controller = controller.clone();
            spawn_local(async move {
                if let Err(err) = controller.render_cycle(&mut StoreView::new(store)).await {
                    report_error(store, dismiss_after_ms, err);
                }
            });
        }
    });

    // Only logged; the list request reports its own failure
    spawn_local(async move {
        match controller.api().health().await {
            Ok(true) => log::info!("[app] server healthy at {}", controller.api().config().health_url()),
            Ok(false) => log::warn!("[app] server reports unhealthy"),
            Err(e) => log::warn!("[app] health check failed: {}", e),
        }
    });

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>
            <ErrorBanner />
            <NewTodoForm on_msg=dispatch />
            <TodoList />
        </main>
    }
}
