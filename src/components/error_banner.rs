//! Error Banner Component
//!
//! Shows the last failed request with retry and dismiss controls.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_dismiss_error, use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    move || {
        store.error().get().map(|err| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-text">{err.message}</span>
                    <button
                        class="retry-btn"
                        on:click=move |_| {
                            store_dismiss_error(&store, None);
                            ctx.reload();
                        }
                    >
                        "Retry"
                    </button>
                    <button class="dismiss-btn" on:click=move |_| store_dismiss_error(&store, None)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
