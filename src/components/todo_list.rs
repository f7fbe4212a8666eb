//! Todo List Component
//!
//! Rebuilds every row whenever the store's todos change; there is no keyed
//! diffing.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::config::TODO_LIST_ID;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let on_msg = ctx.dispatcher();

    view! {
        <ul id=TODO_LIST_ID class="todo-list">
            {move || {
                store
                    .todos()
                    .get()
                    .into_iter()
                    .map(|todo| view! { <TodoRow todo=todo on_msg=on_msg /> })
                    .collect_view()
            }}
        </ul>
    }
}
