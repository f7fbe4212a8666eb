//! New Todo Form Component
//!
//! Text input plus add button. Enter in the input does the same as the button.

use leptos::prelude::*;

use crate::config::{ADD_BUTTON_ID, TODO_INPUT_ID};
use crate::controller::Msg;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTodoForm(#[prop(into)] on_msg: Callback<Msg>) -> impl IntoView {
    let store = use_app_store();

    // The input is only cleared once the create call succeeds.
    let submit = move || on_msg.run(Msg::Add { text: store.draft().get_untracked() });

    view! {
        <div class="new-todo-row">
            <input
                id=TODO_INPUT_ID
                type="text"
                placeholder="Add new todo..."
                prop:value=move || store.draft().get()
                on:input=move |ev| store.draft().set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <button id=ADD_BUTTON_ID on:click=move |_| submit()>"Add"</button>
        </div>
    }
}
