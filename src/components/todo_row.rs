//! Todo Row Component
//!
//! One `<li>` per item: checkbox, label, edit and delete controls.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::controller::Msg;
use crate::models::Todo;

const EDIT_PROMPT: &str = "Edit todo:";

/// Label class; completed items get `done`
pub fn label_class(done: bool) -> &'static str {
    if done { "text done" } else { "text" }
}

/// Ask for replacement text, pre-filled with `current`. `None` if cancelled.
fn prompt_edit(current: &str) -> Option<String> {
    match window().prompt_with_message_and_default(EDIT_PROMPT, current) {
        Ok(answer) => answer,
        Err(e) => {
            log::warn!("[row] prompt failed: {:?}", e);
            None
        }
    }
}

/// A single todo row
#[component]
pub fn TodoRow(
    todo: Todo,
    #[prop(into)] on_msg: Callback<Msg>,
) -> impl IntoView {
    let Todo { id, text, done } = todo;
    let toggle_id = id.clone();
    let edit_id = id.clone();
    let current_text = text.clone();

    view! {
        <li class="todo">
            <div class="left">
                // Checkbox
                <input
                    type="checkbox"
                    prop:checked=done
                    on:change=move |ev| {
                        let checked = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                            .map(|input| input.checked())
                            .unwrap_or(!done);
                        on_msg.run(Msg::Toggle { id: toggle_id.clone(), done: checked });
                    }
                />

                // Text
                <span class=label_class(done)>{text}</span>
            </div>

            <div class="actions">
                <button class="edit-btn" on:click=move |_| {
                    let text = prompt_edit(&current_text);
                    on_msg.run(Msg::Edit { id: edit_id.clone(), text });
                }>"Edit"</button>

                <button class="delete-btn" on:click=move |_| {
                    on_msg.run(Msg::Delete { id: id.clone() });
                }>"Delete"</button>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_class() {
        assert_eq!(label_class(false), "text");
        assert_eq!(label_class(true), "text done");
    }
}
