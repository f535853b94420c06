//! Chat popover in the page header.
//!
//! The question box is a shell: whatever is sent goes to `on_send` and the
//! popover keeps no history.

use crate::state::LabState;
use crate::style::{self, ButtonVariant};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChatPopoverProps {
    /// Receives each question the user sends
    pub on_send: EventHandler<String>,
}

#[component]
pub fn ChatPopover(props: ChatPopoverProps) -> Element {
    let mut state = use_context::<LabState>();
    let mut question = use_signal(String::new);
    let open = (state.chat_open)();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let text = question();
        if text.trim().is_empty() {
            return;
        }
        props.on_send.call(text);
        question.set(String::new());
    };

    rsx! {
        div {
            style: "position: relative;",
            button {
                r#type: "button",
                aria_label: "Open QnA",
                style: "width: 40px; height: 40px; border-radius: 9999px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); {ButtonVariant::Filled.style()}",
                onclick: move |_| {
                    let open = (state.chat_open)();
                    state.chat_open.set(!open);
                },
                "💬"
            }
            if open {
                div {
                    style: "{style::POPOVER} right: 0; width: 384px;",
                    form {
                        style: "display: flex; align-items: center; gap: 8px; padding: 8px;",
                        onsubmit: on_submit,
                        input {
                            r#type: "text",
                            placeholder: "질문을 입력하세요...",
                            value: "{question}",
                            style: "{style::TEXT_INPUT} flex-grow: 1;",
                            oninput: move |evt: Event<FormData>| question.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            aria_label: "Send",
                            style: "width: 36px; height: 36px; flex-shrink: 0; {ButtonVariant::Filled.style()}",
                            "➤"
                        }
                    }
                }
            }
        }
    }
}
