//! Fixed page header with the lab title and the chat trigger.

use super::ChatPopover;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LabHeaderProps {
    pub title: String,
    /// Forwarded to the chat popover
    pub on_chat_send: EventHandler<String>,
}

#[component]
pub fn LabHeader(props: LabHeaderProps) -> Element {
    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; z-index: 50; height: 64px; box-sizing: border-box; padding: 16px; display: flex; justify-content: space-between; align-items: center; background: #FFFFFF; border-bottom: 2px solid #E4E4E7; box-shadow: 0 1px 2px rgba(0,0,0,0.05);",
            h1 {
                style: "margin: 0; font-size: 30px; font-weight: 700; text-align: left;",
                "{props.title}"
            }
            ChatPopover { on_send: props.on_chat_send }
        }
    }
}
