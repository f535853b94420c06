//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a rejected-input message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 8px 12px; margin: 8px 0; background: #FEF2F2; color: #B91C1C; border-radius: 6px; border: 1px solid #FECACA; font-size: 13px;",
            "{props.message}"
        }
    }
}
