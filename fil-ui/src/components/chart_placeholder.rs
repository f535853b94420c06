//! Grey box standing in for a chart that is not drawn yet.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPlaceholderProps {
    /// Text shown centered in the box
    pub label: String,
    /// Box height in pixels
    #[props(default = 160)]
    pub height: u32,
}

#[component]
pub fn ChartPlaceholder(props: ChartPlaceholderProps) -> Element {
    let style = format!(
        "display: flex; height: {}px; width: 100%; align-items: center; justify-content: center; border-radius: 4px; background: #F3F4F6;",
        props.height
    );

    rsx! {
        div {
            style: "{style}",
            span {
                style: "color: #6B7280;",
                "{props.label}"
            }
        }
    }
}
