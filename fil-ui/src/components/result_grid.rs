//! Grid of result cards below the parameter form.

use super::ChartPlaceholder;
use crate::style;
use dioxus::prelude::*;
use fil_core::ResultPanel;

#[derive(Props, Clone, PartialEq)]
pub struct ResultCardProps {
    pub panel: ResultPanel,
}

/// A titled card wrapping one chart placeholder.
#[component]
pub fn ResultCard(props: ResultCardProps) -> Element {
    rsx! {
        div {
            style: "{style::CARD}",
            div {
                style: "padding: 16px 16px 8px 16px;",
                h3 {
                    style: "margin: 0; font-size: 18px; font-weight: 600;",
                    "{props.panel.title}"
                }
            }
            div {
                style: "padding: 0 16px 16px 16px;",
                ChartPlaceholder { label: props.panel.placeholder_text() }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ResultGridProps {
    pub panels: Vec<ResultPanel>,
}

/// Responsive grid of result cards, one per panel.
#[component]
pub fn ResultGrid(props: ResultGridProps) -> Element {
    rsx! {
        div {
            style: "max-width: 1280px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px;",
            for panel in props.panels.iter() {
                ResultCard { key: "{panel.title}", panel: *panel }
            }
        }
    }
}
