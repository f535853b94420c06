//! Toggle buttons for the collection channels.

use crate::state::LabState;
use crate::style::{self, ButtonVariant};
use dioxus::prelude::*;
use fil_core::Channel;

/// One toggle button per channel; filled while selected.
#[component]
pub fn ChannelSelector() -> Element {
    let mut state = use_context::<LabState>();
    let form = state.form.read().clone();

    rsx! {
        div {
            label {
                style: "{style::LABEL}",
                "수집 채널"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 4px;",
                for channel in Channel::ALL {
                    button {
                        key: "{channel.key()}",
                        r#type: "button",
                        style: "padding: 4px 8px; font-size: 12px; {ButtonVariant::for_channel(form.is_selected(channel)).style()}",
                        onclick: move |_| {
                            state.form.write().toggle_channel(channel);
                        },
                        "{channel.label()}"
                    }
                }
            }
        }
    }
}
