//! Card holding the analysis parameter form.

use super::{ChannelSelector, DateRangePicker, ErrorDisplay, SearchTermInput, SubmitButton};
use crate::state::LabState;
use crate::style;
use dioxus::prelude::*;
use fil_core::AnalysisRequest;

#[derive(Props, Clone, PartialEq)]
pub struct ParameterFormCardProps {
    /// Receives the request when a ready form is submitted
    pub on_submit: EventHandler<AnalysisRequest>,
}

/// Search term, channels and period, plus the submit button.
#[component]
pub fn ParameterFormCard(props: ParameterFormCardProps) -> Element {
    let mut state = use_context::<LabState>();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        state.date_picker_open.set(false);
        let request = state.form.read().submit();
        if let Some(request) = request {
            props.on_submit.call(request);
        }
    };

    rsx! {
        div {
            style: "{style::CARD} max-width: 896px; margin: 0 auto 32px auto;",
            div {
                style: "padding: 24px 24px 0 24px;",
                h2 {
                    style: "margin: 0 0 6px 0; font-size: 22px; font-weight: 600;",
                    "분석 매개변수 설정"
                }
                p {
                    style: "margin: 0; font-size: 14px; {style::MUTED}",
                    "검색어, 수집 채널, 기간을 선택하세요."
                }
            }
            div {
                style: "padding: 24px;",
                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }
                form {
                    style: "display: flex; flex-direction: column; gap: 16px;",
                    onsubmit: on_submit,
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px;",
                        SearchTermInput {}
                        ChannelSelector {}
                        DateRangePicker {}
                    }
                    SubmitButton {}
                }
            }
        }
    }
}
