//! Submit button gated on form readiness.

use crate::state::LabState;
use crate::style::ButtonVariant;
use dioxus::prelude::*;

/// "분석 시작" button. Disabled until every input is filled in.
#[component]
pub fn SubmitButton() -> Element {
    let state = use_context::<LabState>();
    let ready = state.form.read().is_ready();

    rsx! {
        div {
            style: "display: flex; justify-content: flex-end;",
            button {
                r#type: "submit",
                disabled: !ready,
                style: "padding: 8px 16px; font-size: 14px; {ButtonVariant::for_submit(ready).style()}",
                "분석 시작"
            }
        }
    }
}
