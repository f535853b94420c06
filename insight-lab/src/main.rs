//! Foodtech Insight Lab
//!
//! Single-page dashboard: pick a search term, collection channels and a
//! period, then start an analysis. Result cards are placeholders until the
//! charting work lands.
//!
//! Collaborators injected into the page:
//! 1. Analysis start: receives the `AnalysisRequest` from a ready form.
//! 2. Chat: receives each question typed into the header popover.
//!
//! Both currently only log what they receive.

use dioxus::prelude::*;
use fil_core::{AnalysisRequest, RESULT_PANELS};
use fil_ui::components::{LabHeader, ParameterFormCard, ResultGrid};
use fil_ui::state::LabState;

/// DOM id of the element the app mounts into.
const ROOT_ELEMENT_ID: &str = "insight-lab-root";

const LAB_TITLE: &str = "Foodtech Insight Lab";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ELEMENT_ID))
        .launch(App);
}

/// Hand a submitted form to the analysis pipeline.
fn start_analysis(request: AnalysisRequest) {
    match request.to_json() {
        Ok(json) => log::info!("analysis start requested: {}", json),
        Err(err) => log::error!("failed to serialize analysis request: {}", err),
    }
}

/// Hand a chat question to the messaging backend.
fn send_question(question: String) {
    log::info!("chat question: {:?}", question);
}

#[component]
fn App() -> Element {
    use_context_provider(LabState::new);

    rsx! {
        div {
            style: "min-height: 100vh; background: #FFFFFF; padding-bottom: 128px; font-family: system-ui, -apple-system, sans-serif;",

            LabHeader {
                title: LAB_TITLE.to_string(),
                on_chat_send: move |question: String| send_question(question),
            }

            div {
                style: "padding: 112px 32px 32px 32px;",

                ParameterFormCard {
                    on_submit: move |request: AnalysisRequest| start_analysis(request),
                }

                ResultGrid { panels: RESULT_PANELS.to_vec() }
            }
        }
    }
}
