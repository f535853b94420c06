//! Free-text search term input.

use crate::state::LabState;
use crate::style;
use dioxus::prelude::*;

/// Search term input. Every keystroke replaces the stored term.
#[component]
pub fn SearchTermInput() -> Element {
    let mut state = use_context::<LabState>();
    let term = state.form.read().search_term().to_string();

    let on_input = move |evt: Event<FormData>| {
        state.form.write().set_search_term(evt.value());
    };

    rsx! {
        div {
            label {
                r#for: "searchTerm",
                style: "{style::LABEL}",
                "검색어"
            }
            input {
                id: "searchTerm",
                r#type: "text",
                placeholder: "ex) reaction flavor",
                value: "{term}",
                style: "{style::TEXT_INPUT}",
                oninput: on_input,
            }
        }
    }
}
