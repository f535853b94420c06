//! Date range picker: a trigger button and a popover with start and end inputs.

use crate::state::LabState;
use crate::style::{self, ButtonVariant};
use dioxus::prelude::*;
use fil_core::dates::{format_date, parse_input_date};
use fil_core::DateRange;

/// Shown on the trigger until both endpoints are picked.
pub const DATE_PROMPT: &str = "날짜를 선택하세요";

/// Text for the trigger button.
pub fn date_button_text(range: &DateRange) -> String {
    range.label().unwrap_or_else(|| DATE_PROMPT.to_string())
}

/// Which endpoint an input edits.
#[derive(Clone, Copy)]
enum Endpoint {
    Start,
    End,
}

/// Apply one date input change to the form, keeping the other endpoint.
fn apply_date_input(mut state: LabState, endpoint: Endpoint, value: String) {
    match parse_input_date(&value) {
        Ok(date) => {
            let current = state.form.read().date_range();
            let (from, to) = match endpoint {
                Endpoint::Start => (date, current.to()),
                Endpoint::End => (current.from(), date),
            };
            state.form.write().set_date_range(from, to);
            state.error_msg.set(None);
        }
        Err(err) => {
            log::warn!("rejected date input {:?}: {}", value, err);
            state.error_msg.set(Some(format!("잘못된 날짜입니다: {}", value)));
        }
    }
}

/// Date range picker for the analysis period.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<LabState>();
    let range = state.form.read().date_range();
    let open = (state.date_picker_open)();

    let start = range.from().map(|d| format_date(&d)).unwrap_or_default();
    let end = range.to().map(|d| format_date(&d)).unwrap_or_default();
    let trigger_text = date_button_text(&range);
    let trigger_style = if range.is_complete() { "" } else { style::MUTED };

    rsx! {
        div {
            style: "position: relative;",
            label {
                style: "{style::LABEL}",
                "기간 설정"
            }
            button {
                r#type: "button",
                style: "width: 100%; padding: 8px 12px; text-align: left; font-size: 14px; {ButtonVariant::Outline.style()} {trigger_style}",
                onclick: move |_| {
                    let open = (state.date_picker_open)();
                    state.date_picker_open.set(!open);
                },
                "📅 {trigger_text}"
            }
            if open {
                div {
                    style: "{style::POPOVER} padding: 12px; display: flex; flex-direction: column; gap: 8px;",
                    label {
                        style: "font-size: 13px;",
                        "From: "
                        input {
                            r#type: "date",
                            value: "{start}",
                            max: "{end}",
                            onchange: move |evt: Event<FormData>| apply_date_input(state, Endpoint::Start, evt.value()),
                        }
                    }
                    label {
                        style: "font-size: 13px;",
                        "To: "
                        input {
                            r#type: "date",
                            value: "{end}",
                            min: "{start}",
                            onchange: move |evt: Event<FormData>| apply_date_input(state, Endpoint::End, evt.value()),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_button_text_prompt_until_complete() {
        assert_eq!(date_button_text(&DateRange::default()), DATE_PROMPT);
        let partial = DateRange::new(NaiveDate::from_ymd_opt(2024, 2, 1), None);
        assert_eq!(date_button_text(&partial), DATE_PROMPT);
    }

    #[test]
    fn test_button_text_complete() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1),
            NaiveDate::from_ymd_opt(2024, 1, 31),
        );
        assert_eq!(date_button_text(&range), "2024-01-01 ~ 2024-01-31");
    }
}
