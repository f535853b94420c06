//! Reusable Dioxus RSX components for the dashboard page.

mod channel_selector;
mod chart_placeholder;
mod chat_popover;
mod date_range_picker;
mod error_display;
mod lab_header;
mod parameter_form_card;
mod result_grid;
mod search_term_input;
mod submit_button;

pub use channel_selector::ChannelSelector;
pub use chart_placeholder::ChartPlaceholder;
pub use chat_popover::ChatPopover;
pub use date_range_picker::{date_button_text, DateRangePicker, DATE_PROMPT};
pub use error_display::ErrorDisplay;
pub use lab_header::LabHeader;
pub use parameter_form_card::ParameterFormCard;
pub use result_grid::{ResultCard, ResultGrid};
pub use search_term_input::SearchTermInput;
pub use submit_button::SubmitButton;
