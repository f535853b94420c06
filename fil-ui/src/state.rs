//! Page state managed via Dioxus context.
//!
//! `LabState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<LabState>()`.
//! Each page mount gets its own instance; nothing is process-wide.

use dioxus::prelude::*;
use fil_core::ParameterForm;

/// Shared state for the dashboard page.
#[derive(Clone, Copy)]
pub struct LabState {
    /// Search term, channel selection and date range
    pub form: Signal<ParameterForm>,
    /// Whether the date range popover is showing
    pub date_picker_open: Signal<bool>,
    /// Whether the chat popover is showing
    pub chat_open: Signal<bool>,
    /// Error message if some input was rejected
    pub error_msg: Signal<Option<String>>,
}

impl LabState {
    /// Create a new LabState with an empty form and closed popovers.
    pub fn new() -> Self {
        Self {
            form: Signal::new(ParameterForm::new()),
            date_picker_open: Signal::new(false),
            chat_open: Signal::new(false),
            error_msg: Signal::new(None),
        }
    }
}

impl Default for LabState {
    fn default() -> Self {
        Self::new()
    }
}
