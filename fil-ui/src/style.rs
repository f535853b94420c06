//! Inline styles shared across components.

/// Visual variant of a button, mirroring the selected/unselected/disabled
/// looks the form uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Filled,
    Outline,
    Disabled,
}

impl ButtonVariant {
    /// Channel buttons are filled while selected.
    pub fn for_channel(selected: bool) -> Self {
        if selected {
            ButtonVariant::Filled
        } else {
            ButtonVariant::Outline
        }
    }

    /// The submit button is filled only while the form is ready.
    pub fn for_submit(ready: bool) -> Self {
        if ready {
            ButtonVariant::Filled
        } else {
            ButtonVariant::Disabled
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            ButtonVariant::Filled => {
                "background: #18181B; color: #FAFAFA; border: 1px solid #18181B; border-radius: 6px; cursor: pointer;"
            }
            ButtonVariant::Outline => {
                "background: #FFFFFF; color: #18181B; border: 1px solid #E4E4E7; border-radius: 6px; cursor: pointer;"
            }
            ButtonVariant::Disabled => {
                "background: #E4E4E7; color: #A1A1AA; border: 1px solid #E4E4E7; border-radius: 6px; cursor: not-allowed;"
            }
        }
    }
}

pub const CARD: &str =
    "background: #FFFFFF; border: 1px solid #E4E4E7; border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,0.05);";

pub const LABEL: &str = "display: block; font-size: 14px; font-weight: 500; margin-bottom: 8px;";

pub const TEXT_INPUT: &str =
    "width: 100%; box-sizing: border-box; padding: 8px 12px; border: 1px solid #E4E4E7; border-radius: 6px; font-size: 14px;";

pub const MUTED: &str = "color: #71717A;";

pub const POPOVER: &str =
    "position: absolute; z-index: 60; margin-top: 4px; background: #FFFFFF; border: 1px solid #E4E4E7; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.1);";
