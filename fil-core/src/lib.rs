//! Core types for the Foodtech Insight Lab dashboard.
//!
//! This crate has no UI or WASM dependencies:
//! - `channel`: the fixed collection-channel universe and the selection set
//! - `date_range`: an optionally-bounded analysis period
//! - `form`: the parameter form controller and its readiness rule
//! - `request`: the snapshot handed to the analysis collaborator on submit
//! - `panel`: the static catalog of result cards

pub mod channel;
pub mod date_range;
pub mod dates;
pub mod form;
pub mod panel;
pub mod request;

pub use channel::{Channel, ChannelSelection};
pub use date_range::DateRange;
pub use form::ParameterForm;
pub use panel::{ResultPanel, RESULT_PANELS};
pub use request::AnalysisRequest;
