//! Shared Dioxus components for the Foodtech Insight Lab dashboard.
//!
//! This crate provides:
//! - `state`: Reactive LabState with Dioxus Signals
//! - `components`: RSX components for the header, chat popover, parameter
//!   form and result grid
//! - `style`: inline style strings shared by the components

pub mod components;
pub mod state;
pub mod style;
