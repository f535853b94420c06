//! The parameter form controller.
//!
//! `ParameterForm` owns the three independent inputs of the analysis form:
//! the search term, the channel selection and the date range. Readiness is a
//! predicate over those inputs and is never stored, so it cannot drift out
//! of sync with them.

use crate::channel::{Channel, ChannelSelection};
use crate::date_range::DateRange;
use crate::request::AnalysisRequest;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterForm {
    search_term: String,
    channels: ChannelSelection,
    date_range: DateRange,
}

impl ParameterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn channels(&self) -> &ChannelSelection {
        &self.channels
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn is_selected(&self, channel: Channel) -> bool {
        self.channels.contains(channel)
    }

    /// Replace the search term as typed. No trimming.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
        log::debug!("search term set ({} chars)", self.search_term.chars().count());
    }

    /// Flip membership of `channel` and return the resulting selection.
    pub fn toggle_channel(&mut self, channel: Channel) -> &ChannelSelection {
        let selected = self.channels.toggle(channel);
        log::debug!("channel {} {}", channel.key(), if selected { "selected" } else { "deselected" });
        &self.channels
    }

    /// Replace both endpoints at once. Either may be unset.
    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.date_range = DateRange::new(from, to);
        log::debug!("date range set to {:?}", self.date_range);
    }

    pub fn is_ready(&self) -> bool {
        !self.search_term.is_empty() && !self.channels.is_empty() && self.date_range.is_complete()
    }

    /// Snapshot the form for the analysis collaborator, or `None` while the
    /// form is incomplete.
    pub fn submit(&self) -> Option<AnalysisRequest> {
        if !self.is_ready() {
            log::debug!("submit ignored: form incomplete");
            return None;
        }
        let (from, to) = self.date_range.bounds()?;
        let request = AnalysisRequest {
            query: self.search_term.clone(),
            channels: self.channels.iter().collect(),
            from,
            to,
        };
        log::info!(
            "analysis requested: {:?} over {} channel(s), {} ~ {}",
            request.query,
            request.channels.len(),
            from,
            to
        );
        Some(request)
    }

    /// Back to the empty state the form mounts with.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
