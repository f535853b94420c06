//! Collection channels and the multi-select channel set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A source the analysis collects documents from.
///
/// The universe is fixed; anything the UI offers is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Channel {
    #[serde(rename = "논문")]
    Paper,
    #[serde(rename = "특허")]
    Patent,
    #[serde(rename = "뉴스")]
    News,
    #[serde(rename = "통계보고서")]
    StatisticalReport,
    #[serde(rename = "사내보고서")]
    InternalReport,
}

impl Channel {
    /// Every channel, in the order the selector displays them.
    pub const ALL: [Channel; 5] = [
        Channel::Paper,
        Channel::Patent,
        Channel::News,
        Channel::StatisticalReport,
        Channel::InternalReport,
    ];

    /// Korean display label.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Paper => "논문",
            Channel::Patent => "특허",
            Channel::News => "뉴스",
            Channel::StatisticalReport => "통계보고서",
            Channel::InternalReport => "사내보고서",
        }
    }

    /// English variant name, used for DOM ids and logs.
    pub fn key(self) -> &'static str {
        match self {
            Channel::Paper => "paper",
            Channel::Patent => "patent",
            Channel::News => "news",
            Channel::StatisticalReport => "statistical_report",
            Channel::InternalReport => "internal_report",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Channel {
    type Err = anyhow::Error;

    /// Accepts the Korean label or the English key (case-insensitive).
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        Channel::ALL
            .into_iter()
            .find(|c| c.label() == s || c.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("unknown collection channel: {:?}", s))
    }
}

/// Insertion-ordered set of selected channels.
///
/// Equality is set equality; the order only matters for display.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChannelSelection(Vec<Channel>);

impl PartialEq for ChannelSelection {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|c| other.contains(c))
    }
}

impl Eq for ChannelSelection {}

impl ChannelSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `channel` if selected, otherwise append it.
    /// Returns whether the channel is selected afterwards.
    pub fn toggle(&mut self, channel: Channel) -> bool {
        if let Some(pos) = self.0.iter().position(|&c| c == channel) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(channel);
            true
        }
    }

    pub fn contains(&self, channel: Channel) -> bool {
        self.0.contains(&channel)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected channels in the order they were picked.
    pub fn iter(&self) -> impl Iterator<Item = Channel> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Channel] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_labels_round_trip() {
        for channel in Channel::ALL {
            assert_eq!(channel.label().parse::<Channel>().unwrap(), channel);
            assert_eq!(channel.key().parse::<Channel>().unwrap(), channel);
            assert_eq!(channel.to_string(), channel.label());
        }
    }

    #[test]
    fn test_channel_parse_case_insensitive_key() {
        assert_eq!("NEWS".parse::<Channel>().unwrap(), Channel::News);
        assert_eq!(" 특허 ".parse::<Channel>().unwrap(), Channel::Patent);
    }

    #[test]
    fn test_channel_parse_unknown() {
        assert!("블로그".parse::<Channel>().is_err());
        assert!("".parse::<Channel>().is_err());
    }

    #[test]
    fn test_channel_serializes_as_label() {
        let json = serde_json::to_string(&Channel::StatisticalReport).unwrap();
        assert_eq!(json, "\"통계보고서\"");
        let back: Channel = serde_json::from_str("\"사내보고서\"").unwrap();
        assert_eq!(back, Channel::InternalReport);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = ChannelSelection::new();
        assert!(selection.toggle(Channel::News));
        assert!(selection.contains(Channel::News));
        assert!(!selection.toggle(Channel::News));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_preserves_insertion_order() {
        let mut selection = ChannelSelection::new();
        selection.toggle(Channel::InternalReport);
        selection.toggle(Channel::Paper);
        selection.toggle(Channel::News);
        selection.toggle(Channel::Paper);
        selection.toggle(Channel::Paper);
        assert_eq!(
            selection.as_slice(),
            &[Channel::InternalReport, Channel::News, Channel::Paper]
        );
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut a = ChannelSelection::new();
        a.toggle(Channel::Paper);
        a.toggle(Channel::News);
        let mut b = ChannelSelection::new();
        b.toggle(Channel::News);
        b.toggle(Channel::Paper);
        assert_eq!(a, b);
        b.toggle(Channel::Patent);
        assert_ne!(a, b);
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut selection = ChannelSelection::new();
        for _ in 0..3 {
            for channel in Channel::ALL {
                selection.toggle(channel);
                assert!(selection.iter().filter(|&c| c == channel).count() <= 1);
            }
        }
        assert!(selection.len() <= Channel::ALL.len());
    }
}
