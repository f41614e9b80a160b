//! Channel Selection

use serde::{Deserialize, Serialize};

/// Which channels an operation should cover: every declared channel of the
/// requested kind, a single named channel, or an explicit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelSelector {
    All,
    One(String),
    Many(Vec<String>),
}

impl ChannelSelector {
    /// The names this selector asks for, or `None` for the all-channels
    /// sentinel.
    pub(crate) fn requested(&self) -> Option<Vec<&str>> {
        match self {
            ChannelSelector::All => None,
            ChannelSelector::One(name) => Some(vec![name.as_str()]),
            ChannelSelector::Many(names) => Some(names.iter().map(String::as_str).collect()),
        }
    }
}

impl From<&str> for ChannelSelector {
    fn from(name: &str) -> Self {
        ChannelSelector::One(name.to_string())
    }
}

impl From<String> for ChannelSelector {
    fn from(name: String) -> Self {
        ChannelSelector::One(name)
    }
}

impl From<Vec<String>> for ChannelSelector {
    fn from(names: Vec<String>) -> Self {
        ChannelSelector::Many(names)
    }
}

impl From<&[&str]> for ChannelSelector {
    fn from(names: &[&str]) -> Self {
        ChannelSelector::Many(names.iter().map(|n| n.to_string()).collect())
    }
}
