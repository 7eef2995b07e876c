//! Roster identifiers and event attribution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a roster key is matched against an event's player field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Key appears anywhere in the player field ("james" matches "james jr").
    #[default]
    Substring,
    /// Key tokens appear as a contiguous run of whole tokens in the player field.
    Token,
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "token" => Ok(MatchMode::Token),
            other => Err(format!(
                "unknown match mode '{}' (expected 'substring' or 'token')",
                other
            )),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Substring => write!(f, "substring"),
            MatchMode::Token => write!(f, "token"),
        }
    }
}

/// A normalized roster identifier (trimmed, lower-cased).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerKey(String);

impl PlayerKey {
    /// Normalize a raw roster line into a key.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether an event's (lower-cased) player field belongs to this key.
    pub fn matches(&self, player_field: &str, mode: MatchMode) -> bool {
        if self.0.is_empty() {
            return false;
        }

        match mode {
            MatchMode::Substring => player_field.contains(&self.0),
            MatchMode::Token => {
                let key: Vec<&str> = self.0.split_whitespace().collect();
                let field: Vec<&str> = player_field.split_whitespace().collect();
                field.windows(key.len()).any(|w| w == key.as_slice())
            }
        }
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerKey({})", self.0)
    }
}

impl From<&str> for PlayerKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PlayerKey {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}
