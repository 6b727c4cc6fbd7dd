//! Game logs shown to players.

use serde::{Deserialize, Serialize};

/// A line of game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    /// The log text.
    pub content: String,
    /// Whether every player sees it.
    pub public: bool,
    /// Recipients of a private log.
    pub to: Vec<usize>,
}

impl Log {
    /// A log every player sees.
    #[must_use]
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            public: true,
            to: Vec::new(),
        }
    }

    /// A log only the given players see.
    #[must_use]
    pub fn private(content: impl Into<String>, to: Vec<usize>) -> Self {
        Self {
            content: content.into(),
            public: false,
            to,
        }
    }

    /// Returns true if `player` may see this log.
    #[must_use]
    pub fn is_visible_to(&self, player: usize) -> bool {
        self.public || self.to.contains(&player)
    }
}
