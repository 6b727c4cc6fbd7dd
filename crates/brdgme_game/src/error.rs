//! Error types for game engines.
//!
//! Uses `thiserror`; parse failures convert straight in with `?`.

use brdgme_command::ParseError;
use thiserror::Error;

/// Everything a game can reject a command or setup with.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The game does not support this many players.
    #[error("invalid player count, expected {min}-{max}, got {given}")]
    PlayerCount {
        /// Fewest supported players.
        min: usize,
        /// Most supported players.
        max: usize,
        /// Players requested.
        given: usize,
    },

    /// The command parsed but is not legal in the current state.
    #[error("{message}")]
    InvalidInput {
        /// Explanation shown to the player.
        message: String,
    },

    /// The player cannot act right now.
    #[error("not your turn")]
    NotYourTurn,

    /// The game has ended.
    #[error("game is already finished")]
    Finished,

    /// The game reached a state it should not be able to.
    #[error("internal error: {message}")]
    Internal {
        /// Diagnostic message.
        message: String,
    },

    /// The input did not match the command grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl GameError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Result type for game operations.
pub type Result<T> = std::result::Result<T, GameError>;
