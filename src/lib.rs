//! brdgme - command parsing for turn-based board games
//!
//! This crate re-exports the workspace layers for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: brdgme_game    : Gamer trait, game errors, status, logs, seeded RNG
//! Layer 0: brdgme_command : Parser combinators, spec reflection, usage, tracing
//! ```

pub use brdgme_command as command;
pub use brdgme_game as game;
