//! Game engine boundary for brdgme.
//!
//! A game implements [`Gamer`]: it exposes the command grammar a player may
//! currently use and applies the commands parsed from it. This crate supplies
//! the shared error type, status and log records, and the seeded RNG games
//! receive instead of ambient randomness.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod gamer;
pub mod log;
pub mod rng;
pub mod status;

pub use error::{GameError, Result};
pub use gamer::{CommandOutcome, CommandResponse, Gamer, command_line};
pub use log::Log;
pub use rng::{GameRng, game_rng};
pub use status::{Status, gen_placings};
