//! The interface every game implements.

use brdgme_command::{Parser, Spec, Value};
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::log::Log;
use crate::rng::GameRng;
use crate::status::Status;

/// What applying one command produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Logs generated by the command.
    pub logs: Vec<Log>,
    /// Whether the command may be undone.
    pub can_undo: bool,
}

impl CommandOutcome {
    /// An undoable outcome with the given logs.
    #[must_use]
    pub fn undoable(logs: Vec<Log>) -> Self {
        Self {
            logs,
            can_undo: true,
        }
    }

    /// An outcome that reveals hidden information and so cannot be undone.
    #[must_use]
    pub fn irreversible(logs: Vec<Log>) -> Self {
        Self {
            logs,
            can_undo: false,
        }
    }
}

/// What the host gets back from a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// Logs generated by the command.
    pub logs: Vec<Log>,
    /// Whether the command may be undone.
    pub can_undo: bool,
    /// Input the command grammar did not consume.
    pub remaining_input: String,
}

/// A turn-based game driven by text commands.
///
/// A game describes what `player` may type right now through
/// [`Gamer::command_parser`], and reacts to a parsed command in
/// [`Gamer::apply`]. Parsing, turn checks and error conversion are provided.
pub trait Gamer: Sized {
    /// The game's own command type, produced through [`Parser::map`].
    type Command: Clone;

    /// Sets up a game for `players` players.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerCount`] for unsupported player counts.
    fn new(players: usize, rng: &mut GameRng) -> Result<(Self, Vec<Log>)>;

    /// Current status.
    fn status(&self) -> Status;

    /// The grammar `player` may currently use, or `None` if they have no
    /// commands.
    fn command_parser(&self, player: usize) -> Option<Parser<Self::Command>>;

    /// Applies a parsed command.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidInput`] for commands the rules forbid.
    fn apply(&mut self, player: usize, command: Self::Command) -> Result<CommandOutcome>;

    /// Number of players in this game.
    fn player_count(&self) -> usize;

    /// Supported player counts.
    fn player_counts() -> Vec<usize>;

    /// Parses and applies one command from the start of `input`.
    ///
    /// `names` are the players' display names, used to resolve player
    /// references in the grammar.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Finished`] or [`GameError::NotYourTurn`] when the
    /// player cannot act, [`GameError::Parse`] when the input does not match
    /// the grammar, or whatever [`Gamer::apply`] rejects the command with.
    fn command(&mut self, player: usize, input: &str, names: &[String]) -> Result<CommandResponse> {
        self.assert_not_finished()?;
        self.assert_player_turn(player)?;
        let parser = self.command_parser(player).ok_or(GameError::NotYourTurn)?;
        let output = parser.parse(input, names)?;
        let command = match output.value {
            Value::Custom(command) => command,
            other => {
                return Err(GameError::internal(format!(
                    "command grammar produced {} instead of a command",
                    other.type_name()
                )));
            }
        };
        let outcome = self.apply(player, command)?;
        Ok(CommandResponse {
            logs: outcome.logs,
            can_undo: outcome.can_undo,
            remaining_input: output.remaining.to_string(),
        })
    }

    /// Reflects the grammar `player` may currently use.
    fn command_spec(&self, player: usize) -> Option<Spec> {
        self.command_parser(player).map(|p| p.to_spec())
    }

    /// Players who may currently act.
    fn whose_turn(&self) -> Vec<usize> {
        self.status().whose_turn().to_vec()
    }

    /// Players knocked out of the game.
    fn eliminated(&self) -> Vec<usize> {
        self.status().eliminated().to_vec()
    }

    /// Returns true if the game has ended.
    fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Final placings; empty while active.
    fn placings(&self) -> Vec<usize> {
        self.status().placings().to_vec()
    }

    /// Fails if the game has ended.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Finished`].
    fn assert_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::Finished)
        } else {
            Ok(())
        }
    }

    /// Fails unless `player` may act.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotYourTurn`].
    fn assert_player_turn(&self, player: usize) -> Result<()> {
        if self.whose_turn().contains(&player) {
            Ok(())
        } else {
            Err(GameError::NotYourTurn)
        }
    }

    /// Fails unless `players` is a supported player count.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerCount`] naming the supported range.
    fn check_player_count(players: usize) -> Result<()> {
        let counts = Self::player_counts();
        if counts.contains(&players) {
            return Ok(());
        }
        Err(GameError::PlayerCount {
            min: counts.iter().copied().min().unwrap_or(0),
            max: counts.iter().copied().max().unwrap_or(0),
            given: players,
        })
    }
}

/// Applies as many chained commands from `input` as the player can issue.
///
/// Stops when the input is used up, the game ends, the turn passes to
/// someone else, or a command consumes nothing. A failure on the first
/// command is returned as an error; a failure on a later command stops the
/// chain and leaves the failing text in `remaining_input`, so commands that
/// already applied are never lost.
///
/// # Errors
///
/// Returns the error of the first command if it fails.
pub fn command_line<G: Gamer>(
    game: &mut G,
    player: usize,
    input: &str,
    names: &[String],
) -> Result<CommandResponse> {
    let mut remaining = input.trim_start().to_string();
    let first = game.command(player, &remaining, names)?;
    let mut logs = first.logs;
    let mut can_undo = first.can_undo;
    let mut progressed = first.remaining_input.len() < remaining.len();
    remaining = first.remaining_input.trim_start().to_string();

    while progressed
        && !remaining.is_empty()
        && !game.is_finished()
        && game.assert_player_turn(player).is_ok()
    {
        let Ok(response) = game.command(player, &remaining, names) else {
            break;
        };
        logs.extend(response.logs);
        can_undo &= response.can_undo;
        progressed = response.remaining_input.len() < remaining.len();
        remaining = response.remaining_input.trim_start().to_string();
    }

    Ok(CommandResponse {
        logs,
        can_undo,
        remaining_input: remaining,
    })
}
