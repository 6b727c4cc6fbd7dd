//! Game progress and final standings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Whether a game is still running, and who may act.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The game is in progress.
    Active {
        /// Players who may currently issue commands.
        whose_turn: Vec<usize>,
        /// Players knocked out of the game.
        eliminated: Vec<usize>,
    },
    /// The game has ended.
    Finished {
        /// Place of each player, indexed by player; 1 is first.
        placings: Vec<usize>,
    },
}

impl Status {
    /// An active game waiting on the given players.
    #[must_use]
    pub fn active(whose_turn: Vec<usize>) -> Self {
        Self::Active {
            whose_turn,
            eliminated: Vec::new(),
        }
    }

    /// Returns true if the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }

    /// Players who may act; empty once finished.
    #[must_use]
    pub fn whose_turn(&self) -> &[usize] {
        match self {
            Self::Active { whose_turn, .. } => whose_turn,
            Self::Finished { .. } => &[],
        }
    }

    /// Eliminated players; empty once finished.
    #[must_use]
    pub fn eliminated(&self) -> &[usize] {
        match self {
            Self::Active { eliminated, .. } => eliminated,
            Self::Finished { .. } => &[],
        }
    }

    /// Final placings; empty while active.
    #[must_use]
    pub fn placings(&self) -> &[usize] {
        match self {
            Self::Active { .. } => &[],
            Self::Finished { placings } => placings,
        }
    }
}

/// Ranks players by their metrics, highest first.
///
/// Each player's metrics are tie-breakers in priority order, e.g. score
/// then remaining cash. Tied players share a place and the next place skips
/// accordingly, so two joint winners are followed by third.
#[must_use]
pub fn gen_placings(metrics: &[Vec<i64>]) -> Vec<usize> {
    let mut grouped: BTreeMap<&[i64], Vec<usize>> = BTreeMap::new();
    for (player, m) in metrics.iter().enumerate() {
        grouped.entry(m.as_slice()).or_default().push(player);
    }

    // Slices order lexicographically, and a prefix sorts below its extension.
    let mut placings = vec![0; metrics.len()];
    let mut place = 1;
    for players in grouped.into_values().rev() {
        for &player in &players {
            placings[player] = place;
        }
        place += players.len();
    }
    placings
}
