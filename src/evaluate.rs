//! Scoring a finished round.
//!
//! A player's score is the number of cells still alive on their final board. The player with the
//! strictly higher score wins. An exact tie is a loss for both players.

use crate::{Grid, Result};
use log::debug;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

#[cfg(feature = "snapshot")]
use serde::{Deserialize, Serialize};

/// Which player, counted from one as the players see it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub enum Player {
    One,
    Two,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub enum Outcome {
    PlayerOneWins,
    PlayerTwoWins,
    Tie,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub enum Verdict {
    Win,
    Lose,
}

impl Player {
    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl Outcome {
    /// What a player is told. Nobody wins a tie.
    pub fn verdict(self, player: Player) -> Verdict {
        match (self, player) {
            (Outcome::PlayerOneWins, Player::One) | (Outcome::PlayerTwoWins, Player::Two) => {
                Verdict::Win
            }
            _ => Verdict::Lose,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::PlayerOneWins => Some(Player::One),
            Outcome::PlayerTwoWins => Some(Player::Two),
            Outcome::Tie => None,
        }
    }
}

/// How one player's board fared over a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub struct PlayerScore {
    /// Cells whose state differs between the initial and final boards.
    pub changed: usize,
    /// Cells alive on the final board.
    pub score: usize,
}

impl PlayerScore {
    pub fn new(initial: &Grid, last: &Grid) -> Result<Self> {
        Ok(PlayerScore {
            changed: count_diff(initial, last)?,
            score: last.count_active(),
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub struct MatchResult {
    pub player_one: PlayerScore,
    pub player_two: PlayerScore,
    pub outcome: Outcome,
}

impl MatchResult {
    pub fn score(&self, player: Player) -> PlayerScore {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    pub fn verdict(&self, player: Player) -> Verdict {
        self.outcome.verdict(player)
    }
}

/// Count the cells that differ between two boards of the same side.
pub fn count_diff(a: &Grid, b: &Grid) -> Result<usize> {
    a.ensure_same_side(b)?;
    Ok(a.cells()
        .par_iter()
        .zip(b.cells().par_iter())
        .filter(|(x, y)| x != y)
        .count())
}

/// Score both players from the boards they started and finished with.
pub fn evaluate(
    initial_one: &Grid,
    final_one: &Grid,
    initial_two: &Grid,
    final_two: &Grid,
) -> Result<MatchResult> {
    let player_one = PlayerScore::new(initial_one, final_one)?;
    let player_two = PlayerScore::new(initial_two, final_two)?;
    let outcome = match player_one.score.cmp(&player_two.score) {
        std::cmp::Ordering::Greater => Outcome::PlayerOneWins,
        std::cmp::Ordering::Less => Outcome::PlayerTwoWins,
        std::cmp::Ordering::Equal => Outcome::Tie,
    };
    debug!(
        "scores {} to {}, changed {} and {}: {:?}",
        player_one.score, player_two.score, player_one.changed, player_two.changed, outcome
    );
    Ok(MatchResult {
        player_one,
        player_two,
        outcome,
    })
}
