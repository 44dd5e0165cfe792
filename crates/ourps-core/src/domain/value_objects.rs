//! # Domain Value Objects
//!
//! Closed enumerations for teams, moves and round outcomes.
//!
//! Each variant has a stable wire id. Raw ids only enter the domain through
//! the `TryFrom<u8>` conversions below, which are the single place where an
//! out-of-range identifier is rejected.

use super::errors::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds since the unix epoch, as reported by the host time source.
pub type Timestamp = u64;

/// Caller identity (20-byte, Ethereum-style).
pub type Address = [u8; 20];

/// One of the two competing sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Wire id 0.
    Red,
    /// Wire id 1.
    Blue,
}

impl Team {
    /// Both teams, in wire-id order.
    pub const ALL: [Team; 2] = [Team::Red, Team::Blue];

    /// Stable wire id.
    pub const fn id(self) -> u8 {
        match self {
            Team::Red => 0,
            Team::Blue => 1,
        }
    }

    /// Index into per-team storage.
    pub(crate) const fn index(self) -> usize {
        self.id() as usize
    }
}

impl TryFrom<u8> for Team {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Team::Red),
            1 => Ok(Team::Blue),
            other => Err(GameError::InvalidTeam(other)),
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Red => write!(f, "RED"),
            Team::Blue => write!(f, "BLUE"),
        }
    }
}

/// A move as produced by the resolution engine.
///
/// `FailedToPick` is the sentinel for a team whose votes did not produce a
/// strict plurality. It is never a valid vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Wire id 0.
    Rock,
    /// Wire id 1.
    Paper,
    /// Wire id 2.
    Scissors,
    /// Wire id 3. Resolution output only.
    FailedToPick,
}

impl Move {
    /// The three votable moves, in tally order.
    pub const PLAYABLE: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Stable wire id.
    pub const fn id(self) -> u8 {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
            Move::FailedToPick => 3,
        }
    }

    /// True for ROCK, PAPER and SCISSORS.
    pub const fn is_playable(self) -> bool {
        !matches!(self, Move::FailedToPick)
    }

    /// Decode a raw id that must name a votable move.
    ///
    /// The sentinel is rejected here even though it has a valid wire id.
    pub fn try_playable(id: u8) -> Result<Self, GameError> {
        match Move::try_from(id)? {
            Move::FailedToPick => Err(GameError::InvalidMove(id)),
            playable => Ok(playable),
        }
    }

    /// Whether this move beats `other` under classic rules.
    ///
    /// The sentinel never beats anything; every real move beats the sentinel.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
                | (Move::Rock, Move::FailedToPick)
                | (Move::Paper, Move::FailedToPick)
                | (Move::Scissors, Move::FailedToPick)
        )
    }

    /// Index into a tally row. Only meaningful for playable moves.
    pub(crate) const fn tally_index(self) -> Option<usize> {
        match self {
            Move::Rock => Some(0),
            Move::Paper => Some(1),
            Move::Scissors => Some(2),
            Move::FailedToPick => None,
        }
    }
}

impl TryFrom<u8> for Move {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Move::Rock),
            1 => Ok(Move::Paper),
            2 => Ok(Move::Scissors),
            3 => Ok(Move::FailedToPick),
            other => Err(GameError::InvalidMove(other)),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Rock => write!(f, "ROCK"),
            Move::Paper => write!(f, "PAPER"),
            Move::Scissors => write!(f, "SCISSORS"),
            Move::FailedToPick => write!(f, "FAILED_TO_PICK"),
        }
    }
}

/// Result of a round or of a pairwise move comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Wire id 0 (same as `Team::Red`).
    Red,
    /// Wire id 1 (same as `Team::Blue`).
    Blue,
    /// Wire id 2.
    Draw,
}

impl Outcome {
    /// Stable wire id.
    pub const fn id(self) -> u8 {
        match self {
            Outcome::Red => 0,
            Outcome::Blue => 1,
            Outcome::Draw => 2,
        }
    }

    /// The same outcome seen with the two sides swapped.
    pub const fn swapped(self) -> Self {
        match self {
            Outcome::Red => Outcome::Blue,
            Outcome::Blue => Outcome::Red,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// The winning team, if any.
    pub const fn winner(self) -> Option<Team> {
        match self {
            Outcome::Red => Some(Team::Red),
            Outcome::Blue => Some(Team::Blue),
            Outcome::Draw => None,
        }
    }
}

impl From<Team> for Outcome {
    fn from(team: Team) -> Self {
        match team {
            Team::Red => Outcome::Red,
            Team::Blue => Outcome::Blue,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Red => write!(f, "RED"),
            Outcome::Blue => write!(f, "BLUE"),
            Outcome::Draw => write!(f, "DRAW"),
        }
    }
}

/// Two-state round clock view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoundPhase {
    /// Votes are accepted; settlement is not.
    #[default]
    Voting,
    /// The voting window has elapsed; the round may be settled.
    Settleable,
}
