//! # Event Schema
//!
//! Message payloads exchanged with the host. Inbound requests carry raw wire
//! ids; they are decoded into domain types by [`crate::handler::GameHandler`].

use crate::domain::{Address, Move, Outcome, Results, Team, Timestamp, VoteTally};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// INBOUND
// =============================================================================

/// A payable vote as submitted by a caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VoteRequestPayload {
    /// Caller identity.
    pub voter: Address,
    /// Raw team id.
    pub team: u8,
    /// Raw move id.
    pub move_id: u8,
    /// Value attached to the call.
    pub payment: u128,
}

/// Query for one team's tally.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct VotesQueryPayload {
    /// Raw team id.
    pub team: u8,
}

/// Query for one team's current dominant move.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MoveQueryPayload {
    /// Raw team id.
    pub team: u8,
}

/// Query for the pairwise comparator.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WinnerQueryPayload {
    /// Raw move id in the RED-side position.
    pub red_move: u8,
    /// Raw move id in the BLUE-side position.
    pub blue_move: u8,
}

// =============================================================================
// OUTBOUND
// =============================================================================

/// One team's counts as (ROCK, PAPER, SCISSORS).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotesResponse {
    /// ROCK votes.
    pub rock: u64,
    /// PAPER votes.
    pub paper: u64,
    /// SCISSORS votes.
    pub scissors: u64,
}

impl From<(u64, u64, u64)> for VotesResponse {
    fn from((rock, paper, scissors): (u64, u64, u64)) -> Self {
        Self {
            rock,
            paper,
            scissors,
        }
    }
}

/// Cumulative results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsResponse {
    /// Rounds won by RED.
    pub red_wins: u64,
    /// Rounds won by BLUE.
    pub blue_wins: u64,
    /// Drawn rounds.
    pub draws: u64,
}

impl From<Results> for ResultsResponse {
    fn from(results: Results) -> Self {
        Self {
            red_wins: results.red_wins,
            blue_wins: results.blue_wins,
            draws: results.draws,
        }
    }
}

/// `RoundEnded` notification, fired once per successful settlement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEndedPayload {
    /// Unique event id.
    pub event_id: Uuid,
    /// Round that was settled.
    pub round: u64,
    /// Settled outcome.
    pub outcome: Outcome,
    /// RED's dominant move.
    pub red_move: Move,
    /// BLUE's dominant move.
    pub blue_move: Move,
    /// Final tally of the settled round.
    pub tally: VoteTally,
    /// Settlement time.
    pub settled_at: Timestamp,
}

impl RoundEndedPayload {
    /// Build the notification for a settled round.
    pub fn new(
        round: u64,
        outcome: Outcome,
        red_move: Move,
        blue_move: Move,
        tally: VoteTally,
        settled_at: Timestamp,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            round,
            outcome,
            red_move,
            blue_move,
            tally,
            settled_at,
        }
    }

    /// Final votes of one team as (ROCK, PAPER, SCISSORS).
    pub fn votes(&self, team: Team) -> (u64, u64, u64) {
        self.tally.votes(team)
    }
}
