//! # Domain Entities
//!
//! The three pieces of round state: the vote tally, the round clock and the
//! cumulative results. Their mutators are crate-private; outside the crate
//! they are only changed through the game service.

use super::errors::GameError;
use super::value_objects::{Move, Outcome, RoundPhase, Team, Timestamp};
use serde::{Deserialize, Serialize};

/// Per-team, per-move vote counters for the current round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    /// `counts[team][move]`, moves in (ROCK, PAPER, SCISSORS) order.
    counts: [[u64; 3]; 2],
}

impl VoteTally {
    /// An all-zero tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts for one team as (ROCK, PAPER, SCISSORS).
    pub fn votes(&self, team: Team) -> (u64, u64, u64) {
        let [rock, paper, scissors] = self.counts[team.index()];
        (rock, paper, scissors)
    }

    /// Counts for one team as an array in tally order.
    pub fn row(&self, team: Team) -> [u64; 3] {
        self.counts[team.index()]
    }

    /// Count for a single (team, move) pair. The sentinel always counts zero.
    pub fn count(&self, team: Team, mv: Move) -> u64 {
        mv.tally_index()
            .map(|i| self.counts[team.index()][i])
            .unwrap_or(0)
    }

    /// Total votes cast this round across both teams.
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// True when no vote has been recorded this round.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Add one vote. Rejects the sentinel.
    pub(crate) fn record(&mut self, team: Team, mv: Move) -> Result<u64, GameError> {
        let idx = mv.tally_index().ok_or(GameError::InvalidMove(mv.id()))?;
        let slot = &mut self.counts[team.index()][idx];
        *slot = slot.saturating_add(1);
        Ok(*slot)
    }

    /// Zero every counter for both teams.
    pub(crate) fn reset(&mut self) {
        self.counts = [[0; 3]; 2];
    }
}

/// Round boundary data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Start of the current voting window.
    pub started_at: Timestamp,
    /// Round counter, starting at 1.
    pub round: u64,
}

/// Gates voting and settlement on the host-supplied clock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundClock {
    state: RoundState,
    voting_period_secs: u64,
}

impl RoundClock {
    /// Open round 1 at `now`.
    pub fn new(now: Timestamp, voting_period_secs: u64) -> Self {
        Self {
            state: RoundState {
                started_at: now,
                round: 1,
            },
            voting_period_secs,
        }
    }

    /// Current round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Voting period in seconds.
    pub fn voting_period_secs(&self) -> u64 {
        self.voting_period_secs
    }

    /// First instant at which the round may be settled.
    pub fn closes_at(&self) -> Timestamp {
        self.state.started_at.saturating_add(self.voting_period_secs)
    }

    /// Phase at `now`.
    pub fn phase(&self, now: Timestamp) -> RoundPhase {
        if now >= self.closes_at() {
            RoundPhase::Settleable
        } else {
            RoundPhase::Voting
        }
    }

    /// True iff `now` lies in `[started_at, closes_at)`.
    pub fn can_vote(&self, now: Timestamp) -> bool {
        now >= self.state.started_at && now < self.closes_at()
    }

    /// True iff the voting window has elapsed.
    pub fn can_settle(&self, now: Timestamp) -> bool {
        self.phase(now) == RoundPhase::Settleable
    }

    /// Open the next round at `now`.
    pub(crate) fn advance(&mut self, now: Timestamp) {
        self.state = RoundState {
            started_at: now,
            round: self.state.round.saturating_add(1),
        };
    }
}

/// Cumulative round outcomes. Never reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Results {
    /// Rounds won by RED.
    pub red_wins: u64,
    /// Rounds won by BLUE.
    pub blue_wins: u64,
    /// Drawn rounds.
    pub draws: u64,
}

impl Results {
    /// As (RED wins, BLUE wins, draws).
    pub fn as_tuple(&self) -> (u64, u64, u64) {
        (self.red_wins, self.blue_wins, self.draws)
    }

    /// Total settled rounds.
    pub fn rounds_settled(&self) -> u64 {
        self.red_wins + self.blue_wins + self.draws
    }

    /// Bump exactly one slot.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        let slot = match outcome {
            Outcome::Red => &mut self.red_wins,
            Outcome::Blue => &mut self.blue_wins,
            Outcome::Draw => &mut self.draws,
        };
        *slot = slot.saturating_add(1);
    }
}

/// Point-in-time copy of all game state, for persistence and audit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Round boundary data.
    pub round: RoundState,
    /// Voting period in seconds.
    pub voting_period_secs: u64,
    /// Current tally.
    pub tally: VoteTally,
    /// Cumulative results.
    pub results: Results,
}
