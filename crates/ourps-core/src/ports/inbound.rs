//! # Inbound Ports
//!
//! API trait defining what the game can do.

use crate::domain::{Address, GameError, Move, Outcome, RoundPhase, RoundSnapshot, Team};
use crate::events::RoundEndedPayload;

/// Voting game API - inbound port.
///
/// Mutators take `&mut self`: each call is one atomic step of a single-writer
/// state machine.
pub trait RpsGameApi {
    /// Cast one vote for `(team, mv)`, paying `payment`.
    ///
    /// Returns the new count for that pair.
    fn cast_vote(
        &mut self,
        voter: &Address,
        team: Team,
        mv: Move,
        payment: u128,
    ) -> Result<u64, GameError>;

    /// Current counts for a team as (ROCK, PAPER, SCISSORS).
    fn get_votes(&self, team: Team) -> (u64, u64, u64);

    /// Dominant move of a team on the current tally.
    fn get_move(&self, team: Team) -> Move;

    /// Pairwise comparator; `red` is the RED-side position.
    fn get_winner(&self, red: Move, blue: Move) -> Outcome;

    /// Settle the current round.
    fn end_round(&mut self) -> Result<RoundEndedPayload, GameError>;

    /// Cumulative (RED wins, BLUE wins, draws).
    fn get_results(&self) -> (u64, u64, u64);

    /// `VOTING_PERIOD` in seconds.
    fn voting_period(&self) -> u64;

    /// Round clock phase at the current time.
    fn phase(&self) -> RoundPhase;

    /// Point-in-time copy of all state.
    fn snapshot(&self) -> RoundSnapshot;
}
