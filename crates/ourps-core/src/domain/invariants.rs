//! # Domain Invariants
//!
//! Rules that must hold across every settlement.

use super::entities::{Results, RoundState, VoteTally};
use super::errors::GameError;

/// Invariant: exactly one results slot moves per settlement.
pub fn invariant_single_outcome(before: &Results, after: &Results) -> Result<(), GameError> {
    let settled_before = before.rounds_settled();
    let settled_after = after.rounds_settled();

    let monotonic = after.red_wins >= before.red_wins
        && after.blue_wins >= before.blue_wins
        && after.draws >= before.draws;

    if !monotonic || settled_after != settled_before + 1 {
        return Err(GameError::StateInconsistency(format!(
            "results moved from {:?} to {:?}",
            before.as_tuple(),
            after.as_tuple()
        )));
    }

    Ok(())
}

/// Invariant: a freshly opened round starts with an empty tally.
pub fn invariant_tally_reset(tally: &VoteTally) -> Result<(), GameError> {
    if !tally.is_empty() {
        return Err(GameError::StateInconsistency(format!(
            "tally carries {} votes into a new round",
            tally.total()
        )));
    }
    Ok(())
}

/// Invariant: rounds only move forward, one at a time, never back in time.
pub fn invariant_round_advance(before: &RoundState, after: &RoundState) -> Result<(), GameError> {
    if after.round != before.round + 1 || after.started_at < before.started_at {
        return Err(GameError::StateInconsistency(format!(
            "round moved from #{}@{} to #{}@{}",
            before.round, before.started_at, after.round, after.started_at
        )));
    }
    Ok(())
}
