//! # Dominant Move
//!
//! Derives a team's pick from its tally row.
//!
//! The move with the strictly highest count wins. Any tie for the highest
//! count (two-way, three-way, or all-zero) yields `FailedToPick`.

use crate::domain::{Move, Team, VoteTally};

/// Dominant move for a tally row in (ROCK, PAPER, SCISSORS) order.
pub fn dominant_move(row: [u64; 3]) -> Move {
    let top = row.iter().copied().max().unwrap_or(0);
    let leaders = row.iter().filter(|&&count| count == top).count();

    if leaders != 1 {
        return Move::FailedToPick;
    }

    Move::PLAYABLE
        .iter()
        .zip(row)
        .find_map(|(&mv, count)| (count == top).then_some(mv))
        .unwrap_or(Move::FailedToPick)
}

/// Dominant move for one team of a tally.
pub fn team_move(tally: &VoteTally, team: Team) -> Move {
    dominant_move(tally.row(team))
}
