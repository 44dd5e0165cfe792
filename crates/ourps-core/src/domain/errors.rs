//! # Domain Errors
//!
//! Every game error is a precondition violation. A failed operation leaves
//! all state exactly as it was before the call.

use super::value_objects::Timestamp;
use thiserror::Error;

/// Game error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Team id outside {RED, BLUE}.
    #[error("Invalid team: {0}")]
    InvalidTeam(u8),

    /// Move id outside {ROCK, PAPER, SCISSORS}.
    #[error("Invalid move: {0}")]
    InvalidMove(u8),

    /// Payment below the configured minimum.
    #[error("Insufficient payment: {paid} < {required}")]
    InsufficientPayment {
        /// Amount attached to the vote
        paid: u128,
        /// Configured minimum
        required: u128,
    },

    /// The voting window for the current round has elapsed.
    #[error("Voting closed at {closed_at}, now {now}")]
    VotingClosed {
        /// End of the voting window
        closed_at: Timestamp,
        /// Time of the rejected vote
        now: Timestamp,
    },

    /// Settlement attempted before the voting window elapsed.
    #[error("Voting still open until {closes_at}, now {now}")]
    VotingStillOpen {
        /// End of the voting window
        closes_at: Timestamp,
        /// Time of the rejected settlement
        now: Timestamp,
    },

    /// The payment collector refused the funds; the vote was not counted.
    #[error("Payment rejected: {0}")]
    PaymentRejected(String),

    /// Configuration error.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A settlement broke a round invariant.
    #[error("State inconsistency: {0}")]
    StateInconsistency(String),
}
