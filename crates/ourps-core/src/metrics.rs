//! Metrics hooks for game operations
//!
//! Counters for accepted and rejected votes, settlements and collected funds.
//!
//! ## Usage
//!
//! ```ignore
//! use ourps_core::metrics::GameMetrics;
//!
//! let metrics = GameMetrics::new();
//! metrics.record_vote_accepted(1_000);
//! let snapshot = metrics.snapshot();
//! ```

use crate::domain::Outcome;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for the voting game.
#[derive(Default)]
pub struct GameMetrics {
    /// Votes counted
    pub votes_accepted: AtomicU64,
    /// Votes refused for any reason
    pub votes_rejected: AtomicU64,
    /// Rounds settled
    pub rounds_settled: AtomicU64,
    /// Settlements refused because voting was still open
    pub settlements_rejected: AtomicU64,
    /// Rounds that ended in a draw
    pub draws: AtomicU64,
    /// Funds collected, saturating at `u64::MAX`
    pub payment_collected: AtomicU64,
}

impl GameMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a counted vote and its payment
    pub fn record_vote_accepted(&self, payment: u128) {
        self.votes_accepted.fetch_add(1, Ordering::Relaxed);
        let payment = u64::try_from(payment).unwrap_or(u64::MAX);
        // fetch_update never fails when the closure always returns Some
        let _ = self
            .payment_collected
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |total| {
                Some(total.saturating_add(payment))
            });
    }

    /// Record a refused vote
    pub fn record_vote_rejected(&self) {
        self.votes_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a settled round
    pub fn record_round_settled(&self, outcome: Outcome) {
        self.rounds_settled.fetch_add(1, Ordering::Relaxed);
        if outcome == Outcome::Draw {
            self.draws.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a refused settlement
    pub fn record_settlement_rejected(&self) {
        self.settlements_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            votes_accepted: self.votes_accepted.load(Ordering::Relaxed),
            votes_rejected: self.votes_rejected.load(Ordering::Relaxed),
            rounds_settled: self.rounds_settled.load(Ordering::Relaxed),
            settlements_rejected: self.settlements_rejected.load(Ordering::Relaxed),
            draws: self.draws.load(Ordering::Relaxed),
            payment_collected: self.payment_collected.load(Ordering::Relaxed),
        }
    }

    /// Ratio of drawn rounds to settled rounds
    pub fn draw_rate(&self) -> f64 {
        let settled = self.rounds_settled.load(Ordering::Relaxed);
        let draws = self.draws.load(Ordering::Relaxed);
        if settled > 0 {
            draws as f64 / settled as f64
        } else {
            0.0
        }
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct MetricsSnapshot {
    pub votes_accepted: u64,
    pub votes_rejected: u64,
    pub rounds_settled: u64,
    pub settlements_rejected: u64,
    pub draws: u64,
    pub payment_collected: u64,
}
