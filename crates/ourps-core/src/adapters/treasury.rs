//! In-Memory Treasury Adapter
//!
//! Implements `PaymentCollector` by keeping a ledger of collected funds.
//! In production, this would forward the value to the host's balance store.

use crate::domain::{Address, GameError};
use crate::ports::outbound::PaymentCollector;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Records every contribution per voter.
#[derive(Default)]
pub struct InMemoryTreasury {
    /// voter -> total contributed.
    contributions: RwLock<HashMap<Address, u128>>,
    /// Sum of every accepted payment.
    total: RwLock<u128>,
    /// When closed, every payment is refused.
    closed: RwLock<bool>,
}

impl InMemoryTreasury {
    /// Create an open, empty treasury.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total funds collected.
    pub fn total_collected(&self) -> u128 {
        *self.total.read()
    }

    /// Funds contributed by one voter.
    pub fn contributed_by(&self, voter: &Address) -> u128 {
        self.contributions.read().get(voter).copied().unwrap_or(0)
    }

    /// Number of distinct voters that have paid.
    pub fn contributor_count(&self) -> usize {
        self.contributions.read().len()
    }

    /// Refuse (`true`) or accept (`false`) further payments.
    pub fn set_closed(&self, closed: bool) {
        *self.closed.write() = closed;
    }
}

impl PaymentCollector for InMemoryTreasury {
    fn collect(&self, voter: &Address, amount: u128) -> Result<(), GameError> {
        if *self.closed.read() {
            return Err(GameError::PaymentRejected("treasury closed".to_string()));
        }

        let mut total = self.total.write();
        let new_total = total
            .checked_add(amount)
            .ok_or_else(|| GameError::PaymentRejected("treasury overflow".to_string()))?;

        let mut contributions = self.contributions.write();
        let entry = contributions.entry(*voter).or_insert(0);
        *entry = entry.saturating_add(amount);
        *total = new_total;

        debug!(
            "[ourps] Collected {} from {:02x}{:02x}..., treasury now {}",
            amount, voter[0], voter[1], new_total
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_records_contribution() {
        let treasury = InMemoryTreasury::new();
        let alice = [0xAA; 20];
        let bob = [0xBB; 20];

        treasury.collect(&alice, 100).unwrap();
        treasury.collect(&alice, 50).unwrap();
        treasury.collect(&bob, 10).unwrap();

        assert_eq!(treasury.contributed_by(&alice), 150);
        assert_eq!(treasury.contributed_by(&bob), 10);
        assert_eq!(treasury.total_collected(), 160);
        assert_eq!(treasury.contributor_count(), 2);
    }

    #[test]
    fn test_closed_treasury_refuses() {
        let treasury = InMemoryTreasury::new();
        treasury.set_closed(true);

        let result = treasury.collect(&[1; 20], 100);
        assert!(matches!(result, Err(GameError::PaymentRejected(_))));
        assert_eq!(treasury.total_collected(), 0);
        assert_eq!(treasury.contributor_count(), 0);
    }

    #[test]
    fn test_overflow_refused_without_side_effects() {
        let treasury = InMemoryTreasury::new();
        treasury.collect(&[1; 20], u128::MAX).unwrap();

        let result = treasury.collect(&[2; 20], 1);
        assert!(matches!(result, Err(GameError::PaymentRejected(_))));
        assert_eq!(treasury.contributed_by(&[2; 20]), 0);
    }
}
