//! Outbound (Driven) ports for the game.
//!
//! These traits define the collaborators the host environment provides:
//! a clock, somewhere to put the funds, and a sink for round notifications.

use crate::domain::{Address, GameError, Timestamp};
use crate::events::RoundEndedPayload;
use std::sync::Arc;

/// Time source for round gating.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in seconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Receives the payment attached to an accepted vote.
pub trait PaymentCollector: Send + Sync {
    /// Take custody of `amount` from `voter`.
    ///
    /// # Returns
    /// - `Ok(())`: funds recorded, the vote may be counted
    /// - `Err`: funds refused, the vote must not be counted
    fn collect(&self, voter: &Address, amount: u128) -> Result<(), GameError>;
}

/// Sink for `RoundEnded` notifications.
pub trait RoundEventPublisher: Send + Sync {
    /// Publish a settled round.
    ///
    /// # Returns
    /// The number of active subscribers that received the event.
    fn publish(&self, event: RoundEndedPayload) -> usize;
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<P: PaymentCollector + ?Sized> PaymentCollector for Arc<P> {
    fn collect(&self, voter: &Address, amount: u128) -> Result<(), GameError> {
        (**self).collect(voter, amount)
    }
}

impl<E: RoundEventPublisher + ?Sized> RoundEventPublisher for Arc<E> {
    fn publish(&self, event: RoundEndedPayload) -> usize {
        (**self).publish(event)
    }
}
