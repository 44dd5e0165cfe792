//! Round Event Publisher Adapters
//!
//! `BroadcastRoundPublisher` fans `RoundEnded` notifications out over a
//! `tokio::sync::broadcast` channel. `RecordingPublisher` keeps them in memory.

use crate::events::RoundEndedPayload;
use crate::ports::outbound::RoundEventPublisher;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Default broadcast channel capacity.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Multi-consumer publisher for settled rounds.
pub struct BroadcastRoundPublisher {
    sender: broadcast::Sender<RoundEndedPayload>,
    events_published: AtomicU64,
}

impl BroadcastRoundPublisher {
    /// Create a publisher with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a publisher with the given channel capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            events_published: AtomicU64::new(0),
        }
    }

    /// Receive every event published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RoundEndedPayload> {
        self.sender.subscribe()
    }

    /// Number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Total events published, delivered or not.
    pub fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}

impl Default for BroadcastRoundPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundEventPublisher for BroadcastRoundPublisher {
    fn publish(&self, event: RoundEndedPayload) -> usize {
        self.events_published.fetch_add(1, Ordering::Relaxed);
        let round = event.round;

        match self.sender.send(event) {
            Ok(receivers) => {
                debug!(round, receivers, "RoundEnded delivered");
                receivers
            }
            Err(_) => {
                warn!(round, "RoundEnded published with no subscribers");
                0
            }
        }
    }
}

/// Keeps every published event, in order.
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<RoundEndedPayload>>,
}

impl RecordingPublisher {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every event seen so far.
    pub fn events(&self) -> Vec<RoundEndedPayload> {
        self.events.lock().clone()
    }

    /// The most recent event, if any.
    pub fn last(&self) -> Option<RoundEndedPayload> {
        self.events.lock().last().cloned()
    }

    /// Number of events seen.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// True when nothing has been published.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl RoundEventPublisher for RecordingPublisher {
    fn publish(&self, event: RoundEndedPayload) -> usize {
        self.events.lock().push(event);
        1
    }
}
