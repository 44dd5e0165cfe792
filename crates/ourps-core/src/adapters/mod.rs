//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory implementations of the outbound ports.

mod publisher;
mod time;
mod treasury;

pub use publisher::{BroadcastRoundPublisher, RecordingPublisher, DEFAULT_CHANNEL_CAPACITY};
pub use time::ManualTimeSource;
pub use treasury::InMemoryTreasury;
