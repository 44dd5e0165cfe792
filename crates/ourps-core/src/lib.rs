//! # OURPS Core
//!
//! Team rock-paper-scissors decided by paid votes.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Two teams, RED and BLUE, vote on a move during a fixed voting window.
//! Each vote costs at least the minimum payment and counts exactly once,
//! whatever was paid. Once the window has elapsed anyone may settle the
//! round:
//! - each team's move is its strict plurality, or FAILED_TO_PICK on a tie
//! - the two moves are compared under classic rules
//! - the outcome is added to the cumulative results, the tally is cleared
//!   and the next round opens immediately
//!
//! ## Round Lifecycle
//!
//! | Phase | Votes | Settlement |
//! |-------|-------|------------|
//! | Voting `[start, start + period)` | accepted | `VotingStillOpen` |
//! | Settleable `[start + period, ..)` | `VotingClosed` | accepted |
//!
//! ## Module Structure
//!
//! ```text
//! ourps-core/
//! ├── domain/          # Team, Move, Outcome, VoteTally, RoundClock, GameConfig
//! ├── algorithms/      # Dominant move, pairwise adjudication
//! ├── ports/           # RpsGameApi + TimeSource, PaymentCollector, RoundEventPublisher
//! ├── adapters/        # Manual clock, in-memory treasury, broadcast publisher
//! ├── service.rs       # RpsGameService
//! ├── handler.rs       # Raw-id request decoding
//! ├── events.rs        # Request/response/notification payloads
//! └── metrics.rs       # Operation counters
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod events;
pub mod handler;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{
    BroadcastRoundPublisher, InMemoryTreasury, ManualTimeSource, RecordingPublisher,
    DEFAULT_CHANNEL_CAPACITY,
};
pub use algorithms::{adjudicate, dominant_move, team_move};
pub use domain::{
    invariant_round_advance, invariant_single_outcome, invariant_tally_reset, Address,
    GameConfig, GameConfigBuilder, GameError, Move, Outcome, Results, RoundClock, RoundPhase,
    RoundSnapshot, RoundState, Team, Timestamp, VoteTally, DEFAULT_MIN_PAYMENT,
    DEFAULT_VOTING_PERIOD_SECS,
};
pub use events::{
    MoveQueryPayload, ResultsResponse, RoundEndedPayload, VoteRequestPayload, VotesQueryPayload,
    VotesResponse, WinnerQueryPayload,
};
pub use handler::GameHandler;
pub use metrics::{GameMetrics, MetricsSnapshot};
pub use ports::{PaymentCollector, RoundEventPublisher, RpsGameApi, SystemTimeSource, TimeSource};
pub use service::{RpsGameService, SharedGame};

/// Team id constant.
pub const RED: Team = Team::Red;
/// Team id constant.
pub const BLUE: Team = Team::Blue;
/// Move id constant.
pub const ROCK: Move = Move::Rock;
/// Move id constant.
pub const PAPER: Move = Move::Paper;
/// Move id constant.
pub const SCISSORS: Move = Move::Scissors;
/// Sentinel for a team without a strict plurality.
pub const FAILED_TO_PICK: Move = Move::FailedToPick;
/// Outcome id constant.
pub const DRAW: Outcome = Outcome::Draw;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
