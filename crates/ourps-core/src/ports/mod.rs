//! # Ports Layer
//!
//! Inbound API plus the collaborators the host must supply.

pub mod inbound;
pub mod outbound;

pub use inbound::RpsGameApi;
pub use outbound::{PaymentCollector, RoundEventPublisher, SystemTimeSource, TimeSource};
