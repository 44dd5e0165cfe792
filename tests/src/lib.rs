//! # OURPS Test Suite
//!
//! End-to-end tests for the voting game.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/
//! │   ├── round_flows.rs   # Full rounds through the raw-id handler
//! │   └── bus_flows.rs     # RoundEnded delivery over the broadcast bus
//! └── benches/
//!     └── game_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ourps-tests
//!
//! # By category
//! cargo test -p ourps-tests integration::round_flows
//!
//! # Benchmarks
//! cargo bench -p ourps-tests
//! ```

pub mod integration;
