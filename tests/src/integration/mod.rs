//! # Integration Tests
//!
//! Whole-game flows wired with in-memory collaborators.

pub mod bus_flows;
pub mod round_flows;
