//! # Algorithms Module
//!
//! Resolution engine: dominant-move derivation and pairwise adjudication.

pub mod adjudication;
pub mod dominant_move;

pub use adjudication::adjudicate;
pub use dominant_move::{dominant_move, team_move};
