//! # Adjudication
//!
//! Pairwise rock-paper-scissors contest between the RED-side and BLUE-side
//! moves. A side that failed to pick loses to any real move; identical moves,
//! the sentinel pair included, draw.

use crate::domain::{Move, Outcome};

/// Winner of `red` (first position) against `blue` (second position).
pub fn adjudicate(red: Move, blue: Move) -> Outcome {
    if red == blue {
        Outcome::Draw
    } else if red.beats(blue) {
        Outcome::Red
    } else if blue.beats(red) {
        Outcome::Blue
    } else {
        Outcome::Draw
    }
}
