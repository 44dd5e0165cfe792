//! Game configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use ourps_core::domain::GameConfigBuilder;
//!
//! let config = GameConfigBuilder::new()
//!     .voting_period_secs(300)
//!     .min_payment(100_000_000_000_000_000)
//!     .build()
//!     .expect("Valid config");
//! ```

use crate::domain::errors::GameError;
use serde::{Deserialize, Serialize};
use std::env;

/// Default voting window length in seconds.
pub const DEFAULT_VOTING_PERIOD_SECS: u64 = 60;

/// Default minimum payment per vote.
pub const DEFAULT_MIN_PAYMENT: u128 = 1;

/// Round configuration. Immutable once a game is constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Length of the voting window in seconds (`VOTING_PERIOD`)
    pub voting_period_secs: u64,
    /// Minimum payment accepted with a vote (must be non-zero)
    pub min_payment: u128,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            voting_period_secs: DEFAULT_VOTING_PERIOD_SECS,
            min_payment: DEFAULT_MIN_PAYMENT,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with validation
    pub fn new(voting_period_secs: u64, min_payment: u128) -> Result<Self, GameError> {
        let config = Self {
            voting_period_secs,
            min_payment,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    ///
    /// - `OURPS_VOTING_PERIOD_SECS` (default: 60)
    /// - `OURPS_MIN_PAYMENT` (default: 1)
    ///
    /// Unparseable values fall back to the defaults; the result is validated.
    pub fn from_env() -> Result<Self, GameError> {
        let voting_period_secs = env::var("OURPS_VOTING_PERIOD_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_VOTING_PERIOD_SECS);

        let min_payment = env::var("OURPS_MIN_PAYMENT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MIN_PAYMENT);

        Self::new(voting_period_secs, min_payment)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), GameError> {
        if self.voting_period_secs == 0 {
            return Err(GameError::InvalidConfig(
                "voting_period_secs cannot be 0".to_string(),
            ));
        }

        if self.min_payment == 0 {
            return Err(GameError::InvalidConfig(
                "min_payment cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Builder-style method to set the voting period
    pub fn with_voting_period_secs(mut self, secs: u64) -> Self {
        self.voting_period_secs = secs;
        self
    }

    /// Builder-style method to set the minimum payment
    pub fn with_min_payment(mut self, amount: u128) -> Self {
        self.min_payment = amount;
        self
    }
}

/// Builder for GameConfig with validation
#[derive(Clone, Debug, Default)]
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    /// Start from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the voting period in seconds
    pub fn voting_period_secs(mut self, secs: u64) -> Self {
        self.config.voting_period_secs = secs;
        self
    }

    /// Set the minimum payment per vote
    pub fn min_payment(mut self, amount: u128) -> Self {
        self.config.min_payment = amount;
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<GameConfig, GameError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
