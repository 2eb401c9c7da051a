//! Game configuration.
//!
//! `PoisonConfig` fixes table limits, the opening deal and penalty sizes.
//! Defaults are the standard rules; embedders can load overrides from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::DECK_SIZE;

/// Rejected configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player limits invalid (min={min}, max={max})")]
    PlayerLimits { min: usize, max: usize },
    #[error("opening deal of {needed} cards exceeds the deck")]
    DealTooLarge { needed: usize },
    #[error("malformed config: {0}")]
    Parse(String),
}

/// Rule parameters for one lobby.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoisonConfig {
    /// Players required before the host may start.
    pub min_players: usize,

    /// Seats available; joins beyond this are rejected.
    pub max_players: usize,

    /// Cards dealt to each seat at start.
    pub hand_size: usize,

    /// Cards the next seat draws when a Two is played.
    pub two_penalty: usize,

    /// Cards the accused draws on a successful poison call.
    pub poison_penalty: usize,

    /// Cards the caller draws when a poison call misses. 0 disables it.
    pub false_call_penalty: usize,

    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for PoisonConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 6,
            hand_size: 7,
            two_penalty: 2,
            poison_penalty: 3,
            false_call_penalty: 0,
            seed: None,
        }
    }
}

impl PoisonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    pub fn false_call_penalty(mut self, cards: usize) -> Self {
        self.false_call_penalty = cards;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check limits against the deck size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < 2 || self.min_players > self.max_players || self.max_players > 255 {
            return Err(ConfigError::PlayerLimits {
                min: self.min_players,
                max: self.max_players,
            });
        }

        // Two cards are always face-up on the discard piles.
        let needed = self.max_players * self.hand_size + 2;
        if needed > DECK_SIZE {
            return Err(ConfigError::DealTooLarge { needed });
        }

        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PoisonConfig::default();
        assert_eq!(config.hand_size, 7);
        assert_eq!(config.max_players, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_player_limits() {
        let config = PoisonConfig::new().players(3, 2);
        assert_eq!(
            config.validate(),
            Err(ConfigError::PlayerLimits { min: 3, max: 2 })
        );
        assert!(PoisonConfig::new().players(1, 4).validate().is_err());
    }

    #[test]
    fn test_deal_too_large() {
        let config = PoisonConfig::new().players(2, 8).hand_size(7);
        assert_eq!(config.validate(), Err(ConfigError::DealTooLarge { needed: 58 }));
    }

    #[test]
    fn test_from_json_partial() {
        let config = PoisonConfig::from_json(r#"{"hand_size": 5, "seed": 9}"#).unwrap();
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.poison_penalty, 3);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            PoisonConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            PoisonConfig::from_json(r#"{"max_players": 10}"#),
            Err(ConfigError::DealTooLarge { .. })
        ));
    }
}
