//! Engine errors.
//!
//! `RuleError` is an expected, user-facing rejection. `EngineError::Invariant`
//! means the loaded state or the call sequence is inconsistent, which is a bug
//! upstream rather than a player mistake. Neither mutates state.

use thiserror::Error;

use super::legality::IllegalReason;
use crate::cards::{Card, FormatError};

/// A move the rules reject.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("card {card} is not in hand")]
    MissingCard { card: Card },
    #[error("cannot play {card} on {top}: {reason}")]
    InvalidPlay {
        card: Card,
        top: Card,
        reason: IllegalReason,
    },
    #[error("out of cards (requested {requested}, available {available})")]
    OutOfCards { requested: usize, available: usize },
    #[error("poison already called on this play")]
    AlreadyCalled,
    #[error("no cards have been played yet")]
    NoPlaysYet,
}

/// Any failure of an engine operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Rule(#[from] RuleError),
    #[error("invariant violated: {0}")]
    Invariant(String),
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl EngineError {
    /// True for ordinary rule rejections the player can correct.
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, EngineError::Rule(_))
    }

    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        EngineError::Invariant(msg.into())
    }
}
