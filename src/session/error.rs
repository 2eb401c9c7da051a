//! Orchestration errors and their stable client codes.

use thiserror::Error;

use super::store::StoreError;
use crate::core::{GameId, PlayerId, Seat};
use crate::rules::{EngineError, RuleError};

/// Why a lobby request was rejected.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("game already started")]
    AlreadyStarted,
    #[error("game is full ({max} players)")]
    GameFull { max: usize },
    #[error("not a part of this game")]
    NotInGame,
    #[error("not enough players (need {min})")]
    NotEnoughPlayers { min: usize },
    #[error("you are not the host")]
    NotHost,
    #[error("not your turn ({expected} to act)")]
    BadTurn { expected: Seat, actual: Seat },
    #[error("game has not started")]
    NotStarted,
    #[error("already seated in this game")]
    AlreadyJoined,
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("unknown game {0}")]
    UnknownGame(GameId),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SessionError {
    /// Numeric code reported to clients alongside the message.
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            SessionError::AlreadyStarted => 1,
            SessionError::GameFull { .. } => 2,
            SessionError::NotInGame => 3,
            SessionError::NotEnoughPlayers { .. } => 4,
            SessionError::NotHost => 5,
            SessionError::BadTurn { .. } => 6,
            SessionError::NotStarted => 7,
            SessionError::AlreadyJoined => 8,
            SessionError::Engine(EngineError::Rule(rule)) => match rule {
                RuleError::MissingCard { .. } => 10,
                RuleError::InvalidPlay { .. } => 11,
                RuleError::OutOfCards { .. } => 12,
                RuleError::AlreadyCalled => 13,
                RuleError::NoPlaysYet => 14,
            },
            SessionError::UnknownPlayer(_) => 20,
            SessionError::UnknownGame(_) => 21,
            SessionError::Engine(_) | SessionError::Store(_) => 99,
        }
    }

    /// True when the requester can fix the problem themselves.
    /// Invariant, format and storage failures are server faults.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        match self {
            SessionError::Engine(err) => err.is_rule_violation(),
            SessionError::Store(_) => false,
            _ => true,
        }
    }
}
