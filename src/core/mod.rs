//! Core types: identities, seats, game records, actions, config, RNG.
//!
//! These are the values the orchestrator loads from and saves to storage.
//! Rule logic lives in `rules`; pile mechanics in `zones`.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;
pub mod summary;

pub use action::{ActionKind, ActionRequest, GameAction};
pub use config::{ConfigError, PoisonConfig};
pub use player::{GamePlayer, Player, PlayerId, Seat, SeatMap};
pub use rng::{GameRng, GameRngState};
pub use state::{Game, GameId, LastPlay, Table};
pub use summary::GameSummary;
