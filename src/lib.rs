//! # poison-engine
//!
//! Server-authoritative rules engine for Poison, a shedding card game
//! played on a shared center draw pile and two face-up discard piles.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every engine operation either applies in
//!    full or leaves the table untouched. Rejections are typed errors.
//!
//! 2. **Seats, not counts**: turn order walks `Seat` values modulo the
//!    number of seated players. Nothing assumes two players.
//!
//! 3. **Compact records**: piles and hands persist as two-character card
//!    codes (`"ahqcxh"`), so stored games stay readable.
//!
//! ## Modules
//!
//! - `cards`: cards, codes, piles, the canonical deck
//! - `zones`: center and discard piles, play trails, drawing
//! - `core`: identities, seats, game records, actions, config, RNG
//! - `rules`: legality, plays, draws, poison calls
//! - `session`: lobby orchestration over a `GameStore`

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{Card, Color, FormatError, Hand, Pile, Rank, Suit};

pub use crate::core::{
    ActionKind, ActionRequest, ConfigError, Game, GameAction, GameId, GamePlayer, GameRng,
    GameSummary, Player, PlayerId, PoisonConfig, Seat, Table,
};

pub use crate::zones::{Drawn, Piles, PlayTrail, Side};

pub use crate::rules::{
    check_play, EngineError, IllegalReason, Legality, PlayOutcome, PoisonOutcome, RuleError,
};

pub use crate::session::{
    ActionEffect, ActionResult, GameStore, Lobby, MemoryStore, SessionError, StoreError,
};
