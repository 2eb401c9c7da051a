//! Game rules: play legality, turn actions and poison calls.
//!
//! The three turn-level operations are methods on `Table`:
//!
//! - `play_card`: legality check, Two and Ace effects, turn advance
//! - `draw_card`: one card, turn unchanged
//! - `call_poison`: accusation against the most recent play
//!
//! `check_play` is the pure legality table behind `play_card`.

pub mod engine;
pub mod error;
pub mod legality;
pub mod poison;

pub use engine::PlayOutcome;
pub use error::{EngineError, RuleError};
pub use legality::{check_play, IllegalReason, Legality};
pub use poison::{is_poisoned, PoisonOutcome};
