//! Piles and the draw primitive.
//!
//! ## Key Types
//!
//! - `Piles`: center draw pile plus left/right discard piles
//! - `DiscardPile`: face-up pile with its `PlayTrail`
//! - `Side`: left or right discard pile
//!
//! `draw_cards` is the only way cards leave the center pile.

pub mod draw;
pub mod piles;

pub use draw::{draw_cards, Drawn};
pub use piles::{DiscardPile, Piles, PlayTrail, Side, TRAIL_LEN};
