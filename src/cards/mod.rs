//! Card model: cards, their textual codes, piles and the canonical deck.
//!
//! ## Key Types
//!
//! - `Card`: rank + suit, with color, face and adjacency queries
//! - `Pile`: ordered card sequence (draw pile, discard piles, hands)
//! - `CardCensus`: card multiset for conservation checks
//!
//! `encode`/`decode` convert between card sequences and the persisted
//! two-characters-per-card text.

pub mod card;
pub mod codec;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use codec::{decode, encode, FormatError};
pub use deck::{canonical_deck, CardCensus, Hand, Pile, DECK_SIZE};
