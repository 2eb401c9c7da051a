//! Play legality as a single decision table.
//!
//! | Top \ Card  | Number           | Face             | Joker            |
//! |-------------|------------------|------------------|------------------|
//! | Number      | adjacent         | adjacent ∨ color | never            |
//! | Face        | adjacent ∨ color | adjacent ∨ color | color            |
//! | Joker       | never            | color            | never            |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;

/// Why a play is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IllegalReason {
    /// Only face cards go on a Joker.
    JokerRequiresFace,
    /// A Joker only goes on a face card.
    JokerOnlyOnFace,
    /// Not adjacent, a face card is involved, and colors differ.
    ColorMismatch,
    /// Two number cards that are not rank-adjacent.
    NotAdjacent,
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IllegalReason::JokerRequiresFace => "only a face card may be played on a joker",
            IllegalReason::JokerOnlyOnFace => "a joker may only be played on a face card",
            IllegalReason::ColorMismatch => "colors differ and ranks are not adjacent",
            IllegalReason::NotAdjacent => "number cards must be rank-adjacent",
        })
    }
}

/// Outcome of `check_play`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Legality {
    Legal,
    Illegal(IllegalReason),
}

impl Legality {
    #[must_use]
    pub fn is_legal(self) -> bool {
        matches!(self, Legality::Legal)
    }
}

/// Decide whether `card` may be played on `top`.
#[must_use]
pub fn check_play(card: Card, top: Card) -> Legality {
    if top.is_joker() && !card.is_face() {
        return Legality::Illegal(IllegalReason::JokerRequiresFace);
    }
    if card.is_joker() && !top.is_face() {
        return Legality::Illegal(IllegalReason::JokerOnlyOnFace);
    }
    if card.is_adjacent(top) {
        return Legality::Legal;
    }
    if card.is_face() || top.is_face() {
        if card.same_color(top) {
            Legality::Legal
        } else {
            Legality::Illegal(IllegalReason::ColorMismatch)
        }
    } else {
        Legality::Illegal(IllegalReason::NotAdjacent)
    }
}
