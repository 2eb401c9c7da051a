//! The three piles of a game.
//!
//! - `center`: face-down draw pile
//! - `left` / `right`: face-up discard piles, top card first
//!
//! Each discard pile carries a `PlayTrail`, a three-slot ring buffer of the
//! most recent cards placed on it. Poison calls read the trail instead of
//! replaying the action log.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cards::{Card, Pile};

/// Which discard pile a card targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(format!("unknown side {other:?}")),
        }
    }
}

/// Slots in a play trail.
pub const TRAIL_LEN: usize = 3;

/// Ring buffer of the last three cards placed face-up on a pile.
///
/// ```
/// use poison_engine::zones::PlayTrail;
///
/// let mut trail = PlayTrail::default();
/// for code in ["2h", "3h", "4s", "5d"] {
///     trail.push(code.parse().unwrap());
/// }
/// let recent: Vec<String> = trail.recent().map(|c| c.to_string()).collect();
/// assert_eq!(recent, ["5d", "4s", "3h"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayTrail {
    slots: [Option<Card>; TRAIL_LEN],
    /// Slot holding the most recent card.
    head: usize,
}

impl PlayTrail {
    /// Trail holding a single card.
    #[must_use]
    pub fn starting_with(card: Card) -> Self {
        let mut trail = Self::default();
        trail.push(card);
        trail
    }

    /// Record a newly placed card, evicting the oldest when full.
    pub fn push(&mut self, card: Card) {
        self.head = (self.head + 1) % TRAIL_LEN;
        self.slots[self.head] = Some(card);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Cards newest first.
    pub fn recent(&self) -> impl Iterator<Item = Card> + '_ {
        (0..TRAIL_LEN).map_while(move |age| self.slots[(self.head + TRAIL_LEN - age) % TRAIL_LEN])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recent().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A face-up discard pile and its trail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    cards: Pile,
    trail: PlayTrail,
}

impl DiscardPile {
    /// Build from persisted cards, seeding the trail from the top three.
    #[must_use]
    pub fn new(cards: Pile) -> Self {
        let mut trail = PlayTrail::default();
        for &card in cards.cards().iter().take(TRAIL_LEN).rev() {
            trail.push(card);
        }
        Self { cards, trail }
    }

    #[must_use]
    pub fn cards(&self) -> &Pile {
        &self.cards
    }

    #[must_use]
    pub fn trail(&self) -> &PlayTrail {
        &self.trail
    }

    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.top()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Place a card face-up on top.
    pub fn place(&mut self, card: Card) {
        self.cards.push_top(card);
        self.trail.push(card);
    }

    /// Cards a reshuffle may reclaim (everything under the top).
    #[must_use]
    pub fn reclaimable(&self) -> &[Card] {
        self.cards.below_top()
    }

    /// Drop everything under the top card.
    pub fn collapse_to_top(&mut self) {
        match self.cards.top() {
            Some(top) => {
                self.cards = Pile::from_cards(vec![top]);
                self.trail = PlayTrail::starting_with(top);
            }
            None => self.trail.clear(),
        }
    }
}

/// Draw pile plus both discard piles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    pub center: Pile,
    pub left: DiscardPile,
    pub right: DiscardPile,
}

impl Piles {
    #[must_use]
    pub fn new(center: Pile, left: Pile, right: Pile) -> Self {
        Self {
            center,
            left: DiscardPile::new(left),
            right: DiscardPile::new(right),
        }
    }

    /// Decode all three piles from their persisted text.
    pub fn decode(center: &str, left: &str, right: &str) -> Result<Self, crate::cards::FormatError> {
        Ok(Self::new(center.parse()?, left.parse()?, right.parse()?))
    }

    #[must_use]
    pub fn discard(&self, side: Side) -> &DiscardPile {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn discard_mut(&mut self, side: Side) -> &mut DiscardPile {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Every card on the table, hands excluded.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.center
            .cards()
            .iter()
            .chain(self.left.cards().cards())
            .chain(self.right.cards().cards())
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    fn trail_codes(trail: &PlayTrail) -> Vec<String> {
        trail.recent().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_trail_fills_then_rotates() {
        let mut trail = PlayTrail::default();
        assert!(trail.is_empty());

        trail.push(card("2h"));
        trail.push(card("3h"));
        assert_eq!(trail_codes(&trail), ["3h", "2h"]);

        trail.push(card("4h"));
        trail.push(card("5s"));
        assert_eq!(trail_codes(&trail), ["5s", "4h", "3h"]);
        assert_eq!(trail.len(), 3);
    }

    #[test]
    fn test_discard_pile_seeds_trail_from_top() {
        let pile = DiscardPile::new("5d4c3c2h".parse().unwrap());
        assert_eq!(trail_codes(pile.trail()), ["5d", "4c", "3c"]);
    }

    #[test]
    fn test_place_updates_trail() {
        let mut pile = DiscardPile::new("8h".parse().unwrap());
        pile.place(card("9h"));
        assert_eq!(pile.cards().encode(), "9h8h");
        assert_eq!(trail_codes(pile.trail()), ["9h", "8h"]);
    }

    #[test]
    fn test_collapse_to_top() {
        let mut pile = DiscardPile::new("2d5c".parse().unwrap());
        assert_eq!(Pile::from_cards(pile.reclaimable().to_vec()).encode(), "5c");

        pile.collapse_to_top();
        assert_eq!(pile.cards().encode(), "2d");
        assert_eq!(trail_codes(pile.trail()), ["2d"]);
    }

    #[test]
    fn test_collapse_empty_pile() {
        let mut pile = DiscardPile::default();
        pile.collapse_to_top();
        assert!(pile.is_empty());
        assert!(pile.trail().is_empty());
    }

    #[test]
    fn test_side_parse_and_serde() {
        assert_eq!("left".parse::<Side>(), Ok(Side::Left));
        assert!("up".parse::<Side>().is_err());
        assert_eq!(serde_json::to_string(&Side::Right).unwrap(), "\"right\"");
    }

    #[test]
    fn test_piles_decode() {
        let piles = Piles::decode("ahqcxh", "2d5c", "7skh").unwrap();
        assert_eq!(piles.discard(Side::Left).top(), Some(card("2d")));
        assert_eq!(piles.discard(Side::Right).top(), Some(card("7s")));
        assert_eq!(piles.all_cards().count(), 7);
        assert!(Piles::decode("a", "", "").is_err());
    }
}
