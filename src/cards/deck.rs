//! Ordered card sequences and the canonical deck.
//!
//! `Pile` backs the draw pile, both discard piles and every hand. Index 0
//! is the front: the next card drawn, or the playable top of a discard pile.

use rustc_hash::FxHashMap;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::card::{Card, Rank, Suit};
use super::codec::{decode, encode, FormatError};

/// Number of cards in the canonical deck.
pub const DECK_SIZE: usize = 54;

/// Ranks dealt in the canonical deck (One is decodable but never dealt).
const DEALT_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// The fixed 54-card composition every game starts from, unshuffled.
///
/// 13 ranks in each suit plus a red Joker (`xh`) and a black Joker (`xs`).
#[must_use]
pub fn canonical_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in DEALT_RANKS {
        for suit in Suit::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck.push(Card::new(Rank::Joker, Suit::Hearts));
    deck.push(Card::new(Rank::Joker, Suit::Spades));
    deck
}

/// Ordered sequence of cards, front first.
///
/// Serializes as its encoded string so the persisted layout stays the
/// compact two-characters-per-card form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pile {
    cards: Vec<Card>,
}

/// A player's hand. Order is kept but carries no meaning.
pub type Hand = Pile;

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Front card (top of a discard pile).
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Place a card on the front.
    pub fn push_top(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Append cards at the back, keeping their order.
    pub fn extend_back(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove and return the front `n` cards. Returns fewer if short.
    pub fn take_front(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Everything below the top card.
    #[must_use]
    pub fn below_top(&self) -> &[Card] {
        self.cards.get(1..).unwrap_or(&[])
    }

    /// Position of the first card equal to `card`.
    #[must_use]
    pub fn position(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.position(card).is_some()
    }

    /// Remove the first card equal to `card`. Returns whether one was found.
    pub fn remove_card(&mut self, card: Card) -> bool {
        match self.position(card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn encode(&self) -> String {
        encode(&self.cards)
    }

    pub fn decode(text: &str) -> Result<Self, FormatError> {
        decode(text).map(Self::from_cards)
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Pile {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pile::decode(s)
    }
}

impl Serialize for Pile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Pile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Pile::decode(&text).map_err(D::Error::custom)
    }
}

/// Multiset of cards, used to check conservation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardCensus {
    counts: FxHashMap<Card, usize>,
}

impl CardCensus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Census of the canonical deck.
    #[must_use]
    pub fn canonical() -> Self {
        let mut census = Self::new();
        census.add_all(canonical_deck());
        census
    }

    pub fn add_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            *self.counts.entry(card).or_insert(0) += 1;
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.counts.get(&card).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pile(text: &str) -> Pile {
        text.parse().unwrap()
    }

    #[test]
    fn test_canonical_deck() {
        let deck = canonical_deck();
        assert_eq!(deck.len(), DECK_SIZE);

        let census = CardCensus::canonical();
        assert_eq!(census.total(), DECK_SIZE);
        for card in &deck {
            assert_eq!(census.count(*card), 1, "{card} duplicated");
        }
        assert!(deck.iter().all(|c| c.rank != Rank::One));
        assert_eq!(deck.iter().filter(|c| c.is_joker()).count(), 2);
    }

    #[test]
    fn test_pile_top_and_push() {
        let mut p = pile("2d5c");
        assert_eq!(p.top(), Some("2d".parse().unwrap()));
        p.push_top("3h".parse().unwrap());
        assert_eq!(p.encode(), "3h2d5c");
        assert_eq!(p.below_top(), pile("2d5c").cards());
    }

    #[test]
    fn test_take_front() {
        let mut p = pile("ahqcxh");
        let taken = p.take_front(2);
        assert_eq!(Pile::from_cards(taken).encode(), "ahqc");
        assert_eq!(p.encode(), "xh");
        assert_eq!(p.take_front(5).len(), 1);
        assert!(p.is_empty());
    }

    #[test]
    fn test_remove_card_exact_match() {
        let mut hand = pile("8h8dxh");
        assert!(!hand.remove_card("8s".parse().unwrap()));
        assert!(hand.remove_card("8d".parse().unwrap()));
        assert_eq!(hand.encode(), "8hxh");
    }

    #[test]
    fn test_empty_pile_below_top() {
        assert!(Pile::new().below_top().is_empty());
        assert_eq!(Pile::new().top(), None);
    }

    #[test]
    fn test_pile_serializes_as_code_string() {
        let p = pile("7skh");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"7skh\"");
        let back: Pile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<Pile>("\"7sk\"").is_err());
    }
}
