//! Single card values: rank, suit, color and adjacency.
//!
//! ## Codes
//!
//! Every card has a two-character code: rank then suit.
//!
//! | Rank  | Code | Value |   | Suit     | Code |
//! |-------|------|-------|---|----------|------|
//! | Ace   | `a`  | 0     |   | Spades   | `s`  |
//! | One   | `1`  | 1     |   | Hearts   | `h`  |
//! | Two   | `2`  | 2     |   | Clubs    | `c`  |
//! | ...   | ...  | ...   |   | Diamonds | `d`  |
//! | Ten   | `0`  | 10    |   |          |      |
//! | Jack  | `j`  | 11    |   |          |      |
//! | Queen | `q`  | 12    |   |          |      |
//! | King  | `k`  | 13    |   |          |      |
//! | Joker | `x`  | -     |   |          |      |
//!
//! A Joker still carries a suit, which only decides its color.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::codec::FormatError;

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Joker,
}

impl Rank {
    /// Every rank, in code-table order.
    pub const ALL: [Rank; 15] = [
        Rank::Ace,
        Rank::One,
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
        Rank::Joker,
    ];

    /// Position on the rank line, `None` for the Joker.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Rank::Ace => Some(0),
            Rank::One => Some(1),
            Rank::Two => Some(2),
            Rank::Three => Some(3),
            Rank::Four => Some(4),
            Rank::Five => Some(5),
            Rank::Six => Some(6),
            Rank::Seven => Some(7),
            Rank::Eight => Some(8),
            Rank::Nine => Some(9),
            Rank::Ten => Some(10),
            Rank::Jack => Some(11),
            Rank::Queen => Some(12),
            Rank::King => Some(13),
            Rank::Joker => None,
        }
    }

    /// Jack, Queen, King and Ace.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King | Rank::Ace)
    }

    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Rank::Ace => 'a',
            Rank::One => '1',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => '0',
            Rank::Jack => 'j',
            Rank::Queen => 'q',
            Rank::King => 'k',
            Rank::Joker => 'x',
        }
    }

    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Rank::ALL.into_iter().find(|r| r.code() == code)
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
        }
    }

    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Suit::ALL.into_iter().find(|s| s.code() == code)
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// An immutable playing card.
///
/// ```
/// use poison_engine::cards::{Card, Color, Rank, Suit};
///
/// let card: Card = "qd".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::Queen, Suit::Diamonds));
/// assert_eq!(card.color(), Color::Red);
/// assert!(card.is_face());
/// assert_eq!(card.to_string(), "qd");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Width of one encoded card.
    pub const CODE_WIDTH: usize = 2;

    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_face(self) -> bool {
        self.rank.is_face()
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self.rank, Rank::Joker)
    }

    #[must_use]
    pub fn same_color(self, other: Card) -> bool {
        self.color() == other.color()
    }

    /// Rank adjacency on the line Ace..King, with the single Ace/King wrap.
    ///
    /// Jokers are adjacent to nothing, including other Jokers.
    #[must_use]
    pub fn is_adjacent(self, other: Card) -> bool {
        let (Some(a), Some(b)) = (self.rank.value(), other.rank.value()) else {
            return false;
        };
        if a.abs_diff(b) == 1 {
            return true;
        }
        matches!(
            (self.rank, other.rank),
            (Rank::Ace, Rank::King) | (Rank::King, Rank::Ace)
        )
    }

    /// Decode a single two-character code.
    pub fn from_code(code: &str) -> Result<Self, FormatError> {
        let mut chars = code.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => match (Rank::from_code(r), Suit::from_code(s)) {
                (Some(rank), Some(suit)) => Ok(Card::new(rank, suit)),
                _ => Err(FormatError::UnknownCode {
                    code: code.to_string(),
                }),
            },
            _ => Err(FormatError::UnknownCode {
                code: code.to_string(),
            }),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.code(), self.suit.code())
    }
}

impl FromStr for Card {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_code(s)
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Card::from_code(&code).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    #[test]
    fn test_codes_roundtrip_every_rank_and_suit() {
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                let c = Card::new(rank, suit);
                assert_eq!(card(&c.to_string()), c);
            }
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert!(Card::from_code("zz").is_err());
        assert!(Card::from_code("az").is_err());
        assert!(Card::from_code("a").is_err());
        assert!(Card::from_code("ahh").is_err());
    }

    #[test]
    fn test_color() {
        assert_eq!(card("2h").color(), Color::Red);
        assert_eq!(card("2d").color(), Color::Red);
        assert_eq!(card("2s").color(), Color::Black);
        assert_eq!(card("2c").color(), Color::Black);
        assert_eq!(card("xh").color(), Color::Red);
        assert_eq!(card("xs").color(), Color::Black);
    }

    #[test]
    fn test_face() {
        for code in ["js", "qh", "kc", "ad"] {
            assert!(card(code).is_face(), "{code}");
        }
        for code in ["1s", "2h", "0c", "xd"] {
            assert!(!card(code).is_face(), "{code}");
        }
    }

    #[test]
    fn test_adjacency() {
        assert!(card("2h").is_adjacent(card("3s")));
        assert!(card("0h").is_adjacent(card("js")));
        assert!(card("ah").is_adjacent(card("1s")));
        assert!(card("ah").is_adjacent(card("kd")));
        assert!(card("kd").is_adjacent(card("ah")));

        assert!(!card("ah").is_adjacent(card("2d")));
        assert!(!card("8h").is_adjacent(card("8d")));
        assert!(!card("qh").is_adjacent(card("1d")));
    }

    #[test]
    fn test_joker_adjacent_to_nothing() {
        let joker = card("xh");
        for rank in Rank::ALL {
            let other = Card::new(rank, Suit::Spades);
            assert!(!joker.is_adjacent(other));
            assert!(!other.is_adjacent(joker));
        }
    }

    #[test]
    fn test_card_serde() {
        let json = serde_json::to_string(&card("0c")).unwrap();
        assert_eq!(json, "\"0c\"");
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card("0c"));
        assert!(serde_json::from_str::<Card>("\"yy\"").is_err());
    }
}
