//! Compact textual encoding of card sequences.
//!
//! A sequence is the concatenation of its cards' two-character codes,
//! leftmost first. This is the persisted layout of every pile and hand.

use thiserror::Error;

use super::card::Card;

/// Malformed card data. Indicates corruption; never retried.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("encoded card sequence has odd length {len}")]
    OddLength { len: usize },
    #[error("unknown card code {code:?}")]
    UnknownCode { code: String },
}

/// Encode cards front-to-back.
///
/// ```
/// use poison_engine::cards::{decode, encode};
///
/// let cards = decode("2d5c").unwrap();
/// assert_eq!(encode(&cards), "2d5c");
/// ```
#[must_use]
pub fn encode(cards: &[Card]) -> String {
    let mut out = String::with_capacity(cards.len() * Card::CODE_WIDTH);
    for card in cards {
        out.push(card.rank.code());
        out.push(card.suit.code());
    }
    out
}

/// Decode a concatenation of two-character codes.
pub fn decode(text: &str) -> Result<Vec<Card>, FormatError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() % Card::CODE_WIDTH != 0 {
        return Err(FormatError::OddLength { len: chars.len() });
    }

    chars
        .chunks(Card::CODE_WIDTH)
        .map(|pair| pair.iter().collect::<String>())
        .map(|code| Card::from_code(&code))
        .collect()
}
