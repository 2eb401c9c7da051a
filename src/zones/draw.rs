//! Drawing from the center pile, with reshuffle on exhaustion.
//!
//! When the center pile holds `n` cards or fewer, everything under the two
//! discard tops is pooled with it and shuffled into a new center pile
//! before the draw. The operation is all-or-nothing: if even the pool is
//! short, nothing moves.

use smallvec::SmallVec;

use super::piles::Piles;
use crate::cards::{Card, Hand};
use crate::core::GameRng;
use crate::rules::RuleError;

/// Cards moved by one draw. Rule draws are 1-3 cards.
pub type Drawn = SmallVec<[Card; 3]>;

/// Move the front `n` center cards to the back of `hand`.
///
/// Reshuffles first when `center.len() <= n`. Fails with `OutOfCards` and
/// leaves every pile and the hand untouched if fewer than `n` cards exist
/// outside the two discard tops.
pub fn draw_cards(
    piles: &mut Piles,
    hand: &mut Hand,
    n: usize,
    rng: &mut GameRng,
) -> Result<Drawn, RuleError> {
    if piles.center.len() <= n {
        let available =
            piles.center.len() + piles.left.reclaimable().len() + piles.right.reclaimable().len();
        if available < n {
            return Err(RuleError::OutOfCards {
                requested: n,
                available,
            });
        }
        reshuffle(piles, rng);
    }

    let drawn: Drawn = piles.center.take_front(n).into_iter().collect();
    hand.extend_back(drawn.iter().copied());
    log::debug!(
        "drew {} card(s), {} left in center",
        drawn.len(),
        piles.center.len()
    );
    Ok(drawn)
}

/// Pool center and both discard piles under their tops into a fresh,
/// shuffled center pile.
fn reshuffle(piles: &mut Piles, rng: &mut GameRng) {
    let mut pool: Vec<Card> = piles.center.take_front(piles.center.len());
    pool.extend_from_slice(piles.left.reclaimable());
    pool.extend_from_slice(piles.right.reclaimable());
    rng.shuffle(&mut pool);

    piles.left.collapse_to_top();
    piles.right.collapse_to_top();
    log::debug!("reshuffled {} card(s) into center", pool.len());
    piles.center = pool.into();
}
