//! Turn actions: playing and drawing.
//!
//! Turn order is not checked here; the orchestrator rejects out-of-turn
//! requests before dispatch. Every operation either applies fully or leaves
//! the table untouched.

use super::error::{EngineError, RuleError};
use super::legality::{check_play, Legality};
use crate::cards::{Card, Rank};
use crate::core::{GameRng, LastPlay, Seat, Table};
use crate::zones::{draw_cards, Drawn, Side};

/// What a successful play did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    pub card: Card,
    pub side: Side,
    /// Seat that drew the Two penalty, and the cards it drew.
    pub penalized: Option<(Seat, Drawn)>,
    /// Seat passed over by an Ace.
    pub skipped: Option<Seat>,
    /// Seat to act next.
    pub next: Seat,
}

impl Table {
    /// Move `n` cards from the center pile to `seat`'s hand, reshuffling
    /// the discards when the center runs low.
    pub fn draw_cards(
        &mut self,
        seat: Seat,
        n: usize,
        rng: &mut GameRng,
    ) -> Result<Drawn, EngineError> {
        let Some(player) = self.seats.get_mut(seat) else {
            return Err(EngineError::invariant(format!("{seat} is not seated")));
        };
        Ok(draw_cards(&mut self.game.piles, &mut player.hand, n, rng)?)
    }

    /// Draw one card as a turn action. The turn does not advance.
    pub fn draw_card(&mut self, seat: Seat, rng: &mut GameRng) -> Result<Drawn, EngineError> {
        self.draw_cards(seat, 1, rng)
    }

    /// Play `card` from `seat`'s hand onto the `side` discard pile.
    ///
    /// A Two makes the next seat draw before it acts; an Ace skips the seat
    /// after the next one.
    pub fn play_card(
        &mut self,
        seat: Seat,
        card: Card,
        side: Side,
        rng: &mut GameRng,
    ) -> Result<PlayOutcome, EngineError> {
        let Some(current) = self.game.turn else {
            return Err(EngineError::invariant("play before the game started"));
        };
        let Some(player) = self.seats.get(seat) else {
            return Err(EngineError::invariant(format!("{seat} is not seated")));
        };
        let Some(top) = self.game.piles.discard(side).top() else {
            return Err(EngineError::invariant(format!("{side} pile is empty")));
        };

        if !player.hand.contains(card) {
            return Err(RuleError::MissingCard { card }.into());
        }
        if let Legality::Illegal(reason) = check_play(card, top) {
            return Err(RuleError::InvalidPlay { card, top, reason }.into());
        }

        let seat_count = self.seat_count();
        let two_penalty = self.config.two_penalty;

        self.transact(|table| {
            table.seats[seat].hand.remove_card(card);
            table.game.piles.discard_mut(side).place(card);
            table.game.last_play = Some(LastPlay {
                seat,
                side,
                poison_called: false,
            });

            let mut next = current.next(seat_count);
            let mut penalized = None;
            let mut skipped = None;
            match card.rank {
                Rank::Two => {
                    let drawn = table.draw_cards(next, two_penalty, rng)?;
                    penalized = Some((next, drawn));
                }
                Rank::Ace => {
                    skipped = Some(next);
                    next = next.next(seat_count);
                }
                _ => {}
            }
            table.game.turn = Some(next);

            log::debug!("{seat} played {card} on {side}, {next} to act");
            Ok(PlayOutcome {
                card,
                side,
                penalized,
                skipped,
                next,
            })
        })
    }
}
