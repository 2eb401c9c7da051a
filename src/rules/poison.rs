//! Poison calls.
//!
//! Any seated player may accuse the player who made the most recent play
//! of completing a run of three same-color cards on one pile. The accused
//! and the pile come from `Game::last_play`; the colors come from that
//! pile's trail. Draws in between do not matter.

use super::error::{EngineError, RuleError};
use crate::core::{GameRng, Seat, Table};
use crate::zones::{Drawn, PlayTrail, Side, TRAIL_LEN};

/// How a poison call resolved. All three are successful calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoisonOutcome {
    /// Three same-color cards: the accused drew the penalty.
    Hit { accused: Seat, side: Side, drawn: Drawn },
    /// Colors changed within the top three. `drawn` is the caller's
    /// false-call penalty, empty when that rule is off.
    Miss { accused: Seat, side: Side, drawn: Drawn },
    /// Fewer than three cards on the pile. Nothing happens.
    TooFewCards { accused: Seat, side: Side },
}

impl PoisonOutcome {
    #[must_use]
    pub fn accused(&self) -> Seat {
        match self {
            PoisonOutcome::Hit { accused, .. }
            | PoisonOutcome::Miss { accused, .. }
            | PoisonOutcome::TooFewCards { accused, .. } => *accused,
        }
    }

    #[must_use]
    pub fn is_hit(&self) -> bool {
        matches!(self, PoisonOutcome::Hit { .. })
    }
}

/// True when the trail holds three cards of one color.
#[must_use]
pub fn is_poisoned(trail: &PlayTrail) -> bool {
    let recent: Vec<_> = trail.recent().collect();
    recent.len() == TRAIL_LEN && recent.windows(2).all(|w| w[0].same_color(w[1]))
}

impl Table {
    /// Resolve a poison call by `caller` against the most recent play.
    ///
    /// Fails with `NoPlaysYet` before the first play and `AlreadyCalled`
    /// once the latest play has been challenged.
    pub fn call_poison(
        &mut self,
        caller: Seat,
        rng: &mut GameRng,
    ) -> Result<PoisonOutcome, EngineError> {
        if !self.seats.contains(caller) {
            return Err(EngineError::invariant(format!("{caller} is not seated")));
        }
        let Some(last) = self.game.last_play else {
            return Err(RuleError::NoPlaysYet.into());
        };
        if last.poison_called {
            return Err(RuleError::AlreadyCalled.into());
        }

        let accused = last.seat;
        let side = last.side;
        let trail = self.game.piles.discard(side).trail().clone();
        let poison_penalty = self.config.poison_penalty;
        let false_call_penalty = self.config.false_call_penalty;

        self.transact(|table| {
            if let Some(last) = table.game.last_play.as_mut() {
                last.poison_called = true;
            }

            let outcome = if trail.len() < TRAIL_LEN {
                PoisonOutcome::TooFewCards { accused, side }
            } else if is_poisoned(&trail) {
                let drawn = table.draw_cards(accused, poison_penalty, rng)?;
                log::info!("poison on {side} pile: {accused} draws {}", drawn.len());
                PoisonOutcome::Hit {
                    accused,
                    side,
                    drawn,
                }
            } else {
                let drawn = if false_call_penalty > 0 {
                    table.draw_cards(caller, false_call_penalty, rng)?
                } else {
                    Drawn::new()
                };
                PoisonOutcome::Miss {
                    accused,
                    side,
                    drawn,
                }
            };
            Ok(outcome)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::{Game, GameId, GamePlayer, LastPlay, PlayerId, PoisonConfig};
    use crate::zones::Piles;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    fn table(left: &str, hands: &[&str]) -> Table {
        let mut game = Game::new(
            GameId(1),
            Piles::decode("2s3s4s5s6s7s", left, "9c").unwrap(),
        );
        game.turn = Some(Seat::new(0));
        let players = hands
            .iter()
            .enumerate()
            .map(|(i, hand)| {
                let mut gp = GamePlayer::new(PlayerId(i as u64 + 1), Seat::new(i as u8));
                gp.hand = hand.parse().unwrap();
                gp
            })
            .collect();
        Table::new(game, players, PoisonConfig::default())
    }

    #[test]
    fn test_is_poisoned() {
        let mut trail = PlayTrail::default();
        for code in ["8h", "9h"] {
            trail.push(card(code));
        }
        assert!(!is_poisoned(&trail));
        trail.push(card("0d"));
        assert!(is_poisoned(&trail));
        trail.push(card("jc"));
        assert!(!is_poisoned(&trail));
    }

    #[test]
    fn test_no_plays_yet() {
        let mut t = table("8h", &["", ""]);
        let err = t.call_poison(Seat::new(1), &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, EngineError::Rule(RuleError::NoPlaysYet));
    }

    #[test]
    fn test_hit_then_already_called() {
        let mut t = table("8h", &["9h0hjd", ""]);
        let mut rng = GameRng::new(1);

        t.play_card(Seat::new(0), card("9h"), Side::Left, &mut rng).unwrap();
        t.game.turn = Some(Seat::new(0));
        t.play_card(Seat::new(0), card("0h"), Side::Left, &mut rng).unwrap();

        let outcome = t.call_poison(Seat::new(1), &mut rng).unwrap();
        assert!(outcome.is_hit());
        assert_eq!(outcome.accused(), Seat::new(0));
        assert_eq!(t.seats[Seat::new(0)].hand.len(), 4);

        let err = t.call_poison(Seat::new(1), &mut rng).unwrap_err();
        assert_eq!(err, EngineError::Rule(RuleError::AlreadyCalled));
    }

    #[test]
    fn test_miss_has_no_effect_by_default() {
        let mut t = table("4c3c", &["5d", "6h"]);
        let before_center = t.game.piles.center.clone();

        t.play_card(Seat::new(0), card("5d"), Side::Left, &mut GameRng::new(1))
            .unwrap();
        let outcome = t.call_poison(Seat::new(0), &mut GameRng::new(1)).unwrap();

        assert!(matches!(outcome, PoisonOutcome::Miss { ref drawn, .. } if drawn.is_empty()));
        assert_eq!(t.game.piles.center, before_center);
        assert!(t.game.last_play.unwrap().poison_called);
    }

    #[test]
    fn test_false_call_penalty_hits_caller() {
        let mut t = table("4c3c", &["5d", "6h"]);
        t.config = PoisonConfig::new().false_call_penalty(3);

        t.play_card(Seat::new(0), card("5d"), Side::Left, &mut GameRng::new(1))
            .unwrap();
        let outcome = t.call_poison(Seat::new(1), &mut GameRng::new(1)).unwrap();

        assert!(matches!(outcome, PoisonOutcome::Miss { ref drawn, .. } if drawn.len() == 3));
        assert_eq!(t.seats[Seat::new(1)].hand.len(), 4);
        assert_eq!(t.seats[Seat::new(0)].hand.len(), 0);
    }

    #[test]
    fn test_too_few_cards() {
        let mut t = table("kd", &["xhkd", ""]);
        t.play_card(Seat::new(0), card("xh"), Side::Left, &mut GameRng::new(1))
            .unwrap();
        let outcome = t.call_poison(Seat::new(1), &mut GameRng::new(1)).unwrap();
        assert_eq!(
            outcome,
            PoisonOutcome::TooFewCards {
                accused: Seat::new(0),
                side: Side::Left
            }
        );
    }

    #[test]
    fn test_draws_do_not_hide_the_last_play() {
        let mut t = table("8h", &["9h0h", "3c"]);
        let mut rng = GameRng::new(1);
        t.play_card(Seat::new(0), card("9h"), Side::Left, &mut rng).unwrap();
        t.game.turn = Some(Seat::new(0));
        t.play_card(Seat::new(0), card("0h"), Side::Left, &mut rng).unwrap();
        t.draw_card(Seat::new(1), &mut rng).unwrap();
        t.draw_card(Seat::new(1), &mut rng).unwrap();

        let outcome = t.call_poison(Seat::new(1), &mut rng).unwrap();
        assert!(outcome.is_hit());
    }

    #[test]
    fn test_accused_comes_from_last_play_not_turn() {
        // After an Ace in a two-seat game the turn returns to the player,
        // so "turn - 1" would name the wrong seat.
        let mut t = table("kh", &["ah", "3c"]);
        t.game.piles = Piles::decode("2s3s4s5s", "qdkh", "9c").unwrap();
        t.play_card(Seat::new(0), card("ah"), Side::Left, &mut GameRng::new(1))
            .unwrap();
        assert_eq!(t.game.turn, Some(Seat::new(0)));

        let outcome = t.call_poison(Seat::new(1), &mut GameRng::new(1)).unwrap();
        assert_eq!(outcome.accused(), Seat::new(0));
        assert!(outcome.is_hit());
    }

    #[test]
    fn test_penalty_out_of_cards_is_atomic() {
        let mut t = table("8h", &["9h0h", ""]);
        let mut rng = GameRng::new(1);
        t.play_card(Seat::new(0), card("9h"), Side::Left, &mut rng).unwrap();
        t.game.turn = Some(Seat::new(0));
        t.play_card(Seat::new(0), card("0h"), Side::Left, &mut rng).unwrap();
        t.game.piles.center = Default::default();
        t.game.piles.right = Default::default();
        let before = t.clone();

        let err = t.call_poison(Seat::new(1), &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::Rule(RuleError::OutOfCards { .. })));
        assert_eq!(t, before);
        assert_eq!(
            t.game.last_play,
            Some(LastPlay {
                seat: Seat::new(0),
                side: Side::Left,
                poison_called: false
            })
        );
    }
}
