//! Per-player view of a game.

use serde::Serialize;

use super::player::{GamePlayer, PlayerId, Seat};
use super::state::{Game, GameId, Table};
use crate::cards::{Card, Hand};

/// What one player may see: their own hand, the discard tops and pile sizes.
/// Other hands are never included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub game_id: GameId,
    /// Seat to act, -1 before start.
    pub turn: i32,
    pub player: PlayerId,
    pub seat: Seat,
    pub hand: Hand,
    pub left_card: Option<Card>,
    pub right_card: Option<Card>,
    pub center_count: usize,
    pub left_count: usize,
    pub right_count: usize,
}

impl GameSummary {
    #[must_use]
    pub fn new(game: &Game, viewer: &GamePlayer) -> Self {
        let piles = &game.piles;
        Self {
            game_id: game.id,
            turn: game.turn_index(),
            player: viewer.player,
            seat: viewer.seat,
            hand: viewer.hand.clone(),
            left_card: piles.left.top(),
            right_card: piles.right.top(),
            center_count: piles.center.len(),
            left_count: piles.left.len(),
            right_count: piles.right.len(),
        }
    }
}

impl Table {
    /// Summary for `player`, or `None` if they hold no seat here.
    #[must_use]
    pub fn summarize_for_player(&self, player: PlayerId) -> Option<GameSummary> {
        let seat = self.seat_of(player)?;
        self.seats
            .get(seat)
            .map(|viewer| GameSummary::new(&self.game, viewer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PoisonConfig;
    use crate::zones::Piles;

    #[test]
    fn test_summary_shows_only_own_hand() {
        let piles = Piles::decode("ahqcxh", "2d5c", "7skh").unwrap();
        let mut game = Game::new(GameId(9), piles);
        game.turn = Some(Seat::new(1));

        let mut p0 = GamePlayer::new(PlayerId(1), Seat::new(0));
        p0.hand = "3h4h".parse().unwrap();
        let mut p1 = GamePlayer::new(PlayerId(2), Seat::new(1));
        p1.hand = "9c".parse().unwrap();
        let table = Table::new(game, vec![p0, p1], PoisonConfig::default());

        let summary = table.summarize_for_player(PlayerId(2)).unwrap();
        assert_eq!(summary.turn, 1);
        assert_eq!(summary.seat, Seat::new(1));
        assert_eq!(summary.hand.encode(), "9c");
        assert_eq!(summary.left_card, Some("2d".parse().unwrap()));
        assert_eq!(summary.right_card, Some("7s".parse().unwrap()));
        assert_eq!(
            (summary.center_count, summary.left_count, summary.right_count),
            (3, 2, 2)
        );

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"hand\":\"9c\""));
        assert!(!json.contains("3h4h"));

        assert!(table.summarize_for_player(PlayerId(3)).is_none());
    }
}
