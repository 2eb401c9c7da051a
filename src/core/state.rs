//! Game records and the in-memory table the engine mutates.
//!
//! ## Game
//!
//! The persisted record of one game: its piles, whose turn it is and the
//! most recent play. Hands live on the `GamePlayer` records.
//!
//! ## Table
//!
//! A loaded game plus its seats, ordered by seat. The orchestrator builds a
//! `Table` from storage, calls one engine operation on it and, only on
//! success, saves the game and every seat back.

use serde::{Deserialize, Serialize};

use super::config::PoisonConfig;
use super::player::{GamePlayer, PlayerId, Seat, SeatMap};
use crate::cards::{Card, CardCensus};
use crate::zones::{Piles, Side};

/// Game identity, issued by the storage collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "game#{}", self.0)
    }
}

/// The most recent successful play, and whether it has been challenged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastPlay {
    pub seat: Seat,
    pub side: Side,
    pub poison_called: bool,
}

/// Persisted game record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,

    pub piles: Piles,

    /// Seat to act. `None` until the host starts the game.
    pub turn: Option<Seat>,

    pub last_play: Option<LastPlay>,
}

impl Game {
    /// A game that has not started.
    #[must_use]
    pub fn new(id: GameId, piles: Piles) -> Self {
        Self {
            id,
            piles,
            turn: None,
            last_play: None,
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.turn.is_some()
    }

    /// Turn as reported to clients: the seat index, or -1 before start.
    #[must_use]
    pub fn turn_index(&self) -> i32 {
        self.turn.map_or(-1, |seat| i32::from(seat.0))
    }
}

/// A game with its seats, ready for an engine operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub game: Game,
    pub seats: SeatMap<GamePlayer>,
    pub config: PoisonConfig,
}

impl Table {
    /// Assemble from records. `seats` must be ordered by seat index.
    #[must_use]
    pub fn new(game: Game, seats: Vec<GamePlayer>, config: PoisonConfig) -> Self {
        Self {
            game,
            seats: SeatMap::from_ordered(seats),
            config,
        }
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.seat_count()
    }

    #[must_use]
    pub fn seat_of(&self, player: PlayerId) -> Option<Seat> {
        self.seats.seat_of(player)
    }

    /// Every card in piles and hands.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.game
            .piles
            .all_cards()
            .chain(self.seats.values().flat_map(|gp| gp.hand.cards().iter().copied()))
    }

    /// Multiset of every card at the table.
    #[must_use]
    pub fn census(&self) -> CardCensus {
        let mut census = CardCensus::new();
        census.add_all(self.all_cards());
        census
    }

    /// Run `op` against a scratch copy and keep the result only on success.
    pub(crate) fn transact<T, E>(
        &mut self,
        op: impl FnOnce(&mut Table) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut scratch = self.clone();
        let value = op(&mut scratch)?;
        *self = scratch;
        Ok(value)
    }
}
