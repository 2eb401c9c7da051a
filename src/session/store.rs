//! Storage seam.
//!
//! The engine needs load-by-key and save-after-mutation, nothing more.
//! `GameStore` names exactly those operations; `MemoryStore` implements
//! them in process, keeping game and seat records `bincode`-encoded so
//! every save goes through the persisted layout.

use im::Vector;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{Game, GameAction, GameId, GamePlayer, Player, PlayerId};

/// Storage failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record codec failed: {0}")]
    Codec(#[from] bincode::Error),
    #[error("seat {seat} saved out of order for {game}")]
    SeatOutOfOrder { game: GameId, seat: usize },
}

/// Records the engine loads and saves.
///
/// Loads return `Ok(None)` for a missing key. Seats come back ordered by
/// seat index; the action log comes back oldest first.
pub trait GameStore {
    fn insert_player(&mut self, name: &str) -> Result<Player, StoreError>;

    fn load_player(&self, id: PlayerId) -> Result<Option<Player>, StoreError>;

    /// Reserve a fresh game id.
    fn next_game_id(&mut self) -> GameId;

    fn load_game(&self, id: GameId) -> Result<Option<Game>, StoreError>;

    fn save_game(&mut self, game: &Game) -> Result<(), StoreError>;

    fn load_seats(&self, game: GameId) -> Result<Vec<GamePlayer>, StoreError>;

    fn save_seat(&mut self, game: GameId, seat: &GamePlayer) -> Result<(), StoreError>;

    fn load_actions(&self, game: GameId) -> Result<Vector<GameAction>, StoreError>;

    fn append_action(&mut self, game: GameId, action: GameAction) -> Result<(), StoreError>;

    /// Seat record of `player` in `game`.
    fn load_seat(&self, game: GameId, player: PlayerId) -> Result<Option<GamePlayer>, StoreError> {
        Ok(self
            .load_seats(game)?
            .into_iter()
            .find(|gp| gp.player == player))
    }
}

/// In-process store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    players: FxHashMap<PlayerId, Player>,
    games: FxHashMap<GameId, Vec<u8>>,
    seats: FxHashMap<GameId, Vec<Vec<u8>>>,
    actions: FxHashMap<GameId, Vector<GameAction>>,
    next_player: u64,
    next_game: u64,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn insert_player(&mut self, name: &str) -> Result<Player, StoreError> {
        self.next_player += 1;
        let player = Player {
            id: PlayerId(self.next_player),
            name: name.to_string(),
        };
        self.players.insert(player.id, player.clone());
        Ok(player)
    }

    fn load_player(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        Ok(self.players.get(&id).cloned())
    }

    fn next_game_id(&mut self) -> GameId {
        self.next_game += 1;
        GameId(self.next_game)
    }

    fn load_game(&self, id: GameId) -> Result<Option<Game>, StoreError> {
        self.games
            .get(&id)
            .map(|bytes| bincode::deserialize(bytes))
            .transpose()
            .map_err(StoreError::from)
    }

    fn save_game(&mut self, game: &Game) -> Result<(), StoreError> {
        self.games.insert(game.id, bincode::serialize(game)?);
        Ok(())
    }

    fn load_seats(&self, game: GameId) -> Result<Vec<GamePlayer>, StoreError> {
        let Some(records) = self.seats.get(&game) else {
            return Ok(Vec::new());
        };
        records
            .iter()
            .map(|bytes| bincode::deserialize(bytes).map_err(StoreError::from))
            .collect()
    }

    fn save_seat(&mut self, game: GameId, seat: &GamePlayer) -> Result<(), StoreError> {
        let bytes = bincode::serialize(seat)?;
        let records = self.seats.entry(game).or_default();
        let index = seat.seat.index();
        match index.cmp(&records.len()) {
            std::cmp::Ordering::Less => records[index] = bytes,
            std::cmp::Ordering::Equal => records.push(bytes),
            std::cmp::Ordering::Greater => {
                return Err(StoreError::SeatOutOfOrder { game, seat: index })
            }
        }
        Ok(())
    }

    fn load_actions(&self, game: GameId) -> Result<Vector<GameAction>, StoreError> {
        Ok(self.actions.get(&game).cloned().unwrap_or_default())
    }

    fn append_action(&mut self, game: GameId, action: GameAction) -> Result<(), StoreError> {
        self.actions.entry(game).or_default().push_back(action);
        Ok(())
    }
}
