//! Game lifecycle and action dispatch.
//!
//! `Lobby` sits between callers and the engine. Each request loads the
//! records it needs, checks membership and turn order, runs one engine
//! operation on a `Table` and, only if that succeeds, saves the game, every
//! seat and a new action log entry. `&mut self` keeps mutations of one
//! lobby serialized.

use crate::cards::{canonical_deck, Pile};
use crate::core::{
    ActionRequest, ConfigError, Game, GameAction, GameId, GamePlayer, GameRng, GameRngState,
    GameSummary, Player, PlayerId, PoisonConfig, Seat, Table,
};
use crate::rules::{EngineError, PlayOutcome, PoisonOutcome};
use crate::zones::{Drawn, Piles};

use super::error::SessionError;
use super::store::GameStore;

/// Engine result of an accepted action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionEffect {
    Played(PlayOutcome),
    Drew(Drawn),
    Poison(PoisonOutcome),
}

/// Reply to `perform_action`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionResult {
    pub action: GameAction,
    pub effect: ActionEffect,
    /// The actor's view after the action.
    pub summary: GameSummary,
}

/// Orchestrator over a `GameStore`.
pub struct Lobby<S: GameStore> {
    store: S,
    config: PoisonConfig,
    rng: GameRng,
}

impl<S: GameStore> Lobby<S> {
    /// Validate `config` and seed the shuffler from it.
    pub fn new(store: S, config: PoisonConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self { store, config, rng })
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Direct store access, for embedders seeding or repairing records.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub fn config(&self) -> &PoisonConfig {
        &self.config
    }

    /// Shuffler position, for embedders that persist it across restarts.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    pub fn create_player(&mut self, name: &str) -> Result<Player, SessionError> {
        let player = self.store.insert_player(name)?;
        log::info!("registered {} as {:?}", player.id, player.name);
        Ok(player)
    }

    /// Open a new game with `host` in seat 0. Two cards go face-up on the
    /// discard piles; the rest form the center pile.
    pub fn create_game(&mut self, host: PlayerId) -> Result<GameSummary, SessionError> {
        self.require_player(host)?;

        let mut deck = canonical_deck();
        self.rng.shuffle(&mut deck);
        let center = deck.split_off(2);
        let piles = Piles::new(
            Pile::from_cards(center),
            Pile::from_cards(vec![deck[0]]),
            Pile::from_cards(vec![deck[1]]),
        );

        let game = Game::new(self.store.next_game_id(), piles);
        let host_seat = GamePlayer::new(host, Seat::HOST);
        self.store.save_game(&game)?;
        self.store.save_seat(game.id, &host_seat)?;

        log::info!("{host} created {}", game.id);
        Ok(GameSummary::new(&game, &host_seat))
    }

    /// Take the next free seat.
    pub fn join_game(&mut self, game_id: GameId, player: PlayerId) -> Result<GameSummary, SessionError> {
        self.require_player(player)?;
        let table = self.load_table(game_id)?;

        if table.game.is_started() {
            return Err(SessionError::AlreadyStarted);
        }
        if table.seat_of(player).is_some() {
            return Err(SessionError::AlreadyJoined);
        }
        if table.seat_count() >= self.config.max_players {
            return Err(SessionError::GameFull {
                max: self.config.max_players,
            });
        }

        let seated = GamePlayer::new(player, Seat::new(table.seat_count() as u8));
        self.store.save_seat(game_id, &seated)?;

        log::info!("{player} joined {game_id} at {}", seated.seat);
        Ok(GameSummary::new(&table.game, &seated))
    }

    /// Deal every seat a hand and give seat 0 the first turn. Host only.
    pub fn start_game(&mut self, game_id: GameId, player: PlayerId) -> Result<GameSummary, SessionError> {
        let mut table = self.load_table(game_id)?;

        if table.game.is_started() {
            return Err(SessionError::AlreadyStarted);
        }
        let seat = table.seat_of(player).ok_or(SessionError::NotInGame)?;
        if seat != Seat::HOST {
            return Err(SessionError::NotHost);
        }
        if table.seat_count() < self.config.min_players {
            return Err(SessionError::NotEnoughPlayers {
                min: self.config.min_players,
            });
        }

        for seat in Seat::all(table.seat_count()) {
            table.draw_cards(seat, self.config.hand_size, &mut self.rng)?;
        }
        table.game.turn = Some(Seat::HOST);
        self.save_table(&table)?;

        log::info!("{game_id} started with {} players", table.seat_count());
        self.summary(&table, player)
    }

    /// Validate and apply one player action.
    ///
    /// Plays and draws must come from the seat whose turn it is; poison
    /// calls are accepted from any seat.
    pub fn perform_action(
        &mut self,
        game_id: GameId,
        player: PlayerId,
        request: ActionRequest,
    ) -> Result<ActionResult, SessionError> {
        let mut table = self.load_table(game_id)?;

        let Some(turn) = table.game.turn else {
            return Err(SessionError::NotStarted);
        };
        let seat = table.seat_of(player).ok_or(SessionError::NotInGame)?;
        if request.kind().requires_turn() && seat != turn {
            return Err(SessionError::BadTurn {
                expected: turn,
                actual: seat,
            });
        }

        let effect = match Self::dispatch(&mut table, seat, request, &mut self.rng) {
            Ok(effect) => effect,
            Err(err) => {
                log::warn!("{game_id}: rejected {:?} from {seat}: {err}", request.kind());
                return Err(err.into());
            }
        };

        self.save_table(&table)?;
        let sequence = self.store.load_actions(game_id)?.len() as u32;
        let action = GameAction::new(sequence, player, seat, request);
        self.store.append_action(game_id, action.clone())?;

        Ok(ActionResult {
            action,
            effect,
            summary: self.summary(&table, player)?,
        })
    }

    /// Current view of `game_id` for `player`.
    pub fn poll_game(&self, game_id: GameId, player: PlayerId) -> Result<GameSummary, SessionError> {
        let table = self.load_table(game_id)?;
        self.summary(&table, player)
    }

    /// Load a game and its seats into a `Table`.
    pub fn load_table(&self, game_id: GameId) -> Result<Table, SessionError> {
        let game = self
            .store
            .load_game(game_id)?
            .ok_or(SessionError::UnknownGame(game_id))?;
        let seats = self.store.load_seats(game_id)?;

        if let Some((index, gp)) = seats
            .iter()
            .enumerate()
            .find(|(index, gp)| gp.seat.index() != *index)
        {
            return Err(EngineError::Invariant(format!(
                "{game_id}: record for {} stored at position {index}",
                gp.seat
            ))
            .into());
        }

        Ok(Table::new(game, seats, self.config.clone()))
    }

    fn dispatch(
        table: &mut Table,
        seat: Seat,
        request: ActionRequest,
        rng: &mut GameRng,
    ) -> Result<ActionEffect, EngineError> {
        Ok(match request {
            ActionRequest::PlayCard { card, side } => {
                ActionEffect::Played(table.play_card(seat, card, side, rng)?)
            }
            ActionRequest::DrawCard => ActionEffect::Drew(table.draw_card(seat, rng)?),
            ActionRequest::CallPoison => ActionEffect::Poison(table.call_poison(seat, rng)?),
        })
    }

    fn save_table(&mut self, table: &Table) -> Result<(), SessionError> {
        self.store.save_game(&table.game)?;
        for gp in table.seats.values() {
            self.store.save_seat(table.game.id, gp)?;
        }
        Ok(())
    }

    fn summary(&self, table: &Table, player: PlayerId) -> Result<GameSummary, SessionError> {
        table
            .summarize_for_player(player)
            .ok_or(SessionError::NotInGame)
    }

    fn require_player(&self, player: PlayerId) -> Result<Player, SessionError> {
        self.store
            .load_player(player)?
            .ok_or(SessionError::UnknownPlayer(player))
    }
}
