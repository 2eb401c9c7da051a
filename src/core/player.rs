//! Players, seats and per-seat storage.
//!
//! ## Seat
//!
//! A player's fixed position in turn order, assigned in join order.
//! Seat 0 is the host.
//!
//! ## SeatMap
//!
//! Per-seat data backed by a `Vec`, indexed by `Seat`. Built once when the
//! game starts and never resized afterwards.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::Hand;

/// Stable player identity, issued by the storage collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

/// A registered player, stable across games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// Seat index in turn order (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat(pub u8);

impl Seat {
    /// The host seat.
    pub const HOST: Seat = Seat(0);

    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat acting after this one.
    ///
    /// ```
    /// use poison_engine::core::Seat;
    ///
    /// assert_eq!(Seat::new(1).next(3), Seat::new(2));
    /// assert_eq!(Seat::new(2).next(3), Seat::new(0));
    /// ```
    #[must_use]
    pub fn next(self, seat_count: usize) -> Self {
        Self(((self.index() + 1) % seat_count) as u8)
    }

    /// All seats of a table with `seat_count` seats.
    pub fn all(seat_count: usize) -> impl Iterator<Item = Seat> {
        (0..seat_count as u8).map(Seat)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// A player seated in one game, holding a hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlayer {
    pub player: PlayerId,
    pub seat: Seat,
    pub hand: Hand,
}

impl GamePlayer {
    #[must_use]
    pub fn new(player: PlayerId, seat: Seat) -> Self {
        Self {
            player,
            seat,
            hand: Hand::new(),
        }
    }
}

/// Fixed-size per-seat storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Build from values already ordered by seat.
    #[must_use]
    pub fn from_ordered(data: Vec<T>) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, seat: Seat) -> Option<&T> {
        self.data.get(seat.index())
    }

    pub fn get_mut(&mut self, seat: Seat) -> Option<&mut T> {
        self.data.get_mut(seat.index())
    }

    #[must_use]
    pub fn contains(&self, seat: Seat) -> bool {
        seat.index() < self.data.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl SeatMap<GamePlayer> {
    /// Seat of the given player, if seated.
    #[must_use]
    pub fn seat_of(&self, player: PlayerId) -> Option<Seat> {
        self.data
            .iter()
            .find(|gp| gp.player == player)
            .map(|gp| gp.seat)
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}
