//! Action requests and the append-only action log.
//!
//! An `ActionRequest` is what a seated player asks to do. Once the engine
//! accepts it, the orchestrator appends a `GameAction` to the game's log.
//! The log is history for clients and replays; rule checks never read it.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, Seat};
use crate::cards::Card;
use crate::zones::Side;

/// Kind of logged action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    CardPlayed,
    CardDrawn,
    PoisonCalled,
}

impl ActionKind {
    /// Whether this action must wait for the actor's turn.
    #[must_use]
    pub const fn requires_turn(self) -> bool {
        !matches!(self, ActionKind::PoisonCalled)
    }
}

/// A player's requested move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionRequest {
    PlayCard { card: Card, side: Side },
    DrawCard,
    CallPoison,
}

impl ActionRequest {
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            ActionRequest::PlayCard { .. } => ActionKind::CardPlayed,
            ActionRequest::DrawCard => ActionKind::CardDrawn,
            ActionRequest::CallPoison => ActionKind::PoisonCalled,
        }
    }
}

/// One entry of a game's action log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAction {
    /// Log length at the time of append.
    pub sequence: u32,

    pub kind: ActionKind,

    pub player: PlayerId,

    pub seat: Seat,

    /// The accepted request, carrying `{card, side}` for plays.
    pub params: ActionRequest,
}

impl GameAction {
    #[must_use]
    pub fn new(sequence: u32, player: PlayerId, seat: Seat, params: ActionRequest) -> Self {
        Self {
            sequence,
            kind: params.kind(),
            player,
            seat,
            params,
        }
    }
}
