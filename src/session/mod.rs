//! Session layer: players, game lifecycle and action dispatch.
//!
//! ## Key Types
//!
//! - `Lobby`: create, join, start, act, poll
//! - `GameStore`: storage seam, with `MemoryStore` for in-process use
//! - `SessionError`: rejections carrying stable numeric codes

pub mod error;
pub mod lobby;
pub mod store;

pub use error::SessionError;
pub use lobby::{ActionEffect, ActionResult, Lobby};
pub use store::{GameStore, MemoryStore, StoreError};
