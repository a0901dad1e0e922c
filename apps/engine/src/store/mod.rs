//! State-store collaborator contract.
//!
//! The engine assumes the implementation serializes writes per room
//! (at-most-one-writer-at-a-time); two actions racing on a stale copy could
//! otherwise both pass validation and double-spend. The core performs no
//! locking of its own.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::state::{ActionLogEntry, GameState};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("room unavailable: {0}")]
    Unavailable(String),

    #[error("state serialization failed: {0}")]
    Serialization(String),
}

/// Persistence seam for room state and its audit log.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load the room's current state, creating a default initial state
    /// (round 1, setup phase, no players) if none exists.
    async fn load_state(&self, room_id: &str) -> Result<GameState, StoreError>;

    /// Durably persist the whole state document.
    async fn save_state(&self, room_id: &str, state: &GameState) -> Result<(), StoreError>;

    /// Append one entry to the room's audit history.
    async fn append_log(&self, room_id: &str, entry: ActionLogEntry) -> Result<(), StoreError>;
}

pub use memory::MemoryStore;
