//! In-memory state store, used by tests and as the default collaborator.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::state::{ActionLogEntry, GameState};
use crate::store::{StateStore, StoreError};

/// Process-local store keyed by room id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    default_seed: i64,
    rooms: DashMap<String, GameState>,
    logs: DashMap<String, Vec<ActionLogEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Fixed seed for deterministic tests.
    pub fn with_seed(default_seed: i64) -> Self {
        Self {
            default_seed,
            rooms: DashMap::new(),
            logs: DashMap::new(),
        }
    }

    /// Snapshot of a room's audit log.
    pub fn log_entries(&self, room_id: &str) -> Vec<ActionLogEntry> {
        self.logs
            .get(room_id)
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn load_state(&self, room_id: &str) -> Result<GameState, StoreError> {
        Ok(self
            .rooms
            .entry(room_id.to_string())
            .or_insert_with(|| GameState::new(self.default_seed))
            .clone())
    }

    async fn save_state(&self, room_id: &str, state: &GameState) -> Result<(), StoreError> {
        self.rooms.insert(room_id.to_string(), state.clone());
        Ok(())
    }

    async fn append_log(&self, room_id: &str, entry: ActionLogEntry) -> Result<(), StoreError> {
        self.logs.entry(room_id.to_string()).or_default().push(entry);
        Ok(())
    }
}
