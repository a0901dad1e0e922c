//! Fixed rule constants and deterministic seed derivation.

/// Base AP charged by `lensActivate` on top of the lens's own AP cost.
pub const LENS_BASE_AP_COST: u32 = 1;
pub const MOVE_AP_COST: u32 = 2;
pub const REFRESH_AP_COST: u32 = 3;
pub const COLLECT_AP_COST: u32 = 2;
/// Light granted by the rooting action.
pub const ROOTING_LIGHT_GAIN: u32 = 1;
/// Lobby pieces granted by a task's lobby reward choice.
pub const TASK_LOBBY_GAIN: u32 = 1;

/// Decks shuffled during round preparation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckKind {
    Development,
    VictoryPoint,
}

/// Derive a shuffle seed unique per (room, deck kind).
///
/// Wrapping arithmetic with distinct offsets keeps the two decks from
/// sharing an order while staying reproducible for a given room seed.
pub fn derive_deck_seed(room_seed: i64, deck: DeckKind) -> u64 {
    let base = room_seed as u64;
    match deck {
        DeckKind::Development => base.wrapping_mul(1_000_003).wrapping_add(1),
        DeckKind::VictoryPoint => base.wrapping_mul(1_000_003).wrapping_add(2),
    }
}
