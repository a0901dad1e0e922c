//! Shared board: lenses, lobby slots, and the public development row.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::effects::{Cost, Reward};
use crate::domain::ids::{CardId, LensId, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LensStatus {
    Available,
    Exhausted,
}

/// A shared board artifact owned by one player, occupy-able by others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lens {
    pub id: LensId,
    pub owner: PlayerId,
    pub cost: Cost,
    pub rewards: Vec<Reward>,
    pub status: LensStatus,
}

/// A seat on a lens. Occupying an active slot grants activation rights;
/// the flag is cleared when the occupant activates the lens and reset every
/// round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbySlot {
    pub lens_id: LensId,
    pub occupant: Option<PlayerId>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub lenses: BTreeMap<LensId, Lens>,
    pub lobby_slots: Vec<LobbySlot>,
    /// Publicly visible development cards drawn from the deck.
    pub development_row: Vec<CardId>,
}

impl Board {
    pub fn require_lens(&self, lens_id: &str) -> Result<&Lens, DomainError> {
        self.lenses
            .get(lens_id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Lens, lens_id))
    }

    pub fn require_lens_mut(&mut self, lens_id: &str) -> Result<&mut Lens, DomainError> {
        self.lenses
            .get_mut(lens_id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Lens, lens_id))
    }

    /// Index of the first unoccupied slot on `lens_id`, if any.
    pub fn free_slot_index(&self, lens_id: &str) -> Option<usize> {
        self.lobby_slots
            .iter()
            .position(|s| s.lens_id == lens_id && s.occupant.is_none())
    }

    /// Whether `player` occupies an active slot on `lens_id`.
    pub fn has_active_slot(&self, lens_id: &str, player: &str) -> bool {
        self.lobby_slots.iter().any(|s| {
            s.lens_id == lens_id && s.is_active && s.occupant.as_deref() == Some(player)
        })
    }

    /// Clear the active flag on `player`'s slots on `lens_id`.
    pub fn deactivate_player_slots(&mut self, lens_id: &str, player: &str) {
        for slot in &mut self.lobby_slots {
            if slot.lens_id == lens_id && slot.occupant.as_deref() == Some(player) {
                slot.is_active = false;
            }
        }
    }

    /// Reactivate every slot on one lens (owner refresh).
    pub fn reactivate_lens_slots(&mut self, lens_id: &str) {
        for slot in &mut self.lobby_slots {
            if slot.lens_id == lens_id {
                slot.is_active = true;
            }
        }
    }

    /// Reactivate every slot, keeping occupants (end phase).
    pub fn reactivate_all_slots(&mut self) {
        for slot in &mut self.lobby_slots {
            slot.is_active = true;
        }
    }

    /// Reset every slot to unoccupied and active (round preparation).
    pub fn reset_all_slots(&mut self) {
        for slot in &mut self.lobby_slots {
            slot.occupant = None;
            slot.is_active = true;
        }
    }
}
