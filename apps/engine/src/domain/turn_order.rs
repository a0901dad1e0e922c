//! Turn-order sequencing: ordered player list, cursor, passed set, rooting.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::ids::PlayerId;

/// Ordered turn sequence with pass tracking for one round.
///
/// The cursor always points at the player expected to act. `next_player`
/// skips players who have already passed and wraps; it yields `None` once
/// everyone has passed, which ends the round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnOrder {
    order: Vec<PlayerId>,
    cursor: usize,
    passed: BTreeSet<PlayerId>,
    rooting: Option<PlayerId>,
}

impl TurnOrder {
    /// Install a fresh order, resetting cursor, passes, and rooting.
    pub fn set_initial_order(&mut self, order: Vec<PlayerId>) {
        self.order = order;
        self.cursor = 0;
        self.passed.clear();
        self.rooting = None;
    }

    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The player the cursor currently points at.
    pub fn current(&self) -> Option<&PlayerId> {
        self.order.get(self.cursor)
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    pub fn mark_passed(&mut self, player: &str) {
        self.passed.insert(player.to_string());
    }

    pub fn has_passed(&self, player: &str) -> bool {
        self.passed.contains(player)
    }

    pub fn clear_passes(&mut self) {
        self.passed.clear();
    }

    pub fn set_rooting(&mut self, player: &str) {
        self.rooting = Some(player.to_string());
    }

    pub fn rooting(&self) -> Option<&PlayerId> {
        self.rooting.as_ref()
    }

    pub fn has_all_passed(&self) -> bool {
        !self.order.is_empty() && self.order.iter().all(|p| self.passed.contains(p))
    }

    /// Advance the cursor past already-passed players, wrapping.
    ///
    /// Returns the player now expected to act, or `None` once everyone has
    /// passed.
    pub fn next_player(&mut self) -> Option<PlayerId> {
        if self.order.is_empty() || self.has_all_passed() {
            return None;
        }
        let len = self.order.len();
        for step in 1..=len {
            let idx = (self.cursor + step) % len;
            if !self.passed.contains(&self.order[idx]) {
                self.cursor = idx;
                return Some(self.order[idx].clone());
            }
        }
        None
    }

    /// Who starts the next round: the rooting player, else the earliest
    /// player (in current order) who passed, else the first player.
    pub fn resolve_next_round_starter(&self) -> Option<PlayerId> {
        if let Some(rooting) = &self.rooting {
            return Some(rooting.clone());
        }
        if let Some(first_passed) = self.order.iter().find(|p| self.passed.contains(*p)) {
            return Some(first_passed.clone());
        }
        self.order.first().cloned()
    }

    /// Current order rotated so `starter` comes first.
    pub fn rotated_from(&self, starter: &str) -> Vec<PlayerId> {
        match self.order.iter().position(|p| p == starter) {
            Some(idx) => {
                let mut rotated = Vec::with_capacity(self.order.len());
                rotated.extend_from_slice(&self.order[idx..]);
                rotated.extend_from_slice(&self.order[..idx]);
                rotated
            }
            None => self.order.clone(),
        }
    }
}
