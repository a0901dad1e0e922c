//! Trigger engine for character passive abilities.
//!
//! Invariant: triggers never trigger further events. `fire` is a single,
//! non-recursive post-processing pass over every player's unlocked
//! trigger nodes; it only credits VP and emits no events of its own.

use tracing::debug;

use crate::catalog::Ruleset;
use crate::domain::actions::ActionType;
use crate::domain::effects::{Effect, TriggerKind};
use crate::domain::ids::PlayerId;
use crate::domain::state::GameState;

/// A game event that may match trigger effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// A non-owner activated someone's lens.
    LensActivatedByOther { actor: PlayerId, owner: PlayerId },
    /// A card left the public development row.
    DevelopmentSlotFreed { actor: PlayerId },
    /// A player completed an action of the given type.
    ActionPerformed { actor: PlayerId, action: ActionType },
}

fn event_matches(
    event: &TriggerEvent,
    holder: &str,
    node_event: TriggerKind,
    node_action: Option<ActionType>,
) -> bool {
    match event {
        TriggerEvent::LensActivatedByOther { actor, owner } => {
            // Only the lens owner's node fires, and only for someone else's
            // activation.
            node_event == TriggerKind::LensActivatedByOther && holder == owner && actor != owner
        }
        TriggerEvent::DevelopmentSlotFreed { .. } => {
            node_event == TriggerKind::DevelopmentSlotFreed
        }
        TriggerEvent::ActionPerformed { actor, action } => {
            node_event == TriggerKind::ActionPerformed
                && holder == actor
                && node_action.map_or(true, |t| t == *action)
        }
    }
}

/// Scan every player's unlocked trigger nodes and credit matching VP.
pub fn fire(state: &mut GameState, ruleset: &Ruleset, event: &TriggerEvent) {
    // Collect credits first; crediting mutates players while the scan
    // borrows them.
    let mut credits: Vec<(PlayerId, i64)> = Vec::new();
    for player in state.players.values() {
        let Ok(profile) = ruleset.character(&player.character_id) else {
            continue;
        };
        for node in &profile.nodes {
            if !player.unlocked_nodes.contains(&node.id) {
                continue;
            }
            let Effect::Trigger {
                event: node_event,
                action,
                vp,
            } = &node.effect
            else {
                continue;
            };
            if event_matches(event, &player.id, *node_event, *action) {
                debug!(player = %player.id, node = %node.id, vp, "trigger fired");
                credits.push((player.id.clone(), *vp));
            }
        }
    }
    for (player_id, vp) in credits {
        if let Some(player) = state.players.get_mut(&player_id) {
            player.vp += vp;
        }
    }
}
