//! Growth unlock graph: OR-semantics prerequisite checks per character.

use std::collections::BTreeSet;

use crate::catalog::CharacterProfile;
use crate::domain::ids::NodeId;

/// `unlocked` unioned with every auto-unlock node of the character.
pub fn unlocked_with_auto(
    profile: &CharacterProfile,
    unlocked: &BTreeSet<NodeId>,
) -> BTreeSet<NodeId> {
    let mut set = unlocked.clone();
    for node in &profile.nodes {
        if node.auto_unlock {
            set.insert(node.id.clone());
        }
    }
    set
}

/// Whether a player holding `unlocked_set` may unlock `node_id`.
///
/// False when the node does not exist, is itself an auto-unlock node (those
/// are never player-chosen), is already unlocked, or has prerequisites none
/// of which are unlocked. A node with zero prerequisites is always
/// unlockable once reachable.
pub fn can_unlock_growth_node(
    profile: &CharacterProfile,
    node_id: &str,
    unlocked_set: &BTreeSet<NodeId>,
) -> bool {
    let Some(node) = profile.node(node_id) else {
        return false;
    };
    if node.auto_unlock || unlocked_set.contains(node_id) {
        return false;
    }
    node.prerequisites.is_empty()
        || node.prerequisites.iter().any(|p| unlocked_set.contains(p))
}
