//! `will`: invoke an unlocked active character ability.
//!
//! Apply order is load-bearing: pay the cost first, then set any unlimited
//! capacity flags, then credit rewards, then fire the trigger pass. Rewards
//! that raise the cap this way may exceed the old capacity.

use crate::catalog::Ruleset;
use crate::domain::actions::ActionType;
use crate::domain::effects::Effect;
use crate::domain::state::GameState;
use crate::domain::triggers::{self, TriggerEvent};
use crate::errors::domain::DomainError;

pub(crate) fn validate_will(
    state: &GameState,
    ruleset: &Ruleset,
    player_id: &str,
    node_id: &str,
) -> Vec<String> {
    let Some(player) = state.players.get(player_id) else {
        return Vec::new();
    };
    let Ok(profile) = ruleset.character(&player.character_id) else {
        return vec![format!("unknown character: {}", player.character_id)];
    };
    let Some(node) = profile.node(node_id) else {
        return vec![format!("unknown character node: {node_id}")];
    };
    let Effect::Active {
        cost,
        rewards,
        unlimited,
    } = &node.effect
    else {
        return vec![format!("node {node_id} is not an active ability")];
    };

    let mut errors = Vec::new();
    if !player.unlocked_nodes.contains(node_id) {
        errors.push(format!("node {node_id} is not unlocked"));
    }
    errors.extend(player.cost_errors(cost));
    // Resources this effect makes unlimited are exempt from the overflow
    // check: the flag is set before rewards are credited.
    errors.extend(player.reward_overflow_errors(rewards, unlimited));
    errors
}

pub(crate) fn apply_will(
    state: &mut GameState,
    ruleset: &Ruleset,
    player_id: &str,
    node_id: &str,
) -> Result<(), DomainError> {
    let character_id = state.require_player(player_id)?.character_id.clone();
    let node = ruleset.character_node(&character_id, &node_id.to_string())?;
    let Effect::Active {
        cost,
        rewards,
        unlimited,
    } = node.effect.clone()
    else {
        return Err(DomainError::invariant(format!(
            "node {node_id} is not an active ability"
        )));
    };

    let player = state.require_player_mut(player_id)?;
    player.pay(&cost);
    for kind in unlimited {
        player.wallet.set_unlimited(kind);
    }
    player.grant(&rewards)?;

    triggers::fire(
        state,
        ruleset,
        &TriggerEvent::ActionPerformed {
            actor: player_id.to_string(),
            action: ActionType::Will,
        },
    );
    Ok(())
}
