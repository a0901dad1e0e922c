//! `task`: complete a shared task and choose its extra reward.

use crate::catalog::{Ruleset, TaskSpec};
use crate::domain::actions::TaskChoice;
use crate::domain::board::LensStatus;
use crate::domain::effects::Effect;
use crate::domain::growth;
use crate::domain::rules::TASK_LOBBY_GAIN;
use crate::domain::state::{GameState, PlayerState};
use crate::errors::domain::{DomainError, NotFoundKind};

fn requirement_errors(state: &GameState, player: &PlayerState, task: &TaskSpec) -> Vec<String> {
    let mut errors = Vec::new();
    for threshold in &task.requirement.resources {
        if player.wallet.amount(threshold.kind) < threshold.amount {
            errors.push(format!(
                "task requires {} {}, have {}",
                threshold.amount,
                threshold.kind,
                player.wallet.amount(threshold.kind)
            ));
        }
    }
    let min_lenses = task.requirement.min_exhausted_lenses;
    if min_lenses > 0 {
        let exhausted = player
            .owned_lenses
            .iter()
            .filter(|id| {
                state
                    .board
                    .lenses
                    .get(*id)
                    .map_or(false, |l| l.status == LensStatus::Exhausted)
            })
            .count() as u32;
        if exhausted < min_lenses {
            errors.push(format!(
                "task requires {min_lenses} activated lenses, have {exhausted}"
            ));
        }
    }
    errors
}

pub(crate) fn validate_task(
    state: &GameState,
    ruleset: &Ruleset,
    player_id: &str,
    task_id: &str,
    choice: &TaskChoice,
) -> Vec<String> {
    let Some(task) = ruleset.tasks.get(task_id) else {
        return vec![format!("unknown task: {task_id}")];
    };
    let Some(player) = state.players.get(player_id) else {
        return Vec::new();
    };

    let mut errors = Vec::new();
    if player.completed_tasks.contains(task_id) {
        errors.push(format!("task {task_id} already completed"));
    }
    errors.extend(requirement_errors(state, player, task));
    errors.extend(player.reward_overflow_errors(&task.rewards, &[]));

    if let TaskChoice::Growth { node_id } = choice {
        let Ok(profile) = ruleset.character(&player.character_id) else {
            errors.push(format!("unknown character: {}", player.character_id));
            return errors;
        };
        match profile.node(node_id) {
            None => errors.push(format!("unknown growth node: {node_id}")),
            Some(node) => {
                if node.auto_unlock {
                    errors.push(format!("node {node_id} unlocks automatically"));
                } else if player.unlocked_nodes.contains(node_id) {
                    errors.push(format!("node {node_id} is already unlocked"));
                } else {
                    let reachable =
                        growth::unlocked_with_auto(profile, &player.unlocked_nodes);
                    if !growth::can_unlock_growth_node(profile, node_id, &reachable) {
                        errors.push(format!(
                            "growth node {node_id} prerequisites are not met"
                        ));
                    }
                }
            }
        }
    }
    errors
}

pub(crate) fn apply_task(
    state: &mut GameState,
    ruleset: &Ruleset,
    player_id: &str,
    task_id: &str,
    choice: &TaskChoice,
) -> Result<(), DomainError> {
    let task = ruleset
        .tasks
        .get(task_id)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Task, task_id))?;

    let character_id = state.require_player(player_id)?.character_id.clone();
    let player = state.require_player_mut(player_id)?;
    player.completed_tasks.insert(task_id.to_string());
    player.grant(&task.rewards)?;

    match choice {
        TaskChoice::Growth { node_id } => {
            let node = ruleset.character_node(&character_id, node_id)?.clone();
            let player = state.require_player_mut(player_id)?;
            player.unlocked_nodes.insert(node_id.clone());
            // Passive effects land the moment the node is unlocked.
            if let Effect::Passive { capacity } = &node.effect {
                for bonus in capacity {
                    player.wallet.raise_capacity(bonus.kind, bonus.amount);
                }
            }
        }
        TaskChoice::Lobby => {
            let player = state.require_player_mut(player_id)?;
            player.lobby_stock += TASK_LOBBY_GAIN;
        }
    }
    Ok(())
}
