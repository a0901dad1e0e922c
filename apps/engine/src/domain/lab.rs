//! `labActivate`: pay a lab's configured cost, collect its rewards.

use crate::catalog::Ruleset;
use crate::domain::state::GameState;
use crate::errors::domain::{DomainError, NotFoundKind};

pub(crate) fn validate_lab_activate(
    state: &GameState,
    ruleset: &Ruleset,
    player_id: &str,
    lab_id: &str,
) -> Vec<String> {
    let Some(lab) = ruleset.labs.get(lab_id) else {
        return vec![format!("unknown lab: {lab_id}")];
    };
    let Some(player) = state.players.get(player_id) else {
        return Vec::new(); // gate already reported the missing player
    };

    let mut errors = player.cost_errors(&lab.cost);
    errors.extend(player.reward_overflow_errors(&lab.rewards, &[]));
    errors
}

pub(crate) fn apply_lab_activate(
    state: &mut GameState,
    ruleset: &Ruleset,
    player_id: &str,
    lab_id: &str,
) -> Result<(), DomainError> {
    let lab = ruleset
        .labs
        .get(lab_id)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Lab, lab_id))?;
    let player = state.require_player_mut(player_id)?;
    player.pay(&lab.cost);
    player.grant(&lab.rewards)?;
    Ok(())
}
