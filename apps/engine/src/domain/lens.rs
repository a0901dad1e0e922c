//! Lens actions: `lensActivate`, `move`, `refresh`.

use crate::catalog::Ruleset;
use crate::domain::actions::ActionType;
use crate::domain::board::LensStatus;
use crate::domain::effects::Cost;
use crate::domain::rules::{LENS_BASE_AP_COST, MOVE_AP_COST, REFRESH_AP_COST};
use crate::domain::state::GameState;
use crate::domain::triggers::{self, TriggerEvent};
use crate::errors::domain::DomainError;

/// Total activation cost: base AP on top of the lens's own cost.
fn activation_cost(lens_cost: &Cost) -> Cost {
    Cost {
        ap: LENS_BASE_AP_COST + lens_cost.ap,
        creativity: lens_cost.creativity,
        resources: lens_cost.resources.clone(),
        lobby: 0,
    }
}

pub(crate) fn validate_lens_activate(
    state: &GameState,
    _ruleset: &Ruleset,
    player_id: &str,
    lens_id: &str,
) -> Vec<String> {
    let Some(lens) = state.board.lenses.get(lens_id) else {
        return vec![format!("unknown lens: {lens_id}")];
    };
    let Some(player) = state.players.get(player_id) else {
        return Vec::new();
    };

    let mut errors = Vec::new();
    if lens.status == LensStatus::Exhausted {
        errors.push(format!("lens {lens_id} is exhausted"));
    }
    let is_owner = lens.owner == player_id;
    if !is_owner && !state.board.has_active_slot(lens_id, player_id) {
        errors.push(format!(
            "you must own lens {lens_id} or occupy an active lobby slot on it"
        ));
    }
    errors.extend(player.cost_errors(&activation_cost(&lens.cost)));
    errors.extend(player.reward_overflow_errors(&lens.rewards, &[]));
    errors
}

pub(crate) fn apply_lens_activate(
    state: &mut GameState,
    ruleset: &Ruleset,
    player_id: &str,
    lens_id: &str,
) -> Result<(), DomainError> {
    let (owner, cost, rewards) = {
        let lens = state.board.require_lens_mut(lens_id)?;
        lens.status = LensStatus::Exhausted;
        (lens.owner.clone(), activation_cost(&lens.cost), lens.rewards.clone())
    };

    state.board.deactivate_player_slots(lens_id, player_id);

    let player = state.require_player_mut(player_id)?;
    player.pay(&cost);
    player.grant(&rewards)?;

    triggers::fire(
        state,
        ruleset,
        &TriggerEvent::ActionPerformed {
            actor: player_id.to_string(),
            action: ActionType::LensActivate,
        },
    );
    if owner != player_id {
        triggers::fire(
            state,
            ruleset,
            &TriggerEvent::LensActivatedByOther {
                actor: player_id.to_string(),
                owner,
            },
        );
    }
    Ok(())
}

pub(crate) fn validate_move(
    state: &GameState,
    _ruleset: &Ruleset,
    player_id: &str,
    lens_id: &str,
) -> Vec<String> {
    let Some(lens) = state.board.lenses.get(lens_id) else {
        return vec![format!("unknown lens: {lens_id}")];
    };
    let Some(player) = state.players.get(player_id) else {
        return Vec::new();
    };

    let mut errors = Vec::new();
    if lens.owner == player_id {
        errors.push(format!("cannot move to lens {lens_id}: you own it"));
    }
    if player.ap < MOVE_AP_COST {
        errors.push(format!(
            "not enough action points: need {MOVE_AP_COST}, have {}",
            player.ap
        ));
    }
    if state.board.free_slot_index(lens_id).is_none() {
        errors.push(format!("no free lobby slot on lens {lens_id}"));
    }
    errors
}

pub(crate) fn apply_move(
    state: &mut GameState,
    _ruleset: &Ruleset,
    player_id: &str,
    lens_id: &str,
) -> Result<(), DomainError> {
    let slot_idx = state
        .board
        .free_slot_index(lens_id)
        .ok_or_else(|| DomainError::invariant(format!("no free lobby slot on lens {lens_id}")))?;

    let player = state.require_player_mut(player_id)?;
    player.ap = player.ap.saturating_sub(MOVE_AP_COST);

    let slot = &mut state.board.lobby_slots[slot_idx];
    slot.occupant = Some(player_id.to_string());
    slot.is_active = true;
    Ok(())
}

pub(crate) fn validate_refresh(
    state: &GameState,
    _ruleset: &Ruleset,
    player_id: &str,
    lens_id: &str,
) -> Vec<String> {
    let Some(lens) = state.board.lenses.get(lens_id) else {
        return vec![format!("unknown lens: {lens_id}")];
    };
    let Some(player) = state.players.get(player_id) else {
        return Vec::new();
    };

    let mut errors = Vec::new();
    if lens.owner != player_id {
        errors.push(format!("only the owner may refresh lens {lens_id}"));
    }
    if lens.status != LensStatus::Exhausted {
        errors.push(format!("lens {lens_id} is not exhausted"));
    }
    if player.ap < REFRESH_AP_COST {
        errors.push(format!(
            "not enough action points: need {REFRESH_AP_COST}, have {}",
            player.ap
        ));
    }
    errors
}

pub(crate) fn apply_refresh(
    state: &mut GameState,
    _ruleset: &Ruleset,
    player_id: &str,
    lens_id: &str,
) -> Result<(), DomainError> {
    {
        let lens = state.board.require_lens_mut(lens_id)?;
        lens.status = LensStatus::Available;
    }
    state.board.reactivate_lens_slots(lens_id);

    let player = state.require_player_mut(player_id)?;
    player.ap = player.ap.saturating_sub(REFRESH_AP_COST);
    Ok(())
}
