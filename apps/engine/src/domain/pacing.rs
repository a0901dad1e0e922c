//! Round-pacing actions: `rooting` and `pass`.

use crate::catalog::Ruleset;
use crate::domain::resources::ResourceKind;
use crate::domain::rules::ROOTING_LIGHT_GAIN;
use crate::domain::state::GameState;
use crate::errors::domain::DomainError;

pub(crate) fn validate_rooting(
    state: &GameState,
    _ruleset: &Ruleset,
    player_id: &str,
) -> Vec<String> {
    let Some(player) = state.players.get(player_id) else {
        return Vec::new();
    };

    let mut errors = Vec::new();
    if state.any_rooting() {
        errors.push("a player has already rooted this round".to_string());
    }
    if !player.wallet.can_credit(ResourceKind::Light, ROOTING_LIGHT_GAIN) {
        errors.push("light is at capacity".to_string());
    }
    errors
}

pub(crate) fn apply_rooting(
    state: &mut GameState,
    _ruleset: &Ruleset,
    player_id: &str,
) -> Result<(), DomainError> {
    let player = state.require_player_mut(player_id)?;
    player.is_rooting = true;
    player.wallet.credit(ResourceKind::Light, ROOTING_LIGHT_GAIN)?;
    state.turn.set_rooting(player_id);
    Ok(())
}

pub(crate) fn validate_pass(
    state: &GameState,
    _ruleset: &Ruleset,
    player_id: &str,
) -> Vec<String> {
    let Some(player) = state.players.get(player_id) else {
        return Vec::new();
    };
    if player.has_passed {
        return vec!["already passed".to_string()];
    }
    Vec::new()
}

pub(crate) fn apply_pass(
    state: &mut GameState,
    _ruleset: &Ruleset,
    player_id: &str,
) -> Result<(), DomainError> {
    let player = state.require_player_mut(player_id)?;
    player.has_passed = true;
    state.turn.mark_passed(player_id);
    // Advance to the next player who has not yet passed; None ends the
    // round's play (the session takes the phase from there).
    state.current_player = state.turn.next_player();
    Ok(())
}
