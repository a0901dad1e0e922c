//! `collect`: take a card from the public development row.

use crate::catalog::Ruleset;
use crate::domain::actions::ActionType;
use crate::domain::rules::COLLECT_AP_COST;
use crate::domain::state::GameState;
use crate::domain::triggers::{self, TriggerEvent};
use crate::errors::domain::DomainError;

pub(crate) fn validate_collect(
    state: &GameState,
    _ruleset: &Ruleset,
    player_id: &str,
    slot_index: usize,
) -> Vec<String> {
    let mut errors = Vec::new();
    if slot_index >= state.board.development_row.len() {
        errors.push(format!("development slot {slot_index} is out of range"));
    }
    if let Some(player) = state.players.get(player_id) {
        if player.ap < COLLECT_AP_COST {
            errors.push(format!(
                "not enough action points: need {COLLECT_AP_COST}, have {}",
                player.ap
            ));
        }
    }
    errors
}

pub(crate) fn apply_collect(
    state: &mut GameState,
    ruleset: &Ruleset,
    player_id: &str,
    slot_index: usize,
) -> Result<(), DomainError> {
    if slot_index >= state.board.development_row.len() {
        return Err(DomainError::invariant(format!(
            "development slot {slot_index} is out of range"
        )));
    }
    let card = state.board.development_row.remove(slot_index);

    // Refill from the top of the deck; remaining cards keep their indices.
    if !state.development_deck.is_empty() {
        let next = state.development_deck.remove(0);
        state.board.development_row.push(next);
    }

    let player = state.require_player_mut(player_id)?;
    player.ap = player.ap.saturating_sub(COLLECT_AP_COST);
    player.collected_cards.push(card);

    triggers::fire(
        state,
        ruleset,
        &TriggerEvent::ActionPerformed {
            actor: player_id.to_string(),
            action: ActionType::Collect,
        },
    );
    triggers::fire(
        state,
        ruleset,
        &TriggerEvent::DevelopmentSlotFreed {
            actor: player_id.to_string(),
        },
    );
    Ok(())
}
