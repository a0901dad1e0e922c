//! Action resolver: strict validate-then-apply dispatch.
//!
//! `resolve` never partially applies an action. Validation runs first and
//! must not mutate; any non-empty error list stops resolution. Only a clean
//! validation reaches `apply`, whose preconditions are assumed to hold. A
//! `DomainError` escaping an apply step (a validator gap or a stale-state
//! race) is caught here and converted into a failed result rather than
//! propagated.

use crate::catalog::Ruleset;
use crate::domain::actions::{Action, ActionKind, ActionResult};
use crate::domain::state::{GameState, Phase};
use crate::domain::{collect, lab, lens, pacing, task, will};
use crate::errors::domain::DomainError;

/// Preconditions shared by every action type.
fn gate_errors(state: &GameState, action: &Action) -> Vec<String> {
    let mut errors = Vec::new();
    if state.phase != Phase::Main {
        errors.push(format!(
            "{} is only legal during the main phase",
            action.action_type()
        ));
    }
    if !state.players.contains_key(&action.player_id) {
        errors.push(format!("unknown player: {}", action.player_id));
    } else if !state.is_current_player(&action.player_id) {
        errors.push("not your turn".to_string());
    }
    errors
}

fn validate(state: &GameState, ruleset: &Ruleset, action: &Action) -> Vec<String> {
    let gate = gate_errors(state, action);
    if !gate.is_empty() {
        return gate;
    }
    let who = action.player_id.as_str();
    match &action.kind {
        ActionKind::LabActivate { lab_id } => {
            lab::validate_lab_activate(state, ruleset, who, lab_id)
        }
        ActionKind::LensActivate { lens_id } => {
            lens::validate_lens_activate(state, ruleset, who, lens_id)
        }
        ActionKind::Move { lens_id } => lens::validate_move(state, ruleset, who, lens_id),
        ActionKind::Refresh { lens_id } => lens::validate_refresh(state, ruleset, who, lens_id),
        ActionKind::Collect { slot_index } => {
            collect::validate_collect(state, ruleset, who, *slot_index)
        }
        ActionKind::Will { node_id } => will::validate_will(state, ruleset, who, node_id),
        ActionKind::Task {
            task_id,
            reward_choice,
        } => task::validate_task(state, ruleset, who, task_id, reward_choice),
        ActionKind::Rooting => pacing::validate_rooting(state, ruleset, who),
        ActionKind::Pass => pacing::validate_pass(state, ruleset, who),
    }
}

fn apply(state: &mut GameState, ruleset: &Ruleset, action: &Action) -> Result<(), DomainError> {
    let who = action.player_id.as_str();
    match &action.kind {
        ActionKind::LabActivate { lab_id } => lab::apply_lab_activate(state, ruleset, who, lab_id),
        ActionKind::LensActivate { lens_id } => {
            lens::apply_lens_activate(state, ruleset, who, lens_id)
        }
        ActionKind::Move { lens_id } => lens::apply_move(state, ruleset, who, lens_id),
        ActionKind::Refresh { lens_id } => lens::apply_refresh(state, ruleset, who, lens_id),
        ActionKind::Collect { slot_index } => {
            collect::apply_collect(state, ruleset, who, *slot_index)
        }
        ActionKind::Will { node_id } => will::apply_will(state, ruleset, who, node_id),
        ActionKind::Task {
            task_id,
            reward_choice,
        } => task::apply_task(state, ruleset, who, task_id, reward_choice),
        ActionKind::Rooting => pacing::apply_rooting(state, ruleset, who),
        ActionKind::Pass => pacing::apply_pass(state, ruleset, who),
    }
}

/// Resolve one action against the room state.
pub fn resolve(state: &mut GameState, ruleset: &Ruleset, action: &Action) -> ActionResult {
    let errors = validate(state, ruleset, action);
    if !errors.is_empty() {
        return ActionResult::rejected(errors);
    }
    match apply(state, ruleset, action) {
        Ok(()) => ActionResult::ok(),
        Err(e) => ActionResult::rejected(vec![e.to_string()]),
    }
}
