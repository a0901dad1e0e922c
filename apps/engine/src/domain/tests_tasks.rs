//! `task` completion, requirements, and reward choices.

use crate::domain::actions::{Action, ActionKind, TaskChoice};
use crate::domain::board::LensStatus;
use crate::domain::resolver::resolve;
use crate::domain::resources::ResourceKind;
use crate::domain::state::GameState;
use crate::domain::test_state_helpers::{fixture_ruleset, started_state};

fn task(task_id: &str, choice: TaskChoice) -> ActionKind {
    ActionKind::Task {
        task_id: task_id.to_string(),
        reward_choice: choice,
    }
}

fn growth(node_id: &str) -> TaskChoice {
    TaskChoice::Growth {
        node_id: node_id.to_string(),
    }
}

fn credit_light(state: &mut GameState, player: &str, amount: u32) {
    state
        .players
        .get_mut(player)
        .unwrap()
        .wallet
        .credit(ResourceKind::Light, amount)
        .unwrap();
}

#[test]
fn task_completes_once_only() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    credit_light(&mut state, "ana", 2);

    let first = resolve(
        &mut state,
        &ruleset,
        &Action::new("ana", task("task-light", TaskChoice::Lobby)),
    );
    assert!(first.success, "{:?}", first.errors);
    let ana = &state.players["ana"];
    assert_eq!(ana.vp, 2);
    assert_eq!(ana.lobby_stock, 1);
    assert!(ana.completed_tasks.contains("task-light"));

    let second = resolve(
        &mut state,
        &ruleset,
        &Action::new("ana", task("task-light", TaskChoice::Lobby)),
    );
    assert!(second.errors.iter().any(|e| e.contains("already completed")));
}

#[test]
fn resource_requirement_is_enforced() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    credit_light(&mut state, "ana", 1);

    let result = resolve(
        &mut state,
        &ruleset,
        &Action::new("ana", task("task-light", TaskChoice::Lobby)),
    );
    assert!(result
        .errors
        .iter()
        .any(|e| e.contains("task requires 2 light, have 1")));
}

#[test]
fn lens_requirement_counts_own_exhausted_lenses() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);

    let blocked = resolve(
        &mut state,
        &ruleset,
        &Action::new("ana", task("task-lens", TaskChoice::Lobby)),
    );
    assert!(blocked
        .errors
        .iter()
        .any(|e| e.contains("requires 1 activated lenses, have 0")));

    state.board.lenses.get_mut("aster-spiral").unwrap().status = LensStatus::Exhausted;
    let result = resolve(
        &mut state,
        &ruleset,
        &Action::new("ana", task("task-lens", TaskChoice::Lobby)),
    );
    assert!(result.success, "{:?}", result.errors);
    assert_eq!(state.players["ana"].creativity, 3);
}

#[test]
fn growth_choice_unlocks_a_reachable_node() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    credit_light(&mut state, "ana", 2);

    // aster-bloom's prerequisite is the auto-unlocked root.
    let result = resolve(
        &mut state,
        &ruleset,
        &Action::new("ana", task("task-light", growth("aster-bloom"))),
    );
    assert!(result.success, "{:?}", result.errors);
    assert!(state.players["ana"].unlocked_nodes.contains("aster-bloom"));
}

#[test]
fn growth_choice_rejects_auto_unlock_nodes() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    credit_light(&mut state, "ana", 2);

    let result = resolve(
        &mut state,
        &ruleset,
        &Action::new("ana", task("task-light", growth("aster-root"))),
    );
    assert!(result
        .errors
        .iter()
        .any(|e| e.contains("unlocks automatically")));
}

#[test]
fn growth_choice_rejects_unmet_prerequisites() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    credit_light(&mut state, "ana", 2);

    // aster-flood needs aster-bloom first.
    let result = resolve(
        &mut state,
        &ruleset,
        &Action::new("ana", task("task-light", growth("aster-flood"))),
    );
    assert!(result
        .errors
        .iter()
        .any(|e| e.contains("prerequisites are not met")));
}

#[test]
fn growth_choice_rejects_unknown_nodes() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    credit_light(&mut state, "ana", 2);

    let result = resolve(
        &mut state,
        &ruleset,
        &Action::new("ana", task("task-light", growth("aster-nope"))),
    );
    assert!(result.errors.iter().any(|e| e.contains("unknown growth node")));
}

#[test]
fn unlocking_a_passive_node_raises_capacity_immediately() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    credit_light(&mut state, "ana", 2);

    let result = resolve(
        &mut state,
        &ruleset,
        &Action::new("ana", task("task-light", growth("aster-deep"))),
    );
    assert!(result.success, "{:?}", result.errors);
    assert_eq!(
        state.players["ana"].wallet.pool(ResourceKind::Light).max_capacity,
        8
    );
}

#[test]
fn unknown_task_is_rejected() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);

    let result = resolve(
        &mut state,
        &ruleset,
        &Action::new("ana", task("task-nope", TaskChoice::Lobby)),
    );
    assert_eq!(result.errors, vec!["unknown task: task-nope".to_string()]);
}
