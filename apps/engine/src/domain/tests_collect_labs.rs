//! `collect` and `labActivate` resolution.

use crate::domain::actions::{Action, ActionKind};
use crate::domain::resolver::resolve;
use crate::domain::resources::ResourceKind;
use crate::domain::test_state_helpers::{fixture_ruleset, started_state};

fn collect(slot_index: usize) -> ActionKind {
    ActionKind::Collect { slot_index }
}

fn lab(lab_id: &str) -> ActionKind {
    ActionKind::LabActivate {
        lab_id: lab_id.to_string(),
    }
}

#[test]
fn collect_takes_card_and_refills_from_deck() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    let row = state.board.development_row.clone();
    assert_eq!(row.len(), 3);
    let refill = state.development_deck[0].clone();

    let result = resolve(&mut state, &ruleset, &Action::new("ana", collect(1)));
    assert!(result.success, "{:?}", result.errors);

    let ana = &state.players["ana"];
    assert_eq!(ana.ap, 3);
    assert_eq!(ana.collected_cards, vec![row[1].clone()]);
    // Remaining cards keep their slots; the refill lands at the end.
    assert_eq!(
        state.board.development_row,
        vec![row[0].clone(), row[2].clone(), refill]
    );
}

#[test]
fn collect_out_of_range_is_rejected() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);

    let result = resolve(&mut state, &ruleset, &Action::new("ana", collect(7)));
    assert!(result.errors.iter().any(|e| e.contains("out of range")));
}

#[test]
fn collect_requires_action_points() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    state.players.get_mut("ana").unwrap().ap = 1;

    let result = resolve(&mut state, &ruleset, &Action::new("ana", collect(0)));
    assert!(result
        .errors
        .iter()
        .any(|e| e.contains("not enough action points")));
}

#[test]
fn collect_fires_action_and_slot_freed_triggers() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    state
        .players
        .get_mut("ana")
        .unwrap()
        .unlocked_nodes
        .insert("aster-echo".to_string());
    state
        .players
        .get_mut("ben")
        .unwrap()
        .unlocked_nodes
        .insert("briar-market".to_string());

    let result = resolve(&mut state, &ruleset, &Action::new("ana", collect(0)));
    assert!(result.success, "{:?}", result.errors);
    assert_eq!(state.players["ana"].vp, 2);
    assert_eq!(state.players["ben"].vp, 1);
}

#[test]
fn lab_activation_pays_cost_and_grants_rewards() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    {
        let ana = state.players.get_mut("ana").unwrap();
        ana.wallet.credit(ResourceKind::Light, 1).unwrap();
        ana.lobby_stock = 1;
    }

    let result = resolve(&mut state, &ruleset, &Action::new("ana", lab("prism-lab")));
    assert!(result.success, "{:?}", result.errors);

    let ana = &state.players["ana"];
    assert_eq!(ana.ap, 4);
    assert_eq!(ana.wallet.amount(ResourceKind::Light), 0);
    assert_eq!(ana.lobby_stock, 0);
    assert_eq!(ana.deployed_lobby, 1);
    assert_eq!(ana.wallet.amount(ResourceKind::Rainbow), 1);
    assert_eq!(ana.vp, 2);
}

#[test]
fn lab_rejected_when_unaffordable() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);

    let result = resolve(&mut state, &ruleset, &Action::new("ana", lab("prism-lab")));
    assert!(result.errors.iter().any(|e| e.contains("not enough light")));
    assert!(result
        .errors
        .iter()
        .any(|e| e.contains("not enough lobby pieces")));
}

#[test]
fn unknown_lab_is_rejected() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);

    let result = resolve(&mut state, &ruleset, &Action::new("ana", lab("vortex-lab")));
    assert_eq!(result.errors, vec!["unknown lab: vortex-lab".to_string()]);
}

#[test]
fn lab_reward_overflow_is_rejected_up_front() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    state
        .players
        .get_mut("ana")
        .unwrap()
        .wallet
        .credit(ResourceKind::Stagnation, 2)
        .unwrap();

    let result = resolve(&mut state, &ruleset, &Action::new("ana", lab("murk-lab")));
    assert!(result
        .errors
        .iter()
        .any(|e| e.contains("would exceed capacity")));
    // Nothing was paid.
    assert_eq!(state.players["ana"].ap, 5);
}
