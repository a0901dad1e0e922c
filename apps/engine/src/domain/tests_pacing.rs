//! Pass and rooting pacing rules.

use crate::domain::actions::{Action, ActionKind};
use crate::domain::pacing;
use crate::domain::resolver::resolve;
use crate::domain::resources::ResourceKind;
use crate::domain::test_state_helpers::{fixture_ruleset, started_state};

#[test]
fn pass_advances_to_next_active_player() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);

    let result = resolve(&mut state, &ruleset, &Action::new("ana", ActionKind::Pass));
    assert!(result.success);
    assert!(state.players["ana"].has_passed);
    assert_eq!(state.current_player.as_deref(), Some("ben"));
}

#[test]
fn passing_twice_is_a_rule_violation() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    resolve(&mut state, &ruleset, &Action::new("ana", ActionKind::Pass));

    assert_eq!(
        pacing::validate_pass(&state, &ruleset, "ana"),
        vec!["already passed".to_string()]
    );
}

#[test]
fn last_pass_ends_round_play() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);

    resolve(&mut state, &ruleset, &Action::new("ana", ActionKind::Pass));
    let result = resolve(&mut state, &ruleset, &Action::new("ben", ActionKind::Pass));
    assert!(result.success);
    assert_eq!(state.current_player, None);
    assert!(state.turn.has_all_passed());
}

#[test]
fn rooting_grants_light_once_per_round() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);

    let result = resolve(&mut state, &ruleset, &Action::new("ana", ActionKind::Rooting));
    assert!(result.success);
    let ana = &state.players["ana"];
    assert!(ana.is_rooting);
    assert_eq!(ana.wallet.amount(ResourceKind::Light), 1);
    assert_eq!(state.turn.rooting().map(String::as_str), Some("ana"));

    // Rooting does not end the turn; pass so the other player may act.
    resolve(&mut state, &ruleset, &Action::new("ana", ActionKind::Pass));
    let second = resolve(&mut state, &ruleset, &Action::new("ben", ActionKind::Rooting));
    assert!(!second.success);
    assert!(second
        .errors
        .iter()
        .any(|e| e.contains("already rooted this round")));
}

#[test]
fn rooting_rejected_when_light_is_at_capacity() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    let cap = ruleset.wallet.light_capacity;
    state
        .players
        .get_mut("ana")
        .unwrap()
        .wallet
        .credit(ResourceKind::Light, cap)
        .unwrap();

    let result = resolve(&mut state, &ruleset, &Action::new("ana", ActionKind::Rooting));
    assert_eq!(result.errors, vec!["light is at capacity".to_string()]);
}
