//! Round lifecycle: preparation, deck determinism, turn-order handoff.

use crate::domain::actions::{Action, ActionKind};
use crate::domain::phases;
use crate::domain::resolver::resolve;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{fixture_ruleset, started_state, two_player_state};
use crate::errors::domain::DomainError;

#[test]
fn deck_shuffles_are_deterministic_for_a_seed() {
    let ruleset = fixture_ruleset();
    let first = started_state(&ruleset);
    let second = started_state(&ruleset);

    assert_eq!(first.development_deck, second.development_deck);
    assert_eq!(first.vp_deck, second.vp_deck);
    assert_eq!(first.board.development_row, second.board.development_row);
    assert_eq!(first.vp_row, second.vp_row);
}

#[test]
fn shuffling_preserves_the_card_pool() {
    let ruleset = fixture_ruleset();
    let state = started_state(&ruleset);

    let mut all: Vec<String> = state.board.development_row.clone();
    all.extend(state.development_deck.clone());
    all.sort();
    let mut expected = ruleset.decks.development.clone();
    expected.sort();
    assert_eq!(all, expected);
    assert_eq!(state.vp_row.len(), ruleset.rounds.vp_slots);
}

#[test]
fn round_one_turn_order_follows_join_order() {
    let ruleset = fixture_ruleset();
    let state = started_state(&ruleset);

    assert_eq!(state.phase, Phase::Main);
    assert_eq!(state.turn.order(), ["ana", "ben"]);
    assert_eq!(state.current_player.as_deref(), Some("ana"));
    for player in state.players.values() {
        assert_eq!(player.ap, ruleset.rounds.ap_supply);
        assert_eq!(player.creativity, ruleset.rounds.creativity_stipend);
    }
}

#[test]
fn board_is_initialized_exactly_once() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);

    assert!(state.board.lenses.contains_key("aster-spiral"));
    assert!(state.board.lenses.contains_key("briar-thorn"));
    assert_eq!(state.board.lobby_slots.len(), 3);
    assert_eq!(state.players["ana"].owned_lenses, vec!["aster-spiral"]);

    phases::prepare_round(&mut state, &ruleset, &ruleset.decks).unwrap();
    assert_eq!(state.board.lenses.len(), 2);
    assert_eq!(state.board.lobby_slots.len(), 3);
}

#[test]
fn rooting_player_starts_the_next_round() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);

    resolve(&mut state, &ruleset, &Action::new("ana", ActionKind::Pass));
    resolve(&mut state, &ruleset, &Action::new("ben", ActionKind::Rooting));
    resolve(&mut state, &ruleset, &Action::new("ben", ActionKind::Pass));
    phases::enter_end(&mut state, &ruleset);

    state.round += 1;
    phases::prepare_round(&mut state, &ruleset, &ruleset.decks).unwrap();
    phases::enter_main(&mut state);

    assert_eq!(state.turn.order(), ["ben", "ana"]);
    assert_eq!(state.current_player.as_deref(), Some("ben"));
}

#[test]
fn next_round_keeps_order_without_rooting() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);

    resolve(&mut state, &ruleset, &Action::new("ana", ActionKind::Pass));
    resolve(&mut state, &ruleset, &Action::new("ben", ActionKind::Pass));
    phases::enter_end(&mut state, &ruleset);

    state.round += 1;
    phases::prepare_round(&mut state, &ruleset, &ruleset.decks).unwrap();
    phases::enter_main(&mut state);

    assert_eq!(state.turn.order(), ["ana", "ben"]);
    assert_eq!(state.current_player.as_deref(), Some("ana"));
}

#[test]
fn prepare_round_replenishes_players_and_rows() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);

    resolve(
        &mut state,
        &ruleset,
        &Action::new("ana", ActionKind::Collect { slot_index: 0 }),
    );
    resolve(&mut state, &ruleset, &Action::new("ana", ActionKind::Rooting));
    resolve(&mut state, &ruleset, &Action::new("ana", ActionKind::Pass));
    resolve(&mut state, &ruleset, &Action::new("ben", ActionKind::Pass));
    phases::enter_end(&mut state, &ruleset);

    state.round += 1;
    phases::prepare_round(&mut state, &ruleset, &ruleset.decks).unwrap();

    for player in state.players.values() {
        assert_eq!(player.ap, ruleset.rounds.ap_supply);
        // The stipend accumulates across rounds.
        assert_eq!(player.creativity, 2 * ruleset.rounds.creativity_stipend);
        assert!(!player.has_passed);
        assert!(!player.is_rooting);
    }
    assert_eq!(
        state.board.development_row.len(),
        ruleset.rounds.development_slots
    );
}

#[test]
fn prepare_round_resets_lobby_slots() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    state.board.lobby_slots[0].occupant = Some("ben".to_string());
    state.board.lobby_slots[0].is_active = false;

    phases::prepare_round(&mut state, &ruleset, &ruleset.decks).unwrap();
    assert!(state
        .board
        .lobby_slots
        .iter()
        .all(|s| s.occupant.is_none() && s.is_active));
}

#[test]
fn enter_end_reactivates_slots_and_keeps_occupants() {
    let ruleset = fixture_ruleset();
    let mut state = started_state(&ruleset);
    state.board.lobby_slots[0].occupant = Some("ben".to_string());
    state.board.lobby_slots[0].is_active = false;

    phases::enter_end(&mut state, &ruleset);
    assert_eq!(state.phase, Phase::End);
    assert_eq!(state.current_player, None);
    let slot = &state.board.lobby_slots[0];
    assert_eq!(slot.occupant.as_deref(), Some("ben"));
    assert!(slot.is_active);
}

#[test]
fn prepare_round_rejects_an_inconsistent_join_order() {
    let ruleset = fixture_ruleset();
    let mut state = two_player_state(&ruleset);
    state.join_order.push("ghost".to_string());

    let err = phases::prepare_round(&mut state, &ruleset, &ruleset.decks).unwrap_err();
    assert!(matches!(err, DomainError::Invariant(_)));
}
