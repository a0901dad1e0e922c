//! Round lifecycle: preparation, main phase entry, end phase.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::{DeckTemplates, Ruleset};
use crate::domain::board::{Lens, LensStatus, LobbySlot};
use crate::domain::rules::{derive_deck_seed, DeckKind};
use crate::domain::state::{GameState, Phase};
use crate::errors::domain::DomainError;

fn shuffled(template: &[String], seed: u64) -> Vec<String> {
    let mut deck = template.to_vec();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Top up both public rows from their decks.
fn refill_rows(state: &mut GameState, ruleset: &Ruleset) {
    while state.board.development_row.len() < ruleset.rounds.development_slots
        && !state.development_deck.is_empty()
    {
        let card = state.development_deck.remove(0);
        state.board.development_row.push(card);
    }
    while state.vp_row.len() < ruleset.rounds.vp_slots && !state.vp_deck.is_empty() {
        let card = state.vp_deck.remove(0);
        state.vp_row.push(card);
    }
}

/// One-time board setup: shuffle decks and instantiate every player's
/// lenses and lobby slots from their character profile.
fn initialize_board(
    state: &mut GameState,
    ruleset: &Ruleset,
    templates: &DeckTemplates,
) -> Result<(), DomainError> {
    state.development_deck = shuffled(
        &templates.development,
        derive_deck_seed(state.rng_seed, DeckKind::Development),
    );
    state.vp_deck = shuffled(
        &templates.vp,
        derive_deck_seed(state.rng_seed, DeckKind::VictoryPoint),
    );

    let join_order = state.join_order.clone();
    for player_id in &join_order {
        let character_id = state.require_player(player_id)?.character_id.clone();
        let profile = ruleset.character(&character_id)?;
        let specs = profile.lenses.clone();
        for spec in specs {
            state.board.lenses.insert(
                spec.id.clone(),
                Lens {
                    id: spec.id.clone(),
                    owner: player_id.clone(),
                    cost: spec.cost,
                    rewards: spec.rewards,
                    status: LensStatus::Available,
                },
            );
            for _ in 0..spec.lobby_slots {
                state.board.lobby_slots.push(LobbySlot {
                    lens_id: spec.id.clone(),
                    occupant: None,
                    is_active: true,
                });
            }
            state
                .require_player_mut(player_id)?
                .owned_lenses
                .push(spec.id);
        }
    }
    state.decks_initialized = true;
    Ok(())
}

/// Prepare the current round: decks (first call only), turn order, player
/// replenishment, public rows, and lobby slots.
pub fn prepare_round(
    state: &mut GameState,
    ruleset: &Ruleset,
    templates: &DeckTemplates,
) -> Result<(), DomainError> {
    // Room data is trusted to be consistent, but a mismatch here would
    // corrupt every later turn-order decision.
    if state.join_order.len() != state.players.len()
        || state.join_order.iter().any(|id| !state.players.contains_key(id))
    {
        return Err(DomainError::invariant(
            "join order and player set do not match",
        ));
    }

    if !state.decks_initialized {
        initialize_board(state, ruleset, templates)?;
    }

    // Round 1 keeps stable player-creation order; later rounds start with
    // the rooting player, else the earliest-passed player.
    if state.turn.is_empty() {
        state.turn.set_initial_order(state.join_order.clone());
    } else if let Some(starter) = state.turn.resolve_next_round_starter() {
        let rotated = state.turn.rotated_from(&starter);
        state.turn.set_initial_order(rotated);
    }

    for player in state.players.values_mut() {
        player.ap = ruleset.rounds.ap_supply;
        player.creativity += ruleset.rounds.creativity_stipend;
        player.has_passed = false;
        player.is_rooting = false;
    }

    refill_rows(state, ruleset);
    state.board.reset_all_slots();
    Ok(())
}

/// Enter the main phase: first player of the order acts.
pub fn enter_main(state: &mut GameState) {
    state.phase = Phase::Main;
    state.turn.clear_passes();
    for player in state.players.values_mut() {
        player.has_passed = false;
    }
    state.turn.reset_cursor();
    state.current_player = state.turn.current().cloned();
}

/// Enter the end phase: lobby slots reactivate (occupants and lens
/// exhaustion are untouched), public rows top up.
pub fn enter_end(state: &mut GameState, ruleset: &Ruleset) {
    state.phase = Phase::End;
    state.current_player = None;
    state.board.reactivate_all_slots();
    refill_rows(state, ruleset);
}
