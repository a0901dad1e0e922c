//! Orchestration façade: load state, run the engine, persist, log.

use time::{Duration, OffsetDateTime};
use tracing::{debug, info};

use crate::catalog::deck_cache::DeckTemplateCache;
use crate::catalog::Ruleset;
use crate::domain::actions::{ActionEnvelope, ActionResult};
use crate::domain::state::{ActionLogEntry, GameState, Phase};
use crate::domain::{phases, resolver, scoring};
use crate::error::EngineError;
use crate::errors::domain::DomainError;
use crate::store::StateStore;

/// How long an assembled deck template list stays cached.
const DECK_TEMPLATE_TTL: Duration = Duration::minutes(10);

/// Game session service over an injected state store.
///
/// Processing is synchronous per request: one fresh state copy is loaded,
/// mutated entirely in memory, and persisted only on success. Serializing
/// concurrent writers per room is the store's responsibility.
pub struct GameSession<S> {
    store: S,
    deck_cache: DeckTemplateCache,
}

impl<S: StateStore> GameSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            deck_cache: DeckTemplateCache::new(DECK_TEMPLATE_TTL),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn entry(
        at: OffsetDateTime,
        player_id: Option<String>,
        kind: impl Into<String>,
        detail: impl Into<String>,
    ) -> ActionLogEntry {
        ActionLogEntry {
            at,
            player_id,
            kind: kind.into(),
            detail: detail.into(),
        }
    }

    /// Resolve one player action for a room.
    ///
    /// Validation failures come back as a failed [`ActionResult`]; the
    /// stored state is only touched when the action applied cleanly.
    pub async fn process_action(
        &self,
        room_id: &str,
        envelope: &ActionEnvelope,
        ruleset: &Ruleset,
        at: OffsetDateTime,
    ) -> Result<ActionResult, EngineError> {
        let mut state = self.store.load_state(room_id).await?;

        let action = match envelope.decode() {
            Ok(action) => action,
            Err(message) => {
                debug!(room_id, player_id = %envelope.player_id, %message, "rejected envelope");
                return Ok(ActionResult::rejected(vec![message]));
            }
        };

        debug!(room_id, player_id = %action.player_id, action = %action.action_type(), "resolving action");
        let result = resolver::resolve(&mut state, ruleset, &action);
        if !result.success {
            debug!(room_id, errors = ?result.errors, "action rejected");
            return Ok(result);
        }

        let mut entries = vec![Self::entry(
            at,
            Some(action.player_id.clone()),
            format!("action:{}", action.action_type()),
            serde_json::to_string(&action.kind).unwrap_or_default(),
        )];

        // Last pass of the round ends it immediately.
        if state.phase == Phase::Main && state.turn.has_all_passed() {
            phases::enter_end(&mut state, ruleset);
            info!(room_id, round = state.round, "all players passed, round ended");
            entries.push(Self::entry(at, None, "phase:end", state.round.to_string()));
        }

        for entry in &entries {
            state.action_log.push(entry.clone());
        }
        self.store.save_state(room_id, &state).await?;
        for entry in entries {
            self.store.append_log(room_id, entry).await?;
        }
        Ok(result)
    }

    /// Start the game: prepare round 1 and enter the main phase.
    pub async fn start(
        &self,
        room_id: &str,
        ruleset: &Ruleset,
        at: OffsetDateTime,
    ) -> Result<Phase, EngineError> {
        let mut state = self.store.load_state(room_id).await?;
        if state.phase != Phase::Setup {
            return Err(DomainError::invariant(format!(
                "cannot start a game in {} phase",
                state.phase
            ))
            .into());
        }
        self.begin_round(&mut state, ruleset)?;
        info!(room_id, round = state.round, "game started");
        self.persist_transition(room_id, &mut state, at).await?;
        Ok(state.phase)
    }

    /// Advance the phase machine one step.
    ///
    /// `setup → main`, `main → end`, and `end →` either the next round's
    /// main phase (incrementing the round first) or, after the last round,
    /// terminal final scoring. A no-op at `finalScoring`.
    pub async fn advance_phase(
        &self,
        room_id: &str,
        ruleset: &Ruleset,
        at: OffsetDateTime,
    ) -> Result<Phase, EngineError> {
        let mut state = self.store.load_state(room_id).await?;
        match state.phase {
            Phase::Setup => {
                self.begin_round(&mut state, ruleset)?;
            }
            Phase::Main => {
                phases::enter_end(&mut state, ruleset);
            }
            Phase::End => {
                if state.round >= ruleset.rounds.max_rounds {
                    scoring::apply_final_scoring(&mut state, ruleset)?;
                } else {
                    state.round += 1;
                    self.begin_round(&mut state, ruleset)?;
                }
            }
            Phase::FinalScoring => return Ok(Phase::FinalScoring),
        }
        info!(room_id, round = state.round, phase = %state.phase, "phase advanced");
        self.persist_transition(room_id, &mut state, at).await?;
        Ok(state.phase)
    }

    fn begin_round(&self, state: &mut GameState, ruleset: &Ruleset) -> Result<(), EngineError> {
        let templates = self.deck_cache.get_or_build(|| ruleset.decks.clone());
        phases::prepare_round(state, ruleset, &templates)?;
        phases::enter_main(state);
        Ok(())
    }

    async fn persist_transition(
        &self,
        room_id: &str,
        state: &mut GameState,
        at: OffsetDateTime,
    ) -> Result<(), EngineError> {
        let entry = Self::entry(
            at,
            None,
            format!("phase:{}", state.phase),
            state.round.to_string(),
        );
        state.action_log.push(entry.clone());
        self.store.save_state(room_id, state).await?;
        self.store.append_log(room_id, entry).await?;
        Ok(())
    }
}
