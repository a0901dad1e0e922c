//! Final scoring: resource conversion, stagnation penalty, end-game effects.

use serde::{Deserialize, Serialize};

use crate::catalog::{CharacterProfile, Ruleset};
use crate::domain::effects::{Effect, EndGameCondition, EndGameEffect};
use crate::domain::resources::ResourceKind;
use crate::domain::state::{GameState, Phase, PlayerState};
use crate::errors::domain::DomainError;

/// Per-player classification of unlocked end-game effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndgameSummary {
    /// Additive bonus VP.
    pub bonus_vp: i64,
    /// Product of all multiplier effects.
    pub multiplier: f64,
    /// Flips the stagnation penalty's sign.
    pub convert_penalty: bool,
}

impl Default for EndgameSummary {
    fn default() -> Self {
        Self {
            bonus_vp: 0,
            multiplier: 1.0,
            convert_penalty: false,
        }
    }
}

fn condition_holds(player: &PlayerState, condition: EndGameCondition) -> bool {
    match condition {
        EndGameCondition::NoLightNoRainbow => {
            player.wallet.amount(ResourceKind::Light) == 0
                && player.wallet.amount(ResourceKind::Rainbow) == 0
        }
    }
}

/// Classify a player's unlocked end-game effects.
pub fn endgame_summary(player: &PlayerState, profile: &CharacterProfile) -> EndgameSummary {
    let mut summary = EndgameSummary::default();
    for node in &profile.nodes {
        if !player.unlocked_nodes.contains(&node.id) {
            continue;
        }
        let Effect::EndGame { effect } = &node.effect else {
            continue;
        };
        match effect {
            EndGameEffect::VpFlat { amount } => summary.bonus_vp += amount,
            EndGameEffect::ConditionalVp { amount, condition } => {
                if condition_holds(player, *condition) {
                    summary.bonus_vp += amount;
                }
            }
            EndGameEffect::VpMultiplier { factor } => summary.multiplier *= factor,
            EndGameEffect::ConvertNegativeVp => summary.convert_penalty = true,
        }
    }
    summary
}

/// Score every player and move the game to its terminal phase.
///
/// Order: resource→VP conversion, stagnation penalty (sign flipped by
/// `convertNegativeVp`), additive bonuses, then the composed multiplier
/// with the result rounded up. Deterministic: no randomness at this stage.
pub fn apply_final_scoring(state: &mut GameState, ruleset: &Ruleset) -> Result<(), DomainError> {
    if state.phase == Phase::FinalScoring {
        return Ok(());
    }

    let player_ids: Vec<String> = state.players.keys().cloned().collect();
    for player_id in player_ids {
        let (summary, converted, penalty) = {
            let player = state.require_player(&player_id)?;
            let profile = ruleset.character(&player.character_id)?;
            let summary = endgame_summary(player, profile);

            let rates = &ruleset.scoring.conversion;
            let converted = player.wallet.amount(ResourceKind::Light) as i64 * rates.light
                + player.wallet.amount(ResourceKind::Rainbow) as i64 * rates.rainbow
                + player.wallet.amount(ResourceKind::Stagnation) as i64 * rates.stagnation;
            let penalty = player.wallet.amount(ResourceKind::Stagnation) as i64
                * ruleset.scoring.stagnation_penalty;
            (summary, converted, penalty)
        };

        let player = state.require_player_mut(&player_id)?;
        player.vp += converted;
        if summary.convert_penalty {
            player.vp += penalty;
        } else {
            player.vp -= penalty;
        }
        player.vp += summary.bonus_vp;
        player.vp = (player.vp as f64 * summary.multiplier).ceil() as i64;
    }

    state.phase = Phase::FinalScoring;
    state.current_player = None;
    Ok(())
}
