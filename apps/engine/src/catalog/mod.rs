//! Immutable ruleset catalog.
//!
//! Reference data for one game configuration: labs, character profiles
//! (growth nodes, effects, lens specs), tasks, deck templates, and the
//! round/scoring configuration. Parsed from JSON exactly once; every field
//! lands in a statically typed variant (no loose maps survive loading).

pub mod deck_cache;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::effects::{CharacterNode, Cost, ResourceAmount, Reward};
use crate::domain::ids::{CardId, CharacterId, LabId, LensId, NodeId, TaskId};
use crate::domain::resources::ResourceWallet;
use crate::error::EngineError;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Per-round configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundConfig {
    pub max_rounds: u32,
    /// AP every player is reset to at round start.
    pub ap_supply: u32,
    /// Creativity added to every player at round start.
    pub creativity_stipend: u32,
    /// Public development row size.
    pub development_slots: usize,
    /// Public VP card row size.
    pub vp_slots: usize,
}

/// Resource to VP conversion rates applied at final scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRates {
    pub light: i64,
    pub rainbow: i64,
    pub stagnation: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub conversion: ConversionRates,
    /// VP subtracted per remaining stagnation token (added instead when a
    /// `convertNegativeVp` effect is unlocked).
    pub stagnation_penalty: i64,
}

/// Starting wallet capacities for new players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConfig {
    pub light_capacity: u32,
    pub rainbow_capacity: u32,
    pub stagnation_capacity: u32,
}

impl WalletConfig {
    pub fn new_wallet(&self) -> ResourceWallet {
        ResourceWallet::new(
            self.light_capacity,
            self.rainbow_capacity,
            self.stagnation_capacity,
        )
    }
}

/// A shared lab site: activation cost and rewards, reusable every turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabSpec {
    #[serde(default)]
    pub cost: Cost,
    pub rewards: Vec<Reward>,
}

/// Blueprint for one lens a character brings to the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LensSpec {
    pub id: LensId,
    #[serde(default)]
    pub cost: Cost,
    pub rewards: Vec<Reward>,
    pub lobby_slots: u32,
}

/// Static per-character data: growth graph and lens blueprints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    pub nodes: Vec<CharacterNode>,
    #[serde(default)]
    pub lenses: Vec<LensSpec>,
}

impl CharacterProfile {
    pub fn node(&self, node_id: &str) -> Option<&CharacterNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }
}

/// Thresholds a player must meet to complete a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequirement {
    /// Minimum held amounts, all of which must be met.
    #[serde(default)]
    pub resources: Vec<ResourceAmount>,
    /// Minimum number of the player's own lenses in exhausted state.
    #[serde(default)]
    pub min_exhausted_lenses: u32,
}

/// A shared task, completable once per player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    #[serde(default)]
    pub requirement: TaskRequirement,
    pub rewards: Vec<Reward>,
}

/// Ordered card-id templates the decks are shuffled from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckTemplates {
    pub development: Vec<CardId>,
    pub vp: Vec<CardId>,
}

/// Root catalog object supplied to every engine call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ruleset {
    pub rounds: RoundConfig,
    pub scoring: ScoringConfig,
    pub wallet: WalletConfig,
    pub labs: BTreeMap<LabId, LabSpec>,
    pub characters: BTreeMap<CharacterId, CharacterProfile>,
    pub tasks: BTreeMap<TaskId, TaskSpec>,
    pub decks: DeckTemplates,
}

impl Ruleset {
    /// Parse a full catalog document.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        serde_json::from_str(raw).map_err(|e| EngineError::RulesetParse(e.to_string()))
    }

    pub fn character(&self, character_id: &str) -> Result<&CharacterProfile, DomainError> {
        self.characters
            .get(character_id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Character, character_id))
    }

    /// Node lookup across a character's growth graph.
    pub fn character_node(
        &self,
        character_id: &str,
        node_id: &NodeId,
    ) -> Result<&CharacterNode, DomainError> {
        self.character(character_id)?
            .node(node_id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Node, node_id))
    }
}
