//! Typed cost/reward/effect payloads.
//!
//! The catalog parses every effect into one of these tagged unions exactly
//! once at ruleset-load time; validators and appliers never re-interpret
//! loosely typed maps.

use serde::{Deserialize, Serialize};

use crate::domain::actions::ActionType;
use crate::domain::ids::NodeId;
use crate::domain::resources::ResourceKind;

/// A quantity of one resource, used in costs, thresholds, and bonuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAmount {
    pub kind: ResourceKind,
    pub amount: u32,
}

/// Composite activation cost. Absent components default to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cost {
    #[serde(default)]
    pub ap: u32,
    #[serde(default)]
    pub creativity: u32,
    #[serde(default)]
    pub resources: Vec<ResourceAmount>,
    #[serde(default)]
    pub lobby: u32,
}

/// A single reward entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Reward {
    #[serde(rename_all = "camelCase")]
    Resource { resource: ResourceKind, amount: u32 },
    Vp { amount: i64 },
    Creativity { amount: u32 },
    #[serde(rename_all = "camelCase")]
    Capacity { resource: ResourceKind, amount: u32 },
}

/// Game events character trigger effects may react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerKind {
    LensActivatedByOther,
    DevelopmentSlotFreed,
    ActionPerformed,
}

/// Condition gating a conditional end-game bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EndGameCondition {
    /// Both light and rainbow are at zero when scoring runs.
    NoLightNoRainbow,
}

/// Effect applied exactly once during final scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EndGameEffect {
    VpFlat {
        amount: i64,
    },
    ConditionalVp {
        amount: i64,
        condition: EndGameCondition,
    },
    VpMultiplier {
        factor: f64,
    },
    ConvertNegativeVp,
}

/// Behavior of one character growth node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Effect {
    /// Applied once when the node is unlocked: permanent capacity bonuses.
    Passive {
        #[serde(default)]
        capacity: Vec<ResourceAmount>,
    },
    /// Invocable via the `will` action.
    Active {
        #[serde(default)]
        cost: Cost,
        rewards: Vec<Reward>,
        /// Resources granted unlimited capacity before rewards are credited.
        #[serde(default)]
        unlimited: Vec<ResourceKind>,
    },
    /// Fires automatically when a matching game event occurs.
    Trigger {
        event: TriggerKind,
        /// For `actionPerformed`: restricts the match to one action type.
        #[serde(default)]
        action: Option<ActionType>,
        vp: i64,
    },
    /// Deferred to final scoring.
    EndGame { effect: EndGameEffect },
}

/// One node of a character's growth graph.
///
/// Prerequisites use OR semantics: the node is reachable once *any* listed
/// prerequisite is unlocked. `auto_unlock` nodes are granted for free and
/// can never be chosen by a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterNode {
    pub id: NodeId,
    #[serde(default)]
    pub prerequisites: Vec<NodeId>,
    #[serde(default)]
    pub auto_unlock: bool,
    pub effect: Effect,
}
