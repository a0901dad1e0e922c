//! Player action types and the raw command envelope used by transports.

use serde::{Deserialize, Serialize};

use crate::domain::ids::{LabId, LensId, NodeId, PlayerId, TaskId};

/// The nine resolvable action types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    LabActivate,
    LensActivate,
    Move,
    Refresh,
    Collect,
    Will,
    Task,
    Rooting,
    Pass,
}

impl ActionType {
    pub fn name(self) -> &'static str {
        match self {
            ActionType::LabActivate => "labActivate",
            ActionType::LensActivate => "lensActivate",
            ActionType::Move => "move",
            ActionType::Refresh => "refresh",
            ActionType::Collect => "collect",
            ActionType::Will => "will",
            ActionType::Task => "task",
            ActionType::Rooting => "rooting",
            ActionType::Pass => "pass",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reward selection for a completed task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "choice", rename_all = "camelCase")]
pub enum TaskChoice {
    #[serde(rename_all = "camelCase")]
    Growth { node_id: NodeId },
    Lobby,
}

/// Action payload, adjacently tagged to match the wire envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "actionType", content = "payload", rename_all = "camelCase")]
pub enum ActionKind {
    #[serde(rename_all = "camelCase")]
    LabActivate { lab_id: LabId },
    #[serde(rename_all = "camelCase")]
    LensActivate { lens_id: LensId },
    #[serde(rename_all = "camelCase")]
    Move { lens_id: LensId },
    #[serde(rename_all = "camelCase")]
    Refresh { lens_id: LensId },
    #[serde(rename_all = "camelCase")]
    Collect { slot_index: usize },
    #[serde(rename_all = "camelCase")]
    Will { node_id: NodeId },
    #[serde(rename_all = "camelCase")]
    Task {
        task_id: TaskId,
        reward_choice: TaskChoice,
    },
    Rooting,
    Pass,
}

impl ActionKind {
    pub fn action_type(&self) -> ActionType {
        match self {
            ActionKind::LabActivate { .. } => ActionType::LabActivate,
            ActionKind::LensActivate { .. } => ActionType::LensActivate,
            ActionKind::Move { .. } => ActionType::Move,
            ActionKind::Refresh { .. } => ActionType::Refresh,
            ActionKind::Collect { .. } => ActionType::Collect,
            ActionKind::Will { .. } => ActionType::Will,
            ActionKind::Task { .. } => ActionType::Task,
            ActionKind::Rooting => ActionType::Rooting,
            ActionKind::Pass => ActionType::Pass,
        }
    }
}

/// A fully decoded player action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub player_id: PlayerId,
    #[serde(flatten)]
    pub kind: ActionKind,
}

impl Action {
    pub fn new(player_id: impl Into<PlayerId>, kind: ActionKind) -> Self {
        Self {
            player_id: player_id.into(),
            kind,
        }
    }

    pub fn action_type(&self) -> ActionType {
        self.kind.action_type()
    }
}

/// Raw `{playerId, actionType, payload}` command as received from transports.
///
/// Decoding failures are business-rule errors (a client sent something the
/// rules engine does not understand), never transport faults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionEnvelope {
    pub player_id: PlayerId,
    pub action_type: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl ActionEnvelope {
    pub fn new(
        player_id: impl Into<PlayerId>,
        action_type: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            player_id: player_id.into(),
            action_type: action_type.into(),
            payload,
        }
    }

    /// Decode into a typed [`Action`].
    ///
    /// Returns a human-readable error string for unknown action types or
    /// malformed payloads.
    pub fn decode(&self) -> Result<Action, String> {
        let known: Result<ActionType, _> =
            serde_json::from_value(serde_json::Value::String(self.action_type.clone()));
        if known.is_err() {
            return Err("unsupported action type".to_string());
        }

        let tagged = serde_json::json!({
            "actionType": self.action_type,
            "payload": self.payload,
        });
        let kind: ActionKind = serde_json::from_value(tagged)
            .map_err(|e| format!("invalid {} payload: {e}", self.action_type))?;
        Ok(Action {
            player_id: self.player_id.clone(),
            kind,
        })
    }
}

/// Outcome of resolving one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ActionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            errors: Vec::new(),
        }
    }

    pub fn rejected(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
        }
    }
}
