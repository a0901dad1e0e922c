//! Root aggregate: one `GameState` per room.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::board::Board;
use crate::domain::effects::{Cost, Reward};
use crate::domain::ids::{CardId, CharacterId, LensId, NodeId, PlayerId, TaskId};
use crate::domain::resources::{ResourceKind, ResourceWallet};
use crate::domain::turn_order::TurnOrder;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Overall game progression phases. `FinalScoring` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Setup,
    Main,
    End,
    FinalScoring,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Main => "main",
            Phase::End => "end",
            Phase::FinalScoring => "finalScoring",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-player state, mutated only by action appliers and the phase manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub id: PlayerId,
    pub character_id: CharacterId,
    /// Action points, replenished each round.
    pub ap: u32,
    pub creativity: u32,
    /// May go negative before final scoring resolves bonuses.
    pub vp: i64,
    pub wallet: ResourceWallet,
    pub unlocked_nodes: BTreeSet<NodeId>,
    pub completed_tasks: BTreeSet<TaskId>,
    pub has_passed: bool,
    pub is_rooting: bool,
    /// Lobby pieces available for deployment.
    pub lobby_stock: u32,
    /// Lobby pieces spent on lab deployments.
    pub deployed_lobby: u32,
    pub owned_lenses: Vec<LensId>,
    pub collected_cards: Vec<CardId>,
}

impl PlayerState {
    pub fn new(
        id: impl Into<PlayerId>,
        character_id: impl Into<CharacterId>,
        wallet: ResourceWallet,
    ) -> Self {
        Self {
            id: id.into(),
            character_id: character_id.into(),
            ap: 0,
            creativity: 0,
            vp: 0,
            wallet,
            unlocked_nodes: BTreeSet::new(),
            completed_tasks: BTreeSet::new(),
            has_passed: false,
            is_rooting: false,
            lobby_stock: 0,
            deployed_lobby: 0,
            owned_lenses: Vec::new(),
            collected_cards: Vec::new(),
        }
    }

    /// Affordability problems with paying `cost`, as player-facing messages.
    pub fn cost_errors(&self, cost: &Cost) -> Vec<String> {
        let mut errors = Vec::new();
        if self.ap < cost.ap {
            errors.push(format!(
                "not enough action points: need {}, have {}",
                cost.ap, self.ap
            ));
        }
        if self.creativity < cost.creativity {
            errors.push(format!(
                "not enough creativity: need {}, have {}",
                cost.creativity, self.creativity
            ));
        }
        for entry in &cost.resources {
            if self.wallet.amount(entry.kind) < entry.amount {
                errors.push(format!(
                    "not enough {}: need {}, have {}",
                    entry.kind,
                    entry.amount,
                    self.wallet.amount(entry.kind)
                ));
            }
        }
        if self.lobby_stock < cost.lobby {
            errors.push(format!(
                "not enough lobby pieces: need {}, have {}",
                cost.lobby, self.lobby_stock
            ));
        }
        errors
    }

    /// Debit `cost`. All debits floor at zero; lobby pieces spent this way
    /// are recorded as deployed.
    pub fn pay(&mut self, cost: &Cost) {
        self.ap = self.ap.saturating_sub(cost.ap);
        self.creativity = self.creativity.saturating_sub(cost.creativity);
        for entry in &cost.resources {
            self.wallet.debit(entry.kind, entry.amount);
        }
        self.lobby_stock = self.lobby_stock.saturating_sub(cost.lobby);
        self.deployed_lobby += cost.lobby;
    }

    /// Resource rewards that would overflow capacity, as player-facing
    /// messages. Kinds in `exempt` are skipped (they will be made unlimited
    /// before the credit happens).
    pub fn reward_overflow_errors(&self, rewards: &[Reward], exempt: &[ResourceKind]) -> Vec<String> {
        let mut errors = Vec::new();
        for reward in rewards {
            if let Reward::Resource { resource, amount } = reward {
                if exempt.contains(resource) {
                    continue;
                }
                if !self.wallet.can_credit(*resource, *amount) {
                    errors.push(format!(
                        "reward of {amount} {resource} would exceed capacity"
                    ));
                }
            }
        }
        errors
    }

    /// Credit every reward entry. Capacity overflows error out instead of
    /// clamping; validators are expected to have screened them.
    pub fn grant(&mut self, rewards: &[Reward]) -> Result<(), DomainError> {
        for reward in rewards {
            match reward {
                Reward::Resource { resource, amount } => {
                    self.wallet.credit(*resource, *amount)?;
                }
                Reward::Vp { amount } => self.vp += amount,
                Reward::Creativity { amount } => {
                    self.creativity = self.creativity.saturating_add(*amount);
                }
                Reward::Capacity { resource, amount } => {
                    self.wallet.raise_capacity(*resource, *amount);
                }
            }
        }
        Ok(())
    }
}

/// Append-only audit record of one applied action or lifecycle transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLogEntry {
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
    pub player_id: Option<PlayerId>,
    pub kind: String,
    pub detail: String,
}

/// Entire room state, sufficient for every domain operation.
///
/// Invariants: `current_player` is a member of `turn.order()` whenever the
/// order is non-empty, and the order contains exactly the ids in `players`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub round: u32,
    pub phase: Phase,
    pub current_player: Option<PlayerId>,
    pub turn: TurnOrder,
    pub players: BTreeMap<PlayerId, PlayerState>,
    /// Stable player-creation order; seeds round 1's turn order.
    pub join_order: Vec<PlayerId>,
    pub board: Board,
    pub development_deck: Vec<CardId>,
    pub vp_deck: Vec<CardId>,
    /// Publicly visible VP card row.
    pub vp_row: Vec<CardId>,
    pub rng_seed: i64,
    pub decks_initialized: bool,
    pub action_log: Vec<ActionLogEntry>,
}

impl GameState {
    /// Fresh room state: round 1, setup phase, no players.
    pub fn new(rng_seed: i64) -> Self {
        Self {
            round: 1,
            phase: Phase::Setup,
            current_player: None,
            turn: TurnOrder::default(),
            players: BTreeMap::new(),
            join_order: Vec::new(),
            board: Board::default(),
            development_deck: Vec::new(),
            vp_deck: Vec::new(),
            vp_row: Vec::new(),
            rng_seed,
            decks_initialized: false,
            action_log: Vec::new(),
        }
    }

    pub fn require_player(&self, player_id: &str) -> Result<&PlayerState, DomainError> {
        self.players
            .get(player_id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, player_id))
    }

    pub fn require_player_mut(&mut self, player_id: &str) -> Result<&mut PlayerState, DomainError> {
        self.players
            .get_mut(player_id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, player_id))
    }

    pub fn is_current_player(&self, player_id: &str) -> bool {
        self.current_player.as_deref() == Some(player_id)
    }

    /// Whether any player has taken the rooting action this round.
    pub fn any_rooting(&self) -> bool {
        self.turn.rooting().is_some() || self.players.values().any(|p| p.is_rooting)
    }
}
