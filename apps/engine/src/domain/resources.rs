//! Resource wallet: three capped counters with an optional unlimited override.

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// The three spendable board resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Light,
    Rainbow,
    Stagnation,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Light,
        ResourceKind::Rainbow,
        ResourceKind::Stagnation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Light => "light",
            ResourceKind::Rainbow => "rainbow",
            ResourceKind::Stagnation => "stagnation",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One counter of the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePool {
    pub current: u32,
    pub max_capacity: u32,
    /// Capacity override granted by character abilities.
    #[serde(default)]
    pub unlimited: bool,
}

impl ResourcePool {
    pub fn with_capacity(max_capacity: u32) -> Self {
        Self {
            current: 0,
            max_capacity,
            unlimited: false,
        }
    }
}

/// Per-player wallet of the three resources.
///
/// Credits must be rejected before mutation when they would overflow a
/// capped pool; they are never clamped. Debits floor at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceWallet {
    light: ResourcePool,
    rainbow: ResourcePool,
    stagnation: ResourcePool,
}

impl ResourceWallet {
    pub fn new(light_capacity: u32, rainbow_capacity: u32, stagnation_capacity: u32) -> Self {
        Self {
            light: ResourcePool::with_capacity(light_capacity),
            rainbow: ResourcePool::with_capacity(rainbow_capacity),
            stagnation: ResourcePool::with_capacity(stagnation_capacity),
        }
    }

    pub fn pool(&self, kind: ResourceKind) -> &ResourcePool {
        match kind {
            ResourceKind::Light => &self.light,
            ResourceKind::Rainbow => &self.rainbow,
            ResourceKind::Stagnation => &self.stagnation,
        }
    }

    fn pool_mut(&mut self, kind: ResourceKind) -> &mut ResourcePool {
        match kind {
            ResourceKind::Light => &mut self.light,
            ResourceKind::Rainbow => &mut self.rainbow,
            ResourceKind::Stagnation => &mut self.stagnation,
        }
    }

    pub fn amount(&self, kind: ResourceKind) -> u32 {
        self.pool(kind).current
    }

    /// Whether crediting `amount` would respect the capacity invariant.
    pub fn can_credit(&self, kind: ResourceKind, amount: u32) -> bool {
        let pool = self.pool(kind);
        if pool.unlimited {
            return true;
        }
        match pool.current.checked_add(amount) {
            Some(total) => total <= pool.max_capacity,
            None => false,
        }
    }

    /// Credit `amount`, rejecting (not clamping) capacity overflows.
    pub fn credit(&mut self, kind: ResourceKind, amount: u32) -> Result<(), DomainError> {
        let pool = self.pool_mut(kind);
        let total = pool
            .current
            .checked_add(amount)
            .ok_or_else(|| DomainError::invariant(format!("{kind} counter overflow")))?;
        if !pool.unlimited && total > pool.max_capacity {
            return Err(DomainError::capacity(format!(
                "{kind} {total} over capacity {}",
                pool.max_capacity
            )));
        }
        pool.current = total;
        Ok(())
    }

    /// Debit `amount`, flooring at zero.
    pub fn debit(&mut self, kind: ResourceKind, amount: u32) {
        let pool = self.pool_mut(kind);
        pool.current = pool.current.saturating_sub(amount);
    }

    pub fn set_unlimited(&mut self, kind: ResourceKind) {
        self.pool_mut(kind).unlimited = true;
    }

    pub fn raise_capacity(&mut self, kind: ResourceKind, amount: u32) {
        let pool = self.pool_mut(kind);
        pool.max_capacity = pool.max_capacity.saturating_add(amount);
    }
}
