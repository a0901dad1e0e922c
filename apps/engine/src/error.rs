//! Service-level error type.
//!
//! Wraps the domain and store error classes for callers of `GameSession`.
//! Transport layers are expected to log `Domain` variants distinctly from
//! ordinary rule violations, which never surface here (they travel inside a
//! failed `ActionResult`).

use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("ruleset parse error: {0}")]
    RulesetParse(String),
}
