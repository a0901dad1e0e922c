//! Domain-level error type for invariant failures.
//!
//! This is the second error class of the engine: a precondition that an
//! `apply` step assumed safe turned out false. Ordinary business-rule
//! violations are *not* represented here; validators report those as plain
//! string lists inside a failed `ActionResult` and never raise an error.
//! A `DomainError` escaping an apply step is caught once at the resolver
//! boundary and converted into a failed result, so it can never corrupt the
//! surrounding request cycle.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Entities an apply step may fail to re-resolve (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    Character,
    Node,
    Lens,
    Lab,
    Task,
    Card,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A referenced entity vanished between validate and apply.
    NotFound(NotFoundKind, String),
    /// A resource credit would exceed its capacity.
    Capacity(String),
    /// Any other broken precondition.
    Invariant(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Capacity(d) => write!(f, "capacity exceeded: {d}"),
            DomainError::Invariant(d) => write!(f, "invariant violated: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn capacity(detail: impl Into<String>) -> Self {
        Self::Capacity(detail.into())
    }
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }
}
