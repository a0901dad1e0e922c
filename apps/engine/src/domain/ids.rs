//! Identifier aliases shared across the domain.
//!
//! Room documents address everything by string id; the aliases keep
//! signatures readable without introducing newtype ceremony.

pub type PlayerId = String;
pub type CharacterId = String;
pub type NodeId = String;
pub type LensId = String;
pub type LabId = String;
pub type TaskId = String;
pub type CardId = String;
