//! Domain layer: pure game logic types and helpers.

pub mod actions;
pub mod board;
pub mod effects;
pub mod growth;
pub mod ids;
pub mod resources;
pub mod rules;
pub mod state;
pub mod triggers;
pub mod turn_order;

pub mod phases;
pub mod resolver;
pub mod scoring;

mod collect;
mod lab;
mod lens;
mod pacing;
mod task;
mod will;


#[cfg(test)]
mod tests_collect_labs;
#[cfg(test)]
mod tests_pacing;
#[cfg(test)]
mod tests_phases;
#[cfg(test)]
mod tests_props_wallet;
#[cfg(test)]
mod tests_tasks;

// Re-exports for ergonomics
pub use actions::{Action, ActionEnvelope, ActionKind, ActionResult, ActionType, TaskChoice};
pub use resolver::resolve;
pub use resources::{ResourceKind, ResourceWallet};
pub use state::{ActionLogEntry, GameState, Phase, PlayerState};
pub use turn_order::TurnOrder;
