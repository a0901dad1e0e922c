#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod catalog;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod store;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use catalog::Ruleset;
pub use domain::{Action, ActionEnvelope, ActionResult, GameState, Phase};
pub use error::EngineError;
pub use services::GameSession;
pub use store::{MemoryStore, StateStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
