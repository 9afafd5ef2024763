#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod store;
pub mod telemetry;
pub mod utils;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use adapters::archive::{CommittedGame, GameArchive};
pub use adapters::archive_mem::InMemoryArchive;
pub use adapters::catalog::CardCatalog;
pub use adapters::catalog_mem::InMemoryCatalog;
pub use config::game::GameConfig;
pub use domain::cards::{Card, CardId, MisfortuneIndex};
pub use domain::identity::{PlayerIdentity, SessionKey};
pub use domain::state::{GameSession, Outcome, Phase, RoundRecord};
pub use errors::domain::DomainError;
pub use services::game_flow::{GameEngine, GuessResolution};
pub use store::rounds::RoundTimer;
pub use store::sessions::SessionStore;
pub use utils::session_token::generate_anonymous_token;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
