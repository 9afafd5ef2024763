//! Domain layer: pure game logic types and helpers.

pub mod cards;
pub mod identity;
pub mod position;
pub mod rules;
pub mod state;

#[cfg(test)]
mod tests_position;

// Re-exports for ergonomics
pub use cards::{Card, CardId, MisfortuneIndex};
pub use identity::{PlayerIdentity, SessionKey};
pub use position::correct_position;
pub use state::{Applied, GameSession, Outcome, Phase, RoundRecord};
