//! Completed-game archive port: the persistence handoff boundary.

use async_trait::async_trait;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::cards::CardId;
use crate::domain::state::{Outcome, RoundRecord};
use crate::errors::domain::DomainError;

/// Immutable historical record of a finished game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommittedGame {
    pub id: Uuid,
    pub user_id: i64,
    pub outcome: Outcome,
    /// Ids of the three starting cards, in deal order.
    pub initial_card_ids: Vec<CardId>,
    pub rounds: Vec<RoundRecord>,
    pub completed_at: OffsetDateTime,
}

/// Write/read boundary for finished games.
///
/// Commits are append-only, never mutate a prior commit, and only ever
/// carry authenticated identities; demo games never reach this trait.
#[async_trait]
pub trait GameArchive: Send + Sync {
    /// Persist a finished game and return its archive id.
    async fn commit_game(
        &self,
        user_id: i64,
        outcome: Outcome,
        initial_card_ids: Vec<CardId>,
        rounds: Vec<RoundRecord>,
    ) -> Result<Uuid, DomainError>;

    /// All games committed by the user, oldest first.
    async fn games_for_user(&self, user_id: i64) -> Result<Vec<CommittedGame>, DomainError>;

    /// Round history for one of the user's games. `GameNotFound` covers
    /// both a missing id and a game owned by someone else.
    async fn rounds_for_game(
        &self,
        user_id: i64,
        game_id: Uuid,
    ) -> Result<Vec<RoundRecord>, DomainError>;
}
