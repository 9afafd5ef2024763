//! In-memory append-only archive of finished games.

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use super::archive::{CommittedGame, GameArchive};
use crate::domain::cards::CardId;
use crate::domain::state::{Outcome, RoundRecord};
use crate::errors::domain::DomainError;

#[derive(Debug, Default)]
pub struct InMemoryArchive {
    games: RwLock<Vec<CommittedGame>>,
}

impl InMemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed games across all users.
    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }
}

#[async_trait]
impl GameArchive for InMemoryArchive {
    async fn commit_game(
        &self,
        user_id: i64,
        outcome: Outcome,
        initial_card_ids: Vec<CardId>,
        rounds: Vec<RoundRecord>,
    ) -> Result<Uuid, DomainError> {
        let id = Uuid::new_v4();
        let game = CommittedGame {
            id,
            user_id,
            outcome,
            initial_card_ids,
            rounds,
            completed_at: OffsetDateTime::now_utc(),
        };
        self.games.write().push(game);
        info!(game_id = %id, user_id, ?outcome, "game committed to archive");
        Ok(id)
    }

    async fn games_for_user(&self, user_id: i64) -> Result<Vec<CommittedGame>, DomainError> {
        Ok(self
            .games
            .read()
            .iter()
            .filter(|game| game.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn rounds_for_game(
        &self,
        user_id: i64,
        game_id: Uuid,
    ) -> Result<Vec<RoundRecord>, DomainError> {
        self.games
            .read()
            .iter()
            .find(|game| game.id == game_id && game.user_id == user_id)
            .map(|game| game.rounds.clone())
            .ok_or_else(|| {
                DomainError::game_not_found(format!("game {game_id} not found for user {user_id}"))
            })
    }
}
