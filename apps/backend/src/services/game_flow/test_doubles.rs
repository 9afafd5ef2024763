//! Deterministic port doubles for engine tests.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::adapters::catalog::CardCatalog;
use crate::adapters::archive::{CommittedGame, GameArchive};
use crate::domain::cards::{Card, CardId};
use crate::domain::state::{Outcome, RoundRecord};
use crate::errors::domain::{DomainError, InfraErrorKind};
use uuid::Uuid;

/// Catalog that deals cards in list order instead of at random, so tests
/// know exactly which card every round will see.
pub struct ScriptedCatalog {
    cards: Vec<Card>,
}

impl ScriptedCatalog {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

#[async_trait]
impl CardCatalog for ScriptedCatalog {
    async fn random_card(
        &self,
        exclude: &HashSet<CardId>,
        reveal_secret: bool,
    ) -> Result<Option<Card>, DomainError> {
        Ok(self
            .cards
            .iter()
            .find(|card| !exclude.contains(&card.id))
            .map(|card| {
                if reveal_secret {
                    card.clone()
                } else {
                    card.withholding_secret()
                }
            }))
    }

    async fn card_by_id(
        &self,
        id: CardId,
        reveal_secret: bool,
    ) -> Result<Option<Card>, DomainError> {
        Ok(self.cards.iter().find(|card| card.id == id).map(|card| {
            if reveal_secret {
                card.clone()
            } else {
                card.withholding_secret()
            }
        }))
    }
}

/// Catalog that loses track of every card the moment it must be fetched by
/// id, for exercising the integrity path.
pub struct AmnesiacCatalog {
    inner: ScriptedCatalog,
}

impl AmnesiacCatalog {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            inner: ScriptedCatalog::new(cards),
        }
    }
}

#[async_trait]
impl CardCatalog for AmnesiacCatalog {
    async fn random_card(
        &self,
        exclude: &HashSet<CardId>,
        reveal_secret: bool,
    ) -> Result<Option<Card>, DomainError> {
        self.inner.random_card(exclude, reveal_secret).await
    }

    async fn card_by_id(
        &self,
        _id: CardId,
        _reveal_secret: bool,
    ) -> Result<Option<Card>, DomainError> {
        Ok(None)
    }
}

/// Archive whose commits always fail, leaving terminal sessions in place.
pub struct FailingArchive;

#[async_trait]
impl GameArchive for FailingArchive {
    async fn commit_game(
        &self,
        _user_id: i64,
        _outcome: Outcome,
        _initial_card_ids: Vec<CardId>,
        _rounds: Vec<RoundRecord>,
    ) -> Result<Uuid, DomainError> {
        Err(DomainError::infra(
            InfraErrorKind::Unavailable,
            "archive is down",
        ))
    }

    async fn games_for_user(&self, _user_id: i64) -> Result<Vec<CommittedGame>, DomainError> {
        Ok(Vec::new())
    }

    async fn rounds_for_game(
        &self,
        _user_id: i64,
        _game_id: Uuid,
    ) -> Result<Vec<RoundRecord>, DomainError> {
        Err(DomainError::game_not_found("archive is down"))
    }
}
