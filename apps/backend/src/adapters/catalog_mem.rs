//! In-memory card catalog backed by a fixed card list.

use std::collections::HashSet;

use async_trait::async_trait;
use rand::seq::IndexedRandom;

use super::catalog::CardCatalog;
use crate::domain::cards::{Card, CardId};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    cards: Vec<Card>,
}

impl InMemoryCatalog {
    /// Seed from a card list. Every card must carry its misfortune index;
    /// the reveal flag decides per lookup whether it leaves the catalog.
    pub fn new(cards: Vec<Card>) -> Result<Self, DomainError> {
        for card in &cards {
            card.require_misfortune_index()?;
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn shaped(card: &Card, reveal_secret: bool) -> Card {
        if reveal_secret {
            card.clone()
        } else {
            card.withholding_secret()
        }
    }
}

#[async_trait]
impl CardCatalog for InMemoryCatalog {
    async fn random_card(
        &self,
        exclude: &HashSet<CardId>,
        reveal_secret: bool,
    ) -> Result<Option<Card>, DomainError> {
        let candidates: Vec<&Card> = self
            .cards
            .iter()
            .filter(|card| !exclude.contains(&card.id))
            .collect();
        Ok(candidates
            .choose(&mut rand::rng())
            .map(|card| Self::shaped(card, reveal_secret)))
    }

    async fn card_by_id(
        &self,
        id: CardId,
        reveal_secret: bool,
    ) -> Result<Option<Card>, DomainError> {
        Ok(self
            .cards
            .iter()
            .find(|card| card.id == id)
            .map(|card| Self::shaped(card, reveal_secret)))
    }
}
