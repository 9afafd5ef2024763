//! Card catalog port.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::cards::{Card, CardId};
use crate::errors::domain::DomainError;

/// Read gateway to the card catalog.
///
/// `reveal_secret` controls whether the returned card carries its
/// misfortune index. Deal paths pass `false` so the secret never even
/// enters the process of building a response for an unresolved round.
#[async_trait]
pub trait CardCatalog: Send + Sync {
    /// One card chosen uniformly at random outside `exclude`, if any
    /// remain.
    async fn random_card(
        &self,
        exclude: &HashSet<CardId>,
        reveal_secret: bool,
    ) -> Result<Option<Card>, DomainError>;

    /// Card by id.
    async fn card_by_id(
        &self,
        id: CardId,
        reveal_secret: bool,
    ) -> Result<Option<Card>, DomainError>;
}
