//! Core card types: CardId, MisfortuneIndex, Card.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, IntegrityKind};

/// Catalog identity of a card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub i64);

/// Secret ranking value of a card, in `1..=100`.
///
/// This is the value the whole game hides: it must never reach a client
/// while a round for the card is unresolved.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MisfortuneIndex(u8);

impl MisfortuneIndex {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(format!(
                "misfortune index {value} outside {}..={}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Immutable card value as served by the catalog.
///
/// `misfortune_index` is `None` whenever the secret is withheld; serde drops
/// the field entirely in that case so a withheld card and a revealed card
/// have visibly different wire shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub misfortune_index: Option<MisfortuneIndex>,
}

impl Card {
    /// The misfortune index, or an integrity error when the card arrived
    /// without one on a path that requires it.
    pub fn require_misfortune_index(&self) -> Result<MisfortuneIndex, DomainError> {
        self.misfortune_index.ok_or_else(|| {
            DomainError::integrity(
                IntegrityKind::SecretWithheld,
                format!("card {} is missing its misfortune index", self.id.0),
            )
        })
    }

    /// Copy of the card with the secret stripped, for payloads that leave
    /// the server mid-round.
    pub fn withholding_secret(&self) -> Card {
        Card {
            misfortune_index: None,
            ..self.clone()
        }
    }
}
