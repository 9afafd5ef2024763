//! Domain-level error type used across services, stores, and adapters.
//!
//! This error type is transport-agnostic. Embedders map the variants onto
//! whatever error surface their transport uses; none of them is ever
//! retried automatically by the engine.

use thiserror::Error;

/// Internal-consistency failure kinds.
///
/// These indicate a disagreement between the engine's own bookkeeping and a
/// collaborator. They are fatal for the request that hit them and must never
/// be reported to the player as a normal gameplay loss.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IntegrityKind {
    /// A card id the engine itself recorded is missing from the catalog.
    CardMissing,
    /// The catalog could not supply a card outside the exclusion set.
    CatalogExhausted,
    /// A card that must carry its misfortune index arrived without one.
    SecretWithheld,
}

/// Infra error kinds to distinguish operational failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    /// A collaborator behind a port is unreachable or failing.
    Unavailable,
    Other(String),
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DomainError {
    /// No game session exists for the caller's key.
    #[error("session not found: {0}")]
    SessionNotFound(String),
    /// Guess resolution was requested with no outstanding round.
    #[error("no active round: {0}")]
    NoActiveRound(String),
    /// The game already reached a terminal outcome.
    #[error("game already complete: {0}")]
    GameAlreadyComplete(String),
    /// Archive lookup missed, or the game belongs to a different user.
    #[error("game not found: {0}")]
    GameNotFound(String),
    /// Input or business-rule violation.
    #[error("validation error: {0}")]
    Validation(String),
    /// Internal inconsistency between the engine and a collaborator.
    #[error("integrity error {kind:?}: {detail}")]
    Integrity { kind: IntegrityKind, detail: String },
    /// Infrastructure/operational failure.
    #[error("infra error {kind:?}: {detail}")]
    Infra { kind: InfraErrorKind, detail: String },
}

impl DomainError {
    pub fn session_not_found(detail: impl Into<String>) -> Self {
        Self::SessionNotFound(detail.into())
    }
    pub fn no_active_round(detail: impl Into<String>) -> Self {
        Self::NoActiveRound(detail.into())
    }
    pub fn game_already_complete(detail: impl Into<String>) -> Self {
        Self::GameAlreadyComplete(detail.into())
    }
    pub fn game_not_found(detail: impl Into<String>) -> Self {
        Self::GameNotFound(detail.into())
    }
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn integrity(kind: IntegrityKind, detail: impl Into<String>) -> Self {
        Self::Integrity {
            kind,
            detail: detail.into(),
        }
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra {
            kind,
            detail: detail.into(),
        }
    }
}
