//! The three session-lifecycle operations: start game, start round,
//! resolve guess.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, error, info};

use super::payloads::GuessResolution;
use crate::adapters::archive::GameArchive;
use crate::adapters::catalog::CardCatalog;
use crate::config::game::GameConfig;
use crate::domain::cards::{Card, CardId};
use crate::domain::identity::PlayerIdentity;
use crate::domain::position::correct_position;
use crate::domain::rules::INITIAL_HAND;
use crate::domain::state::{GameSession, Outcome, RoundRecord};
use crate::errors::domain::{DomainError, IntegrityKind};
use crate::store::rounds::RoundTimer;
use crate::store::sessions::SessionStore;

/// Server-authoritative orchestrator for one deployment's game sessions.
///
/// All shared mutable state lives in the two per-key stores; the catalog
/// and archive are consulted through their ports and never trusted with
/// timing or secrecy decisions.
pub struct GameEngine {
    catalog: Arc<dyn CardCatalog>,
    archive: Arc<dyn GameArchive>,
    pub(crate) sessions: SessionStore,
    pub(crate) timer: RoundTimer,
}

impl GameEngine {
    pub fn new(
        catalog: Arc<dyn CardCatalog>,
        archive: Arc<dyn GameArchive>,
        config: GameConfig,
    ) -> Self {
        Self {
            catalog,
            archive,
            sessions: SessionStore::new(),
            timer: RoundTimer::new(config),
        }
    }

    /// Number of games currently in play.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Start (or restart) a game: deal three distinct cards with their
    /// misfortune indexes revealed and seed a fresh session.
    ///
    /// Any prior game for the same key, finished or not, is discarded.
    pub async fn start_game(&self, identity: &PlayerIdentity) -> Result<Vec<Card>, DomainError> {
        let key = identity.key();

        let mut cards: Vec<Card> = Vec::with_capacity(INITIAL_HAND);
        let mut exclude: HashSet<CardId> = HashSet::with_capacity(INITIAL_HAND);
        for _ in 0..INITIAL_HAND {
            let card = self
                .catalog
                .random_card(&exclude, true)
                .await?
                .ok_or_else(|| {
                    DomainError::integrity(
                        IntegrityKind::CatalogExhausted,
                        "catalog cannot supply an initial hand",
                    )
                })?;
            exclude.insert(card.id);
            cards.push(card);
        }

        let session = GameSession::new(cards.clone())?;
        // A round dealt in a discarded game must not leak into this one.
        self.timer.cancel(key);
        self.sessions.create(key.clone(), session);
        info!(%key, authenticated = identity.is_authenticated(), "game started");
        Ok(cards)
    }

    /// Deal one card for a new round, with its misfortune index withheld.
    ///
    /// Dealing while a round is already outstanding discards the stale
    /// round (last-deal-wins).
    pub async fn start_round(&self, identity: &PlayerIdentity) -> Result<Card, DomainError> {
        let key = identity.key();
        let session = self.sessions.get(key)?;
        session.require_dealable()?;

        let card = self
            .catalog
            .random_card(&session.used_card_ids, false)
            .await?
            .ok_or_else(|| {
                DomainError::integrity(
                    IntegrityKind::CatalogExhausted,
                    format!("no undealt card left for {key}"),
                )
            })?;
        // The engine is the secrecy authority; never rely on the gateway
        // honoring the reveal flag.
        let card = card.withholding_secret();

        // The closure re-checks the phase so a concurrent resolve that
        // finished the game cannot be overwritten by this deal.
        self.sessions.mutate(key, |s| s.mark_round_dealt(card.id))?;
        self.timer.begin(key.clone(), card.id);
        debug!(%key, card_id = card.id.0, "round dealt");
        Ok(card)
    }

    /// Resolve the outstanding round against the claimed guess.
    ///
    /// The round timer has the final say on the guess; the whole state
    /// transition is applied under the session's lock, and a terminal
    /// transition hands the finished game to the archive exactly once.
    pub async fn resolve_guess(
        &self,
        identity: &PlayerIdentity,
        claimed_guess: Option<usize>,
    ) -> Result<GuessResolution, DomainError> {
        let key = identity.key();
        self.sessions.get(key)?.require_round_active()?;

        let pending = self.timer.peek(key)?;
        let card = self
            .catalog
            .card_by_id(pending.card_id, true)
            .await?
            .ok_or_else(|| {
                error!(%key, card_id = pending.card_id.0, "dealt card vanished from catalog");
                DomainError::integrity(
                    IntegrityKind::CardMissing,
                    format!("card {} missing from catalog", pending.card_id.0),
                )
            })?;
        let candidate = card.require_misfortune_index()?;

        // Everything fallible about collaborators is done; from here the
        // transition applies fully: consume the timer, then advance the
        // session under its lock.
        let final_guess = self.timer.resolve(key, pending.card_id, claimed_guess)?;
        let authenticated = identity.is_authenticated();
        let card_for_state = card.clone();
        let (applied, position, handoff) = self.sessions.mutate(key, move |s| {
            let position = correct_position(candidate, &s.owned_cards)?;
            let applied = s.apply_resolution(card_for_state, position, final_guess, authenticated)?;
            let handoff = applied
                .outcome
                .map(|_| (s.initial_card_ids(), s.rounds.clone()));
            Ok((applied, position, handoff))
        })?;

        debug!(
            %key,
            card_id = card.id.0,
            position,
            is_correct = applied.is_correct,
            timed_out = final_guess.is_none() && claimed_guess.is_some(),
            "guess resolved"
        );

        if let (Some(outcome), Some((initial_card_ids, rounds))) = (applied.outcome, handoff) {
            self.finish_game(identity, outcome, initial_card_ids, rounds)
                .await?;
        }

        let card = if applied.is_correct {
            card
        } else {
            card.withholding_secret()
        };
        Ok(GuessResolution {
            card,
            correct_position: position,
            is_correct: applied.is_correct,
            outcome: applied.outcome,
        })
    }

    /// Terminal handoff: archive authenticated games, then evict.
    ///
    /// Eviction happens only after a successful commit; a failed commit
    /// leaves the session in its terminal phase, where every further call
    /// reports `GameAlreadyComplete` rather than replaying the game.
    async fn finish_game(
        &self,
        identity: &PlayerIdentity,
        outcome: Outcome,
        initial_card_ids: Vec<CardId>,
        rounds: Vec<RoundRecord>,
    ) -> Result<(), DomainError> {
        let key = identity.key();
        self.timer.cancel(key);
        if let Some(user_id) = identity.user_id() {
            let game_id = self
                .archive
                .commit_game(user_id, outcome, initial_card_ids, rounds)
                .await?;
            info!(%key, %game_id, ?outcome, "game finished and archived");
        } else {
            debug!(%key, ?outcome, "demo game finished; leaving no trace");
        }
        self.sessions.remove(key);
        Ok(())
    }
}
