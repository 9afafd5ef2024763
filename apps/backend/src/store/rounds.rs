//! Active-round table: the sole timing authority for guess resolution.
//!
//! A round starts when its card is dealt and is consumed exactly once when
//! the guess is resolved. Expiry is evaluated lazily at resolve time from
//! the server's own clock; caller-supplied timestamps play no part.

use dashmap::DashMap;
use time::OffsetDateTime;
use tracing::debug;

use crate::config::game::GameConfig;
use crate::domain::cards::CardId;
use crate::domain::identity::SessionKey;
use crate::errors::domain::DomainError;

/// One outstanding dealt round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRound {
    pub card_id: CardId,
    pub started_at: OffsetDateTime,
}

/// The guess after the server has had its say: the claimed position, or
/// `None` when the round timed out.
pub type FinalGuess = Option<usize>;

#[derive(Debug)]
pub struct RoundTimer {
    config: GameConfig,
    active: DashMap<SessionKey, ActiveRound>,
}

impl RoundTimer {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            active: DashMap::new(),
        }
    }

    /// Start timing a dealt round, replacing any prior round for the key
    /// (last-deal-wins).
    pub fn begin(&self, key: SessionKey, card_id: CardId) -> ActiveRound {
        let round = ActiveRound {
            card_id,
            started_at: OffsetDateTime::now_utc(),
        };
        self.active.insert(key, round);
        round
    }

    /// Non-consuming read of the outstanding round for the key.
    pub fn peek(&self, key: &SessionKey) -> Result<ActiveRound, DomainError> {
        self.active
            .get(key)
            .map(|entry| *entry.value())
            .ok_or_else(|| Self::no_round(key))
    }

    /// Consume the outstanding round and decide the authoritative guess.
    ///
    /// Returns the claimed guess unchanged, or `None` once elapsed time
    /// exceeds the round limit plus grace. The consume only matches a round
    /// for `expected_card`, so a re-deal racing this call cannot have its
    /// fresh round swallowed by a resolve aimed at the old one.
    pub fn resolve(
        &self,
        key: &SessionKey,
        expected_card: CardId,
        claimed_guess: Option<usize>,
    ) -> Result<FinalGuess, DomainError> {
        let (_, round) = self
            .active
            .remove_if(key, |_, round| round.card_id == expected_card)
            .ok_or_else(|| Self::no_round(key))?;

        let elapsed = OffsetDateTime::now_utc() - round.started_at;
        if elapsed > self.config.deadline() {
            debug!(
                %key,
                card_id = round.card_id.0,
                elapsed_ms = elapsed.whole_milliseconds() as i64,
                "round timed out; voiding the claimed guess"
            );
            return Ok(None);
        }
        Ok(claimed_guess)
    }

    /// Drop any outstanding round for the key.
    pub fn cancel(&self, key: &SessionKey) {
        self.active.remove(key);
    }

    /// Test hook: shift an active round's start time into the past.
    #[cfg(test)]
    pub(crate) fn backdate(&self, key: &SessionKey, by: time::Duration) {
        if let Some(mut entry) = self.active.get_mut(key) {
            entry.started_at -= by;
        }
    }

    fn no_round(key: &SessionKey) -> DomainError {
        DomainError::no_active_round(format!("no round outstanding for {key}"))
    }
}
