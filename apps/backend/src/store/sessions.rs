//! Per-player game state, keyed by opaque session key.
//!
//! A `DashMap` shard lock serializes read-modify-write per key while
//! unrelated sessions proceed in parallel; nothing here ever blocks on
//! another session.

use dashmap::DashMap;

use crate::domain::identity::SessionKey;
use crate::domain::state::GameSession;
use crate::errors::domain::DomainError;

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<SessionKey, GameSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a fresh session, discarding any prior one for the key.
    pub fn create(&self, key: SessionKey, session: GameSession) {
        self.sessions.insert(key, session);
    }

    /// Snapshot of the session for the key.
    pub fn get(&self, key: &SessionKey) -> Result<GameSession, DomainError> {
        self.sessions
            .get(key)
            .map(|entry| entry.clone())
            .ok_or_else(|| Self::not_found(key))
    }

    /// Apply `f` to the session under its shard write lock.
    ///
    /// No two mutations for the same key can interleave their
    /// read-modify-write; `f` must not block.
    pub fn mutate<T>(
        &self,
        key: &SessionKey,
        f: impl FnOnce(&mut GameSession) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let mut entry = self.sessions.get_mut(key).ok_or_else(|| Self::not_found(key))?;
        f(entry.value_mut())
    }

    /// Evict the session; returns it if it was present.
    pub fn remove(&self, key: &SessionKey) -> Option<GameSession> {
        self.sessions.remove(key).map(|(_, session)| session)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Keep only sessions satisfying the predicate. Idle-eviction hook for
    /// embedders that want to bound abandoned anonymous sessions.
    pub fn retain(&self, f: impl FnMut(&SessionKey, &mut GameSession) -> bool) {
        self.sessions.retain(f);
    }

    fn not_found(key: &SessionKey) -> DomainError {
        DomainError::session_not_found(format!("no game in progress for {key}"))
    }
}
