//! Caller identity: an opaque session key plus an authenticated flag.
//!
//! The engine never inspects credentials; whatever sits in front of it
//! resolves the caller to either a user id or an anonymous browser token.

use std::fmt;

use serde::Serialize;

/// Key under which per-player state is stored. One per logged-in user or
/// per anonymous browser session.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum SessionKey {
    User(i64),
    Anonymous(String),
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionKey::User(id) => write!(f, "user:{id}"),
            SessionKey::Anonymous(token) => write!(f, "anon:{token}"),
        }
    }
}

/// Resolved caller identity.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayerIdentity {
    key: SessionKey,
}

impl PlayerIdentity {
    /// Identity of an authenticated user.
    pub fn user(user_id: i64) -> Self {
        Self {
            key: SessionKey::User(user_id),
        }
    }

    /// Identity of an anonymous browser session.
    pub fn anonymous(token: impl Into<String>) -> Self {
        Self {
            key: SessionKey::Anonymous(token.into()),
        }
    }

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn user_id(&self) -> Option<i64> {
        match &self.key {
            SessionKey::User(id) => Some(*id),
            SessionKey::Anonymous(_) => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id().is_some()
    }
}
