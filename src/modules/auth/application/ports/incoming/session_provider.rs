use async_trait::async_trait;
use thiserror::Error;

use crate::auth::domain::entities::Session;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Session expired - please login again")]
    SessionExpired,

    #[error("Admin token does not belong to the active session")]
    TokenMismatch,
}

/// Resolves the session every owner-scoped write runs under.
///
/// Implementations check expiry locally and attempt at most one silent
/// refresh before giving up.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_session(&self) -> Result<Session, SessionError>;
}
