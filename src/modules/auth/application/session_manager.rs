use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::{watch, Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::auth::application::ports::incoming::{SessionError, SessionProvider};
use crate::auth::application::ports::outgoing::{AuthGateway, AuthGatewayError};
use crate::auth::domain::entities::{Session, SessionId, UserId};

/// Holds the single admin session and publishes the authentication flag.
///
/// Lifecycle: `sign_in` or `resume` populates it, `current_session` resolves
/// it lazily for every write, `sign_out` tears it down. Every sign-in gets a
/// fresh [`SessionId`]; admin tokens are only honoured while it is held.
pub struct SessionManager {
    gateway: Arc<dyn AuthGateway>,
    held: RwLock<Option<HeldSession>>,
    refresh_gate: Mutex<()>,
    authenticated: watch::Sender<bool>,
    expiry_leeway: Duration,
}

#[derive(Clone)]
struct HeldSession {
    id: SessionId,
    session: Session,
}

impl SessionManager {
    pub fn new(gateway: Arc<dyn AuthGateway>, expiry_leeway: Duration) -> Self {
        let (authenticated, _) = watch::channel(false);
        Self {
            gateway,
            held: RwLock::new(None),
            refresh_gate: Mutex::new(()),
            authenticated,
            expiry_leeway,
        }
    }

    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(SessionId, Session), AuthGatewayError> {
        let session = self.gateway.sign_in_with_password(email, password).await?;
        let id = self.start(session.clone()).await;
        info!("Admin signed in: {} (session {})", session.user.id, id);
        Ok((id, session))
    }

    /// Restores a session from a refresh token kept outside the process.
    pub async fn resume(&self, refresh_token: &str) -> Result<Session, SessionError> {
        match self.gateway.refresh_session(refresh_token).await {
            Ok(session) => {
                let id = self.start(session.clone()).await;
                info!("Resumed admin session for {} (session {})", session.user.id, id);
                Ok(session)
            }
            Err(e) => {
                warn!("Could not resume admin session: {}", e);
                Err(SessionError::NotAuthenticated)
            }
        }
    }

    /// Clears local state even when the remote sign-out fails; the remote
    /// error is still handed back.
    pub async fn sign_out(&self) -> Result<(), AuthGatewayError> {
        let previous = self.held.write().await.take();
        self.authenticated.send_replace(false);

        match previous {
            Some(HeldSession { session, .. }) => {
                let result = self.gateway.sign_out(&session.access_token).await;
                if let Err(e) = &result {
                    warn!("Remote sign-out failed, local session cleared anyway: {}", e);
                } else {
                    info!("Admin signed out: {}", session.user.id);
                }
                result
            }
            None => Ok(()),
        }
    }

    /// Checks that an admin token was issued for the session held right now.
    /// Expiry is left to `current_session`.
    pub async fn authorize(&self, user_id: UserId, session_id: SessionId) -> Result<(), SessionError> {
        match self.held.read().await.as_ref() {
            None => Err(SessionError::NotAuthenticated),
            Some(held) if held.id == session_id && held.session.user.id == user_id => Ok(()),
            Some(held) => {
                warn!(
                    "Admin token for {} (session {}) does not match active session {}",
                    user_id, session_id, held.id
                );
                Err(SessionError::TokenMismatch)
            }
        }
    }

    pub async fn session_id(&self) -> Option<SessionId> {
        self.held.read().await.as_ref().map(|held| held.id)
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.authenticated.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        *self.authenticated.borrow()
    }

    /// The stored session without any expiry handling.
    pub async fn snapshot(&self) -> Option<Session> {
        self.held.read().await.as_ref().map(|held| held.session.clone())
    }

    async fn start(&self, session: Session) -> SessionId {
        let id = SessionId::generate();
        *self.held.write().await = Some(HeldSession { id, session });
        self.authenticated.send_replace(true);
        id
    }

    /// Swaps in a refreshed session unless a sign-out or new sign-in got there first.
    async fn replace(&self, id: SessionId, session: Option<Session>) {
        let mut held = self.held.write().await;
        if held.as_ref().map(|h| h.id) != Some(id) {
            return;
        }
        *held = session.map(|session| HeldSession { id, session });
        self.authenticated.send_replace(held.is_some());
    }

    fn is_fresh(&self, session: &Session) -> bool {
        !session.is_expired_at(Utc::now(), self.expiry_leeway)
    }
}

#[async_trait]
impl SessionProvider for SessionManager {
    async fn current_session(&self) -> Result<Session, SessionError> {
        if let Some(held) = self.held.read().await.as_ref() {
            if self.is_fresh(&held.session) {
                return Ok(held.session.clone());
            }
        }

        // One refresh at a time; late arrivals reuse the winner's result.
        let _gate = self.refresh_gate.lock().await;

        let stale = match self.held.read().await.as_ref() {
            None => return Err(SessionError::NotAuthenticated),
            Some(held) if self.is_fresh(&held.session) => return Ok(held.session.clone()),
            Some(held) => held.clone(),
        };

        debug!("Admin session expired, attempting silent refresh");
        match self.gateway.refresh_session(&stale.session.refresh_token).await {
            Ok(fresh) if self.is_fresh(&fresh) => {
                info!("Admin session refreshed for {}", fresh.user.id);
                self.replace(stale.id, Some(fresh.clone())).await;
                Ok(fresh)
            }
            Ok(_) => {
                warn!("Refreshed admin session is already expired");
                self.replace(stale.id, None).await;
                Err(SessionError::SessionExpired)
            }
            Err(e) => {
                warn!("Silent session refresh failed: {}", e);
                if e.is_rejection() {
                    self.replace(stale.id, None).await;
                }
                Err(SessionError::SessionExpired)
            }
        }
    }
}
