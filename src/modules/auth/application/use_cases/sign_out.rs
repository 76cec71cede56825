use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::application::SessionManager;

#[derive(Debug, Clone, Error)]
pub enum SignOutError {
    #[error("Remote sign-out failed: {0}")]
    Remote(String),
}

#[async_trait]
pub trait ISignOutUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), SignOutError>;
}

#[derive(Clone)]
pub struct SignOutUseCase {
    sessions: Arc<SessionManager>,
}

impl SignOutUseCase {
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl ISignOutUseCase for SignOutUseCase {
    async fn execute(&self) -> Result<(), SignOutError> {
        self.sessions
            .sign_out()
            .await
            .map_err(|e| SignOutError::Remote(e.to_string()))
    }
}
