//! Current-session repository implementation.

use std::sync::Arc;

use tokio::sync::RwLock;

use minutehub_core::result::AppResult;
use minutehub_core::types::UserId;

/// Holds the id of the user signed in to this session, if any.
///
/// The sign-in is a local directory lookup, not a security boundary; the
/// record exists so the session survives a snapshot round-trip.
#[derive(Debug, Clone, Default)]
pub struct SessionRepository {
    current_user: Arc<RwLock<Option<UserId>>>,
}

impl SessionRepository {
    /// Create an empty session repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently signed-in user, if any.
    pub async fn current_user(&self) -> AppResult<Option<UserId>> {
        Ok(*self.current_user.read().await)
    }

    /// Record the signed-in user.
    pub async fn sign_in(&self, user: UserId) -> AppResult<()> {
        *self.current_user.write().await = Some(user);
        Ok(())
    }

    /// Clear the signed-in user.
    pub async fn sign_out(&self) -> AppResult<()> {
        *self.current_user.write().await = None;
        Ok(())
    }

    /// Export the session for snapshotting.
    pub async fn dump(&self) -> Option<UserId> {
        *self.current_user.read().await
    }

    /// Replace the session from a snapshot.
    pub async fn restore(&self, user: Option<UserId>) {
        *self.current_user.write().await = user;
    }
}
