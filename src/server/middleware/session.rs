//! Type-safe session wrapper.
//!
//! Authentication itself happens outside this service; it only reads and clears the id of
//! the member the session was established for. `AuthSession` keeps the key and value type
//! of that entry in one place.

use tower_sessions::Session;

use crate::server::error::AppError;

/// Key under which the authenticated member id is stored.
pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the authenticated member's id in the session.
    ///
    /// # Arguments
    /// - `user_id` - Id of the `user` row
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    #[cfg(test)]
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the authenticated member's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A member is logged in
    /// - `Ok(None)` - Anonymous session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
