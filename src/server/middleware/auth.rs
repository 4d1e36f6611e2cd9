use sea_orm::DatabaseConnection;
use strum_macros::IntoStaticStr;
use tower_sessions::Session;

use crate::{
    model::member::Role,
    server::{
        data::member::MemberRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::member::Member,
    },
};

/// Role requirement checked by [`AuthGuard::require`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Permission {
    /// Member management, contacts, newsletter, billing and orders.
    Admin,
    /// Article and publication authoring. Admins also pass.
    Editor,
}

impl Permission {
    /// Permissions held by every member of `role`.
    pub fn granted_to(role: Role) -> &'static [Permission] {
        match role {
            Role::Admin => &[Permission::Admin, Permission::Editor],
            Role::Editor => &[Permission::Editor],
            Role::Member => &[],
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the session's member and checks every permission.
    ///
    /// Passing an empty slice only requires an active, logged in member.
    ///
    /// # Returns
    /// - `Ok(Member)` - The acting member
    /// - `Err(AuthError::UserNotInSession)` - Anonymous session
    /// - `Err(AuthError::UserNotInDatabase)` - Session points at a deleted member
    /// - `Err(AuthError::InactiveAccount)` - Member was deactivated
    /// - `Err(AuthError::AccessDenied)` - Member lacks a required role
    pub async fn require(&self, permissions: &[Permission]) -> Result<Member, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(member) = MemberRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !member.is_active {
            return Err(AuthError::InactiveAccount(user_id).into());
        }

        for permission in permissions {
            if !member.has(*permission) {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!("{:?} permission required, member has role {}", permission, member.role),
                )
                .into());
            }
        }

        Ok(member)
    }

    /// Gets the session's member when one is logged in and active.
    ///
    /// Used by public endpoints whose behavior depends on who is asking.
    pub async fn current(&self) -> Result<Option<Member>, AppError> {
        match self.require(&[]).await {
            Ok(member) => Ok(Some(member)),
            Err(AppError::AuthErr(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
