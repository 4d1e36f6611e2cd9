//! Member service for business logic.
//!
//! Lets admins browse members and roles and change a member's role or activation. An
//! admin cannot lock themselves out by demoting or deactivating their own account.

use sea_orm::DatabaseConnection;
use strum::IntoEnumIterator;

use crate::{
    model::member::Role,
    server::{
        data::member::MemberRepository,
        error::AppError,
        middleware::auth::Permission,
        model::member::{Member, MemberFilter, MemberSortBy, RoleSummary, UpdateMemberParams},
        query::{pager::Page, ListParams},
    },
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        params: &ListParams<MemberFilter, MemberSortBy>,
    ) -> Result<Page<Member>, AppError> {
        Ok(MemberRepository::new(self.db).list(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Member", id))
    }

    /// Lists every role with its permissions and the number of members holding it.
    pub async fn roles(&self) -> Result<Vec<RoleSummary>, AppError> {
        let repo = MemberRepository::new(self.db);

        let mut roles = Vec::new();
        for role in Role::iter() {
            roles.push(RoleSummary {
                role,
                permissions: Permission::granted_to(role),
                member_count: repo.count_by_role(role).await?,
            });
        }

        Ok(roles)
    }

    /// Changes the role and/or activation of a member.
    ///
    /// # Arguments
    /// - `acting_id` - Admin performing the change
    /// - `params` - Member id and the fields to change
    ///
    /// # Returns
    /// - `Ok(Member)` - The updated member
    /// - `Err(AppError::NotFound)` - No member with that id
    /// - `Err(AppError::BadRequest)` - The admin tried to demote or deactivate themselves
    pub async fn update(
        &self,
        acting_id: i32,
        params: UpdateMemberParams,
    ) -> Result<Member, AppError> {
        self.get_by_id(params.id).await?;

        if params.id == acting_id {
            if params.role.is_some_and(|role| role != Role::Admin) {
                return Err(AppError::BadRequest(
                    "You cannot change your own admin role".to_string(),
                ));
            }
            if params.is_active == Some(false) {
                return Err(AppError::BadRequest(
                    "You cannot deactivate your own account".to_string(),
                ));
            }
        }

        Ok(MemberRepository::new(self.db).update(params).await?)
    }
}
