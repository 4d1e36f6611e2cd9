//! Member domain models and parameters.
//!
//! Members are the accounts that can sign in to the back office or act on public
//! endpoints that need an identity (likes, subscriptions, premium downloads). The role
//! decides which admin endpoints a member may reach.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::member::{MemberDto, MemberListQueryDto, Role, RoleDto, UpdateMemberDto},
    server::{
        error::AppError,
        middleware::auth::Permission,
        query::sort::SortKey,
        util::parse::{parse_filter, parse_stored},
    },
};

/// Back office member with role and activation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    /// Unique, stored lowercased.
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Deactivated members are rejected by the auth guard.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Member)` - The converted member
    /// - `Err(DbErr::Custom)` - The stored role is unknown
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: parse_stored("role", &entity.role)?,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn has(&self, permission: Permission) -> bool {
        Permission::granted_to(self.role).contains(&permission)
    }
}

/// Role listing entry for the back office.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleSummary {
    pub role: Role,
    pub permissions: &'static [Permission],
    pub member_count: u64,
}

impl RoleSummary {
    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            role: self.role,
            permissions: self
                .permissions
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            member_count: self.member_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberSortBy {
    #[default]
    CreatedAt,
    Name,
    Email,
}

impl SortKey for MemberSortBy {
    const KEYS: &'static [(&'static str, Self)] = &[
        ("createdAt", Self::CreatedAt),
        ("name", Self::Name),
        ("email", Self::Email),
    ];
}

#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

impl MemberFilter {
    /// Converts list query parameters into a typed filter.
    ///
    /// # Returns
    /// - `Ok(MemberFilter)` - Parsed filter
    /// - `Err(AppError::BadRequest)` - Unknown role value
    pub fn from_dto(dto: &MemberListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            role: parse_filter("role", dto.role.as_deref())?,
            is_active: dto.is_active,
            search: dto.search.clone(),
        })
    }
}

/// Admin change of a member's role or activation.
#[derive(Debug, Clone)]
pub struct UpdateMemberParams {
    pub id: i32,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

impl UpdateMemberParams {
    pub fn from_dto(id: i32, dto: UpdateMemberDto) -> Self {
        Self {
            id,
            role: dto.role,
            is_active: dto.is_active,
        }
    }
}
