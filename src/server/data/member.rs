//! Member data repository.
//!
//! Members are the `user` rows. Accounts are created by the authentication provider,
//! so this repository only reads them and lets admins change role and activation.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    model::member::Role,
    server::{
        data::resource::{patch, Resource, ResourceRepository},
        model::member::{Member, MemberFilter, MemberSortBy, UpdateMemberParams},
        query::{filter::FilterBuilder, pager::Page, ListParams},
    },
};

use entity::user::Column;

pub struct MemberResource;

impl Resource for MemberResource {
    type Entity = entity::prelude::User;
    type Filter = MemberFilter;
    type SortBy = MemberSortBy;

    const LABEL: &'static str = "Member";
    const DEFAULT_LIMIT: u64 = 20;

    fn id_column() -> Column {
        Column::Id
    }

    fn sort_column(by: MemberSortBy) -> Column {
        match by {
            MemberSortBy::CreatedAt => Column::CreatedAt,
            MemberSortBy::Name => Column::Name,
            MemberSortBy::Email => Column::Email,
        }
    }

    fn search_columns() -> &'static [Column] {
        &[Column::Name, Column::Email]
    }

    fn filter(filter: &MemberFilter) -> FilterBuilder {
        FilterBuilder::new()
            .eq(Column::Role, filter.role.map(|r| r.to_string()))
            .eq(Column::IsActive, filter.is_active)
            .search(Self::search_columns(), filter.search.as_deref())
    }
}

/// Repository providing database operations for members.
pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn resource(&self) -> ResourceRepository<'a, MemberResource> {
        ResourceRepository::new(self.db)
    }

    pub async fn list(
        &self,
        params: &ListParams<MemberFilter, MemberSortBy>,
    ) -> Result<Page<Member>, DbErr> {
        self.resource()
            .list(params)
            .await?
            .try_map(Member::from_entity)
    }

    /// Finds a member by id.
    ///
    /// # Arguments
    /// - `id` - Member id stored in the session
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found
    /// - `Ok(None)` - No member with that id
    /// - `Err(DbErr)` - Database error or unknown stored role
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        self.resource()
            .find_by_id(id)
            .await?
            .map(Member::from_entity)
            .transpose()
    }

    /// Counts members holding `role`, active or not.
    pub async fn count_by_role(&self, role: Role) -> Result<u64, DbErr> {
        self.resource()
            .count(&MemberFilter {
                role: Some(role),
                ..Default::default()
            })
            .await
    }

    /// Updates role and/or activation of a member.
    pub async fn update(&self, params: UpdateMemberParams) -> Result<Member, DbErr> {
        let existing = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Member with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::user::ActiveModel = existing.into();
        patch(&mut active_model.role, params.role.map(|r| r.to_string()));
        patch(&mut active_model.is_active, params.is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        Member::from_entity(model)
    }
}
