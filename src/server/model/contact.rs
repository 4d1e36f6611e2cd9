//! Contact submission domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::contact::{ContactDto, ContactListQueryDto, ContactStatus, CreateContactDto},
    server::{
        error::AppError,
        query::{lifecycle::Lifecycle, sort::SortKey},
        util::{
            parse::{parse_filter, parse_stored},
            validate::{email, optional_text, required_text, MAX_BODY_LEN, MAX_LINE_LEN},
        },
    },
};

/// Longest accepted contact message.
const MAX_MESSAGE_LEN: usize = 5_000;

impl Lifecycle for ContactStatus {
    fn name(self) -> &'static str {
        self.into()
    }

    fn next_states(self) -> &'static [Self] {
        use ContactStatus::*;

        match self {
            New => &[Read, Replied, Archived],
            Read => &[Replied, Archived],
            Replied => &[Archived],
            Archived => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub status: ContactStatus,
    pub reply: Option<String>,
    pub replied_at: Option<DateTime<Utc>>,
    /// Member who sent the reply.
    pub replied_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn from_entity(entity: entity::contact_submission::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            subject: entity.subject,
            message: entity.message,
            status: parse_stored("status", &entity.status)?,
            reply: entity.reply,
            replied_at: entity.replied_at,
            replied_by: entity.replied_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ContactDto {
        ContactDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            subject: self.subject,
            message: self.message,
            status: self.status,
            reply: self.reply,
            replied_at: self.replied_at,
            replied_by: self.replied_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactSortBy {
    #[default]
    CreatedAt,
    Name,
    Status,
}

impl SortKey for ContactSortBy {
    const KEYS: &'static [(&'static str, Self)] = &[
        ("createdAt", Self::CreatedAt),
        ("name", Self::Name),
        ("status", Self::Status),
    ];
}

#[derive(Debug, Clone, Default)]
pub struct ContactFilter {
    pub status: Option<ContactStatus>,
    pub search: Option<String>,
}

impl ContactFilter {
    pub fn from_dto(dto: &ContactListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            status: parse_filter("status", dto.status.as_deref())?,
            search: dto.search.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateContactParams {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

impl CreateContactParams {
    /// Validates a public contact form submission.
    ///
    /// # Returns
    /// - `Ok(CreateContactParams)` - Trimmed input with normalized email
    /// - `Err(AppError::BadRequest)` - Missing name or message, or malformed email
    pub fn from_dto(dto: CreateContactDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required_text("name", &dto.name, MAX_LINE_LEN)?,
            email: email(&dto.email)?,
            phone: optional_text("phone", dto.phone, 32)?,
            subject: optional_text("subject", dto.subject, MAX_LINE_LEN)?,
            message: required_text("message", &dto.message, MAX_MESSAGE_LEN)?,
        })
    }
}

/// Validates an admin reply body.
pub fn reply_text(reply: &str) -> Result<String, AppError> {
    required_text("reply", reply, MAX_BODY_LEN)
}
