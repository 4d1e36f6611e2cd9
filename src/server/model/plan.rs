//! Subscription plan domain models and parameters.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DbErr;

use crate::{
    model::plan::{CreatePlanDto, PlanDto, PlanInterval, PlanListQueryDto, UpdatePlanDto},
    server::{
        error::AppError,
        query::sort::SortKey,
        util::{
            parse::{parse_filter, parse_stored},
            validate::{
                clearable_text, currency, optional_text, replacement_text, required_text, slug,
                MAX_BODY_LEN, MAX_LINE_LEN,
            },
        },
    },
};

/// Currency used when a plan or order does not name one.
pub const DEFAULT_CURRENCY: &str = "ETB";

impl PlanInterval {
    /// Length of one billing period.
    pub fn period(self) -> Duration {
        match self {
            Self::Monthly => Duration::days(30),
            Self::Yearly => Duration::days(365),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub name_am: Option<String>,
    pub name_or: Option<String>,
    pub description: Option<String>,
    pub price_cents: i64,
    pub currency: String,
    pub interval: PlanInterval,
    /// Inactive plans are hidden publicly and cannot be subscribed to.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    pub fn from_entity(entity: entity::plan::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            slug: entity.slug,
            name: entity.name,
            name_am: entity.name_am,
            name_or: entity.name_or,
            description: entity.description,
            price_cents: entity.price_cents,
            currency: entity.currency,
            interval: parse_stored("interval", &entity.interval)?,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> PlanDto {
        PlanDto {
            id: self.id,
            slug: self.slug,
            name: self.name,
            name_am: self.name_am,
            name_or: self.name_or,
            description: self.description,
            price_cents: self.price_cents,
            currency: self.currency,
            interval: self.interval,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanSortBy {
    #[default]
    CreatedAt,
    PriceCents,
    Name,
}

impl SortKey for PlanSortBy {
    const KEYS: &'static [(&'static str, Self)] = &[
        ("createdAt", Self::CreatedAt),
        ("priceCents", Self::PriceCents),
        ("price", Self::PriceCents),
        ("name", Self::Name),
    ];
}

#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    pub is_active: Option<bool>,
    pub interval: Option<PlanInterval>,
    pub search: Option<String>,
}

impl PlanFilter {
    pub fn from_dto(dto: &PlanListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            is_active: dto.is_active,
            interval: parse_filter("interval", dto.interval.as_deref())?,
            search: dto.search.clone(),
        })
    }
}

fn check_price(price_cents: i64) -> Result<i64, AppError> {
    if price_cents < 0 {
        return Err(AppError::BadRequest(
            "priceCents must not be negative".to_string(),
        ));
    }
    Ok(price_cents)
}

#[derive(Debug, Clone)]
pub struct CreatePlanParams {
    pub slug: Option<String>,
    pub name: String,
    pub name_am: Option<String>,
    pub name_or: Option<String>,
    pub description: Option<String>,
    pub price_cents: i64,
    pub currency: String,
    pub interval: PlanInterval,
    pub is_active: bool,
}

impl CreatePlanParams {
    pub fn from_dto(dto: CreatePlanDto) -> Result<Self, AppError> {
        Ok(Self {
            slug: dto.slug.as_deref().map(slug).transpose()?,
            name: required_text("name", &dto.name, MAX_LINE_LEN)?,
            name_am: optional_text("nameAm", dto.name_am, MAX_LINE_LEN)?,
            name_or: optional_text("nameOr", dto.name_or, MAX_LINE_LEN)?,
            description: optional_text("description", dto.description, MAX_BODY_LEN)?,
            price_cents: check_price(dto.price_cents)?,
            currency: currency(dto.currency.as_deref(), DEFAULT_CURRENCY)?,
            interval: dto.interval,
            is_active: dto.is_active,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePlanParams {
    pub id: i32,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub name_am: Option<Option<String>>,
    pub name_or: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    pub interval: Option<PlanInterval>,
    pub is_active: Option<bool>,
}

impl UpdatePlanParams {
    pub fn from_dto(id: i32, dto: UpdatePlanDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            slug: dto.slug.as_deref().map(slug).transpose()?,
            name: replacement_text("name", dto.name, MAX_LINE_LEN)?,
            name_am: clearable_text("nameAm", dto.name_am, MAX_LINE_LEN)?,
            name_or: clearable_text("nameOr", dto.name_or, MAX_LINE_LEN)?,
            description: clearable_text("description", dto.description, MAX_BODY_LEN)?,
            price_cents: dto.price_cents.map(check_price).transpose()?,
            currency: dto
                .currency
                .as_deref()
                .map(|c| currency(Some(c), DEFAULT_CURRENCY))
                .transpose()?,
            interval: dto.interval,
            is_active: dto.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_periods() {
        assert_eq!(PlanInterval::Monthly.period(), Duration::days(30));
        assert_eq!(PlanInterval::Yearly.period(), Duration::days(365));
    }

    #[test]
    fn rejects_negative_price() {
        let dto = CreatePlanDto {
            name: "Supporter".to_string(),
            price_cents: -1,
            ..Default::default()
        };

        assert!(matches!(
            CreatePlanParams::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }
}
