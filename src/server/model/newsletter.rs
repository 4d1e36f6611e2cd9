//! Newsletter subscriber domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::newsletter::{
        ImportResultDto, InvalidRowDto, Locale, SubscribeDto, SubscriberDto,
        SubscriberListQueryDto, SubscriberStatus,
    },
    server::{
        error::AppError,
        query::{lifecycle::Lifecycle, sort::SortKey},
        util::{
            csv::CsvRecord,
            parse::{parse_filter, parse_stored},
            validate::{email, optional_text, MAX_LINE_LEN},
        },
    },
};

impl Lifecycle for SubscriberStatus {
    fn name(self) -> &'static str {
        self.into()
    }

    fn next_states(self) -> &'static [Self] {
        match self {
            Self::Subscribed => &[Self::Unsubscribed],
            Self::Unsubscribed => &[Self::Subscribed],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subscriber {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub locale: Locale,
    pub status: SubscriberStatus,
    pub source: Option<String>,
    pub subscribed_at: DateTime<Utc>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscriber {
    pub fn from_entity(entity: entity::newsletter_subscriber::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            locale: parse_stored("locale", &entity.locale)?,
            status: parse_stored("status", &entity.status)?,
            source: entity.source,
            subscribed_at: entity.subscribed_at,
            unsubscribed_at: entity.unsubscribed_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> SubscriberDto {
        SubscriberDto {
            id: self.id,
            email: self.email,
            name: self.name,
            locale: self.locale,
            status: self.status,
            source: self.source,
            subscribed_at: self.subscribed_at,
            unsubscribed_at: self.unsubscribed_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscriberSortBy {
    #[default]
    CreatedAt,
    Email,
}

impl SortKey for SubscriberSortBy {
    const KEYS: &'static [(&'static str, Self)] =
        &[("createdAt", Self::CreatedAt), ("email", Self::Email)];
}

#[derive(Debug, Clone, Default)]
pub struct SubscriberFilter {
    pub status: Option<SubscriberStatus>,
    pub locale: Option<Locale>,
    pub search: Option<String>,
}

impl SubscriberFilter {
    pub fn from_dto(dto: &SubscriberListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            status: parse_filter("status", dto.status.as_deref())?,
            locale: parse_filter("locale", dto.locale.as_deref())?,
            search: dto.search.clone(),
        })
    }
}

/// A validated signup, from the public form or a CSV row.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscribeParams {
    pub email: String,
    pub name: Option<String>,
    pub locale: Locale,
    pub source: Option<String>,
}

impl SubscribeParams {
    pub fn from_dto(dto: SubscribeDto) -> Result<Self, AppError> {
        Ok(Self {
            email: email(&dto.email)?,
            name: optional_text("name", dto.name, MAX_LINE_LEN)?,
            locale: dto.locale.unwrap_or_default(),
            source: optional_text("source", dto.source, 64)?,
        })
    }
}

/// Header positions of an import file; columns may come in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportColumns {
    pub email: usize,
    pub name: Option<usize>,
    pub locale: Option<usize>,
}

impl ImportColumns {
    /// Locates the known columns in a header row (case-insensitive).
    ///
    /// # Returns
    /// - `Ok(ImportColumns)` - Positions of `email` and, when present, `name` and `locale`
    /// - `Err(AppError::BadRequest)` - No `email` column
    pub fn from_header(header: &[String]) -> Result<Self, AppError> {
        let position = |name: &str| {
            header
                .iter()
                .position(|column| column.trim().eq_ignore_ascii_case(name))
        };

        let email = position("email").ok_or_else(|| {
            AppError::BadRequest("CSV header must contain an 'email' column".to_string())
        })?;

        Ok(Self {
            email,
            name: position("name"),
            locale: position("locale"),
        })
    }
}

impl SubscribeParams {
    /// Validates one import row.
    ///
    /// A blank or missing locale falls back to English. The error string is reported back
    /// to the admin next to the row's line number.
    pub fn from_row(
        columns: ImportColumns,
        row: &CsvRecord,
        source: &str,
    ) -> Result<Self, String> {
        let raw_email = row.get(columns.email).unwrap_or_default();
        let email = email(raw_email).map_err(|e| e.to_string())?;

        let name = columns
            .name
            .and_then(|i| row.get(i))
            .map(str::to_string);
        let name = optional_text("name", name, MAX_LINE_LEN).map_err(|e| e.to_string())?;

        let locale = match columns
            .locale
            .and_then(|i| row.get(i))
            .map(str::trim)
            .filter(|l| !l.is_empty())
        {
            None => Locale::default(),
            Some(raw) => raw
                .to_lowercase()
                .parse::<Locale>()
                .map_err(|_| format!("unknown locale '{}'", raw))?,
        };

        Ok(Self {
            email,
            name,
            locale,
            source: Some(source.to_string()),
        })
    }
}

/// A row rejected during import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRow {
    pub line: usize,
    pub reason: String,
}

/// Outcome of a subscriber import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportResult {
    pub imported: usize,
    pub skipped: usize,
    pub invalid: Vec<InvalidRow>,
}

impl ImportResult {
    pub fn into_dto(self) -> ImportResultDto {
        ImportResultDto {
            imported: self.imported,
            skipped: self.skipped,
            invalid: self
                .invalid
                .into_iter()
                .map(|row| InvalidRowDto {
                    line: row.line,
                    reason: row.reason,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_toggles_both_ways() {
        assert!(SubscriberStatus::Subscribed.can_transition_to(SubscriberStatus::Unsubscribed));
        assert!(SubscriberStatus::Unsubscribed.can_transition_to(SubscriberStatus::Subscribed));
    }

    #[test]
    fn signup_defaults_to_english() {
        let params = SubscribeParams::from_dto(SubscribeDto {
            email: "Reader@Example.org".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(params.email, "reader@example.org");
        assert_eq!(params.locale, Locale::En);
    }

    fn record(line: usize, fields: &[&str]) -> CsvRecord {
        CsvRecord {
            line,
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn finds_columns_in_any_order() {
        let header = record(1, &["Locale", "name", " EMAIL "]);
        let columns = ImportColumns::from_header(&header.fields).unwrap();

        assert_eq!(
            columns,
            ImportColumns {
                email: 2,
                name: Some(1),
                locale: Some(0),
            }
        );
    }

    #[test]
    fn header_without_email_is_rejected() {
        let header = record(1, &["name", "locale"]);
        assert!(matches!(
            ImportColumns::from_header(&header.fields),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn row_reports_unknown_locale() {
        let columns = ImportColumns {
            email: 0,
            name: None,
            locale: Some(1),
        };

        let err = SubscribeParams::from_row(columns, &record(2, &["a@b.et", "fr"]), "import")
            .unwrap_err();
        assert!(err.contains("fr"));

        let ok = SubscribeParams::from_row(columns, &record(3, &["a@b.et", "OR"]), "import")
            .unwrap();
        assert_eq!(ok.locale, Locale::Or);
        assert_eq!(ok.source.as_deref(), Some("import"));
    }
}
