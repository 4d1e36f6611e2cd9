use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::{
    model::newsletter::SubscriberStatus,
    server::{
        data::newsletter::SubscriberRepository,
        error::AppError,
        model::newsletter::{
            ImportColumns, ImportResult, InvalidRow, SubscribeParams, Subscriber,
            SubscriberFilter, SubscriberSortBy,
        },
        query::{lifecycle::ensure_transition, pager::Page, ListParams},
        util::{csv, validate},
    },
};

/// `source` recorded on subscribers created by a CSV import.
const IMPORT_SOURCE: &str = "import";

/// Outcome of a public signup.
#[derive(Debug, Clone, PartialEq)]
pub enum Signup {
    Created(Subscriber),
    Resubscribed(Subscriber),
}

pub struct NewsletterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsletterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes an email address.
    ///
    /// # Returns
    /// - `Ok(Signup::Created)` - New subscriber
    /// - `Ok(Signup::Resubscribed)` - A previously unsubscribed address was reactivated
    /// - `Err(AppError::Conflict)` - The address is already subscribed
    pub async fn subscribe(&self, params: SubscribeParams) -> Result<Signup, AppError> {
        let repo = SubscriberRepository::new(self.db);

        match repo.find_by_email(&params.email).await? {
            None => {
                let conflict = AppError::conflict_on_unique(format!(
                    "{} is already subscribed",
                    params.email
                ));
                Ok(Signup::Created(repo.create(params).await.map_err(conflict)?))
            }
            Some(existing) if existing.status == SubscriberStatus::Subscribed => Err(
                AppError::Conflict(format!("{} is already subscribed", existing.email)),
            ),
            Some(existing) => {
                ensure_transition("Subscriber", existing.status, SubscriberStatus::Subscribed)?;
                let subscriber = repo
                    .set_status(existing.id, SubscriberStatus::Subscribed, Some(params))
                    .await?;

                Ok(Signup::Resubscribed(subscriber))
            }
        }
    }

    /// Unsubscribes an email address; repeating the request is a no-op.
    pub async fn unsubscribe(&self, email: &str) -> Result<Subscriber, AppError> {
        let email = validate::email(email)?;
        let repo = SubscriberRepository::new(self.db);

        let existing = repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Subscriber {} not found", email)))?;

        if existing.status == SubscriberStatus::Unsubscribed {
            return Ok(existing);
        }

        Ok(repo
            .set_status(existing.id, SubscriberStatus::Unsubscribed, None)
            .await?)
    }

    pub async fn list(
        &self,
        params: &ListParams<SubscriberFilter, SubscriberSortBy>,
    ) -> Result<Page<Subscriber>, AppError> {
        Ok(SubscriberRepository::new(self.db).list(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !SubscriberRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("Subscriber", id));
        }

        Ok(())
    }

    /// Imports subscribers from CSV text.
    ///
    /// The first record is the header and must name an `email` column; `name` and
    /// `locale` are optional and columns may appear in any order. Each row is validated on
    /// its own: invalid rows are reported with their line, rows whose email already exists
    /// (in the store or earlier in the file) are skipped, and the rest are inserted.
    ///
    /// # Returns
    /// - `Ok(ImportResult)` - Counts of imported and skipped rows plus invalid row reasons
    /// - `Err(AppError::BadRequest)` - Malformed CSV, empty file or missing `email` column
    pub async fn import_csv(&self, text: &str) -> Result<ImportResult, AppError> {
        let records = csv::parse(text).map_err(|e| AppError::BadRequest(e.to_string()))?;
        let mut records = records.into_iter();

        let header = records
            .next()
            .ok_or_else(|| AppError::BadRequest("CSV file is empty".to_string()))?;
        let columns = ImportColumns::from_header(&header.fields)?;

        let mut result = ImportResult::default();
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for record in records {
            match SubscribeParams::from_row(columns, &record, IMPORT_SOURCE) {
                Ok(params) if seen.insert(params.email.clone()) => candidates.push(params),
                Ok(_) => result.skipped += 1,
                Err(reason) => result.invalid.push(InvalidRow {
                    line: record.line,
                    reason,
                }),
            }
        }

        let repo = SubscriberRepository::new(self.db);
        let emails: Vec<String> = candidates.iter().map(|p| p.email.clone()).collect();
        let existing = repo.existing_emails(&emails).await?;

        let (known, fresh): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|params| existing.contains(&params.email));
        result.skipped += known.len();
        result.imported = repo.insert_batch(fresh).await.map_err(AppError::conflict_on_unique(
            "Subscribers were added while the import ran; retry the import",
        ))? as usize;

        tracing::info!(
            "Newsletter import: {} imported, {} skipped, {} invalid",
            result.imported,
            result.skipped,
            result.invalid.len()
        );

        Ok(result)
    }
}
