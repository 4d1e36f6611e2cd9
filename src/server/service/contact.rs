use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::contact::ContactStatus,
    server::{
        data::contact::{ContactReply, ContactRepository},
        error::AppError,
        model::contact::{ContactFilter, ContactSortBy, ContactSubmission, CreateContactParams},
        query::{lifecycle::ensure_transition, pager::Page, ListParams},
    },
};

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn submit(&self, params: CreateContactParams) -> Result<ContactSubmission, AppError> {
        let submission = ContactRepository::new(self.db).create(params).await?;

        tracing::info!("Contact submission {} received", submission.id);

        Ok(submission)
    }

    pub async fn list(
        &self,
        params: &ListParams<ContactFilter, ContactSortBy>,
    ) -> Result<Page<ContactSubmission>, AppError> {
        Ok(ContactRepository::new(self.db).list(params).await?)
    }

    async fn find(&self, id: i32) -> Result<ContactSubmission, AppError> {
        ContactRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Contact submission", id))
    }

    /// Opens a submission, marking it read when it was new.
    pub async fn open(&self, id: i32) -> Result<ContactSubmission, AppError> {
        let submission = self.find(id).await?;

        if submission.status != ContactStatus::New {
            return Ok(submission);
        }

        Ok(ContactRepository::new(self.db)
            .set_status(id, ContactStatus::Read, None)
            .await?)
    }

    pub async fn set_status(
        &self,
        id: i32,
        status: ContactStatus,
    ) -> Result<ContactSubmission, AppError> {
        let submission = self.find(id).await?;
        ensure_transition("Contact submission", submission.status, status)?;

        Ok(ContactRepository::new(self.db)
            .set_status(id, status, None)
            .await?)
    }

    /// Records a staff reply and moves the submission to `replied`.
    ///
    /// # Returns
    /// - `Ok(ContactSubmission)` - The replied submission
    /// - `Err(AppError::NotFound)` - No submission with that id
    /// - `Err(AppError::Conflict)` - Submission is archived
    pub async fn reply(
        &self,
        id: i32,
        replied_by: i32,
        reply: String,
    ) -> Result<ContactSubmission, AppError> {
        let submission = self.find(id).await?;
        ensure_transition("Contact submission", submission.status, ContactStatus::Replied)?;

        let reply = ContactReply {
            reply,
            replied_by,
            replied_at: Utc::now(),
        };

        Ok(ContactRepository::new(self.db)
            .set_status(id, ContactStatus::Replied, Some(reply))
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ContactRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("Contact submission", id));
        }

        Ok(())
    }
}
