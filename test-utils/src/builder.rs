use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builds a [`TestContext`] whose in-memory database holds only the tables a test needs.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Article};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Article)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements in the order they will run.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues the CREATE TABLE statement of `entity`.
    ///
    /// SQLite enforces foreign keys on insert, so add referenced tables first when the
    /// test inserts rows that point at them.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for article and publication operations.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Article
    /// - Publication
    /// - GalleryItem
    /// - ContentTag
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_content_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_content_tables(self) -> Self {
        self.with_table(User)
            .with_table(Article)
            .with_table(Publication)
            .with_table(GalleryItem)
            .with_table(ContentTag)
    }

    /// Adds the tables required for plan and subscription operations.
    ///
    /// Adds User, Plan and Subscription in dependency order.
    pub fn with_billing_tables(self) -> Self {
        self.with_table(User)
            .with_table(Plan)
            .with_table(Subscription)
    }

    /// Adds every table of the schema.
    ///
    /// Use this for tests spanning several resources, such as dashboard statistics.
    pub fn with_all_tables(self) -> Self {
        self.with_content_tables()
            .with_table(ContactSubmission)
            .with_table(NewsletterSubscriber)
            .with_table(Plan)
            .with_table(Subscription)
            .with_table(BookOrder)
    }

    /// Opens the in-memory database and creates the queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose `db` is ready; the session is created lazily
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
