use sea_orm::DatabaseConnection;

use crate::server::{data::stats::StatsRepository, error::AppError, model::stats::DashboardStats};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gathers dashboard figures; a failing query fails the whole request.
    pub async fn dashboard(&self) -> Result<DashboardStats, AppError> {
        Ok(StatsRepository::new(self.db).dashboard().await?)
    }
}
