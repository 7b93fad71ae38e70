use activity_log_api::{ActivityLevel, ActivityType};
use activity_log_db::{
    models::activity::{ActivityModel, FindActivity},
    repository::{CreateActivity, GetActivity, ListActivities},
    ActivityStoreError,
};
use crate::utils::{get_parsed, TryFromRow};
use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// PostgreSQL-backed activity store.
///
/// Every operation begins its own transaction on the shared pool. Dropping an
/// uncommitted transaction rolls it back, so early returns, errors, deadlines
/// and cancelled futures leave no trace.
pub struct ActivityRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
    pub(crate) statement_timeout: Option<Duration>,
}

impl ActivityRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            statement_timeout: None,
        }
    }

    pub fn with_statement_timeout(mut self, statement_timeout: Option<Duration>) -> Self {
        self.statement_timeout = statement_timeout;
        self
    }

    /// Runs `operation` under the configured deadline, if any.
    pub(super) async fn with_deadline<T, F>(&self, operation: F) -> Result<T, ActivityStoreError>
    where
        F: Future<Output = Result<T, ActivityStoreError>>,
    {
        let Some(limit) = self.statement_timeout else {
            return operation.await;
        };
        match tokio::time::timeout(limit, operation).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(?limit, "Activity store operation exceeded its deadline");
                Err(ActivityStoreError::Timeout(limit))
            }
        }
    }
}

impl TryFromRow<PgRow> for ActivityModel {
    fn try_from_row(row: &PgRow) -> Result<Self, ActivityStoreError> {
        Ok(ActivityModel {
            id: row.try_get("id")?,
            creator_id: row.try_get("creator_id")?,
            created_ts: row.try_get("created_ts")?,
            activity_type: get_parsed(row, "type")?,
            level: get_parsed(row, "level")?,
            payload: row.try_get("payload")?,
        })
    }
}

#[async_trait]
impl CreateActivity<Postgres> for ActivityRepositoryImpl {
    #[tracing::instrument(level = "debug", skip(self, payload), err)]
    async fn create_activity(
        &self,
        creator_id: i64,
        activity_type: ActivityType,
        level: ActivityLevel,
        payload: &str,
    ) -> Result<ActivityModel, ActivityStoreError> {
        self.with_deadline(Self::create_impl(self, creator_id, activity_type, level, payload))
            .await
    }
}

#[async_trait]
impl ListActivities<Postgres> for ActivityRepositoryImpl {
    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn list_activities(
        &self,
        find: &FindActivity,
    ) -> Result<Vec<ActivityModel>, ActivityStoreError> {
        self.with_deadline(Self::list_impl(self, find, None)).await
    }
}

#[async_trait]
impl GetActivity<Postgres> for ActivityRepositoryImpl {
    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn get_activity(
        &self,
        find: &FindActivity,
    ) -> Result<Option<ActivityModel>, ActivityStoreError> {
        self.with_deadline(Self::get_impl(self, find)).await
    }
}
