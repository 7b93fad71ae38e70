use activity_log_api::{ActivityLevel, ActivityType};
use activity_log_db::{models::activity::ActivityModel, ActivityStoreError};
use sqlx::Row;

use super::repo_impl::ActivityRepositoryImpl;

impl ActivityRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ActivityRepositoryImpl,
        creator_id: i64,
        activity_type: ActivityType,
        level: ActivityLevel,
        payload: &str,
    ) -> Result<ActivityModel, ActivityStoreError> {
        let query = sqlx::query(
            r#"
            INSERT INTO activity (creator_id, type, level, payload)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created_ts
            "#,
        )
        .bind(creator_id)
        .bind(activity_type.as_str())
        .bind(level.as_str())
        .bind(payload);

        let mut tx = repo.pool.begin().await?;
        let row = query.fetch_one(&mut *tx).await?;
        let id: i64 = row.try_get("id")?;
        let created_ts: i64 = row.try_get("created_ts")?;
        tx.commit().await?;

        tracing::debug!(id, created_ts, "Created activity");
        Ok(ActivityModel {
            id,
            creator_id,
            created_ts,
            activity_type,
            level,
            payload: payload.to_string(),
        })
    }
}
