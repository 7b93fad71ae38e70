use activity_log_api::{ActivityLevel, ActivityType};
use async_trait::async_trait;
use sqlx::Database;

use crate::error::ActivityStoreError;
use crate::models::activity::ActivityModel;

/// Repository trait for appending a record to the activity log
///
/// The insert runs in its own transaction. The database assigns `id` and
/// `created_ts`; both are returned in the created model. If the transaction
/// does not commit, no row is durable and an error is returned.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
///
/// # Example
/// ```ignore
/// impl CreateActivity<Postgres> for ActivityRepositoryImpl {
///     async fn create_activity(&self, creator_id: i64, activity_type: ActivityType, level: ActivityLevel, payload: &str) -> Result<ActivityModel, ActivityStoreError> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateActivity<DB: Database>: Send + Sync {
    /// Create a new activity record
    ///
    /// # Arguments
    /// * `creator_id` - The principal that performed the action
    /// * `activity_type` - The category of the action
    /// * `level` - The severity of the action
    /// * `payload` - Opaque payload text, may be empty
    ///
    /// # Returns
    /// * `Ok(ActivityModel)` - The stored record with generated fields populated
    /// * `Err` - If the transaction could not be executed or committed
    async fn create_activity(
        &self,
        creator_id: i64,
        activity_type: ActivityType,
        level: ActivityLevel,
        payload: &str,
    ) -> Result<ActivityModel, ActivityStoreError>;
}
