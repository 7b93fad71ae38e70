use async_trait::async_trait;
use sqlx::Database;

use crate::error::ActivityStoreError;
use crate::models::activity::{ActivityModel, FindActivity};

/// Repository trait for listing activities matching a filter
///
/// Results are ordered most recent first (`created_ts`, then `id`, descending).
/// No match is an empty vector, not an error.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait ListActivities<DB: Database>: Send + Sync {
    /// List every activity matching all constraints set on `find`
    ///
    /// # Returns
    /// * `Ok(Vec<ActivityModel>)` - The matching activities, possibly empty
    /// * `Err` - If the query could not be executed or a row could not be decoded
    async fn list_activities(
        &self,
        find: &FindActivity,
    ) -> Result<Vec<ActivityModel>, ActivityStoreError>;
}
