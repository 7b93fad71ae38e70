use async_trait::async_trait;
use sqlx::Database;

use crate::error::ActivityStoreError;
use crate::models::activity::{ActivityModel, FindActivity};

/// Repository trait for fetching a single activity
///
/// Uses the same filter and ordering as [`ListActivities`](super::ListActivities),
/// so when several rows match the most recent one is returned.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait GetActivity<DB: Database>: Send + Sync {
    /// Get the first activity matching `find`
    ///
    /// # Returns
    /// * `Ok(Some(ActivityModel))` - The most recent matching activity
    /// * `Ok(None)` - If no activity matches
    /// * `Err` - If the query could not be executed
    async fn get_activity(
        &self,
        find: &FindActivity,
    ) -> Result<Option<ActivityModel>, ActivityStoreError>;
}
