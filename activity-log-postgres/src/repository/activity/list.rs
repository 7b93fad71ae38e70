use activity_log_db::{
    models::activity::{ActivityModel, FindActivity},
    ActivityStoreError,
};
use crate::utils::TryFromRow;

use super::filter::build_select_query;
use super::repo_impl::ActivityRepositoryImpl;

impl ActivityRepositoryImpl {
    pub(super) async fn list_impl(
        repo: &ActivityRepositoryImpl,
        find: &FindActivity,
        limit: Option<i64>,
    ) -> Result<Vec<ActivityModel>, ActivityStoreError> {
        let mut query = build_select_query(find, limit);

        let mut tx = repo.pool.begin().await?;
        let rows = query.build().fetch_all(&mut *tx).await?;
        // Read-only: the transaction is rolled back when dropped.
        drop(tx);

        let list = rows
            .iter()
            .map(ActivityModel::try_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = list.len(), "Listed activities");
        Ok(list)
    }
}
