use activity_log_db::models::activity::FindActivity;
use sqlx::{Postgres, QueryBuilder};

const SELECT_ACTIVITY: &str = "SELECT id, creator_id, created_ts, type, level, payload FROM activity WHERE 1 = 1";

/// Builds the activity select for `find`.
///
/// Each constraint set on `find` appends ` AND <column> = $n` with its value
/// bound positionally, in the order id, creator_id, type, level. Rows come
/// back most recent first; `limit` caps the row count when given.
pub(crate) fn build_select_query(find: &FindActivity, limit: Option<i64>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_ACTIVITY);

    if let Some(id) = find.id {
        builder.push(" AND id = ").push_bind(id);
    }
    if let Some(creator_id) = find.creator_id {
        builder.push(" AND creator_id = ").push_bind(creator_id);
    }
    if let Some(activity_type) = find.activity_type {
        builder.push(" AND type = ").push_bind(activity_type.as_str());
    }
    if let Some(level) = find.level {
        builder.push(" AND level = ").push_bind(level.as_str());
    }

    builder.push(" ORDER BY created_ts DESC, id DESC");
    if let Some(limit) = limit {
        builder.push(" LIMIT ").push_bind(limit);
    }

    builder
}
