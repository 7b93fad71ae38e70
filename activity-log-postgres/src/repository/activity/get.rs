use activity_log_db::{
    models::activity::{ActivityModel, FindActivity},
    ActivityStoreError,
};

use super::repo_impl::ActivityRepositoryImpl;

impl ActivityRepositoryImpl {
    pub(super) async fn get_impl(
        repo: &ActivityRepositoryImpl,
        find: &FindActivity,
    ) -> Result<Option<ActivityModel>, ActivityStoreError> {
        let list = Self::list_impl(repo, find, Some(1)).await?;
        Ok(list.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::activity::test_utils::{shortcut_payload, unique_creator_id};
    use crate::test_helper::setup_test_context;
    use activity_log_api::{ActivityLevel, ActivityType, ShortcutViewPayload};
    use activity_log_db::models::activity::FindActivity;
    use activity_log_db::repository::{CreateActivity, GetActivity};

    #[tokio::test]
    #[ignore = "requires PostgreSQL at DATABASE_URL"]
    #[serial_test::serial]
    async fn test_get_by_type_and_level() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_repo = ctx.activity_repo();
        let creator_id = unique_creator_id();
        let payload = activity_log_api::encode_payload(&ShortcutViewPayload {
            shortcut_id: 8,
            ip: "127.0.0.1".to_string(),
            referer: String::new(),
            user_agent: "test".to_string(),
        })?;

        let created = activity_repo
            .create_activity(creator_id, ActivityType::ShortcutView, ActivityLevel::Warn, &payload)
            .await?;

        let find = FindActivity::new()
            .with_creator(creator_id)
            .with_type(ActivityType::ShortcutView)
            .with_level(ActivityLevel::Warn);
        let loaded = activity_repo.get_activity(&find).await?.expect("activity should exist");

        assert_eq!(loaded.id, created.id);
        assert_eq!(loaded.created_ts, created.created_ts);
        assert_eq!(loaded.creator_id, creator_id);
        assert_eq!(loaded.payload, payload);
        let decoded: ShortcutViewPayload = loaded.decode_payload()?;
        assert_eq!(decoded.shortcut_id, 8);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL at DATABASE_URL"]
    #[serial_test::serial]
    async fn test_get_without_match_is_none() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_repo = ctx.activity_repo();

        assert!(activity_repo.get_activity(&FindActivity::by_id(-1)).await?.is_none());

        let find = FindActivity::new()
            .with_creator(unique_creator_id())
            .with_type(ActivityType::ShortcutCreate);
        assert!(activity_repo.get_activity(&find).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL at DATABASE_URL"]
    #[serial_test::serial]
    async fn test_get_returns_most_recent_match() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_repo = ctx.activity_repo();
        let creator_id = unique_creator_id();

        let mut last = None;
        for shortcut_id in 0..3 {
            last = Some(
                activity_repo
                    .create_activity(
                        creator_id,
                        ActivityType::ShortcutCreate,
                        ActivityLevel::Info,
                        &shortcut_payload(shortcut_id),
                    )
                    .await?,
            );
        }

        let loaded = activity_repo
            .get_activity(&FindActivity::new().with_creator(creator_id))
            .await?;
        assert_eq!(loaded, last);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL at DATABASE_URL"]
    #[serial_test::serial]
    async fn test_repeated_get_is_stable() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_repo = ctx.activity_repo();

        let created = activity_repo
            .create_activity(unique_creator_id(), ActivityType::ShortcutView, ActivityLevel::Error, "{}")
            .await?;
        let find = FindActivity::by_id(created.id);

        let first = activity_repo.get_activity(&find).await?;
        let second = activity_repo.get_activity(&find).await?;
        assert_eq!(first, second);
        assert_eq!(first, Some(created));

        Ok(())
    }
}
