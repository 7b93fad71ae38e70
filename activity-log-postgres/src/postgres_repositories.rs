use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::config::StoreConfig;
use crate::repository::activity::ActivityRepositoryImpl;

/// Entry point for the hosting application: owns the pool and hands out repositories.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
    statement_timeout: Option<Duration>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            statement_timeout: None,
        }
    }

    /// Connect using `config` and apply its per-operation deadline
    pub async fn connect(config: &StoreConfig) -> Result<Self, sqlx::Error> {
        let pool = config.connect().await?;
        Ok(Self::new(Arc::new(pool)).with_statement_timeout(config.statement_timeout))
    }

    pub fn with_statement_timeout(mut self, statement_timeout: Option<Duration>) -> Self {
        self.statement_timeout = statement_timeout;
        self
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Build an ActivityRepository sharing this pool
    pub fn create_activity_repository(&self) -> Arc<ActivityRepositoryImpl> {
        Arc::new(
            ActivityRepositoryImpl::new(self.pool.clone())
                .with_statement_timeout(self.statement_timeout),
        )
    }
}
