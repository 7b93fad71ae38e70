pub mod config;
pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use config::{ConfigError, StoreConfig};
pub use postgres_repositories::PostgresRepositories;
pub use repository::activity::ActivityRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
