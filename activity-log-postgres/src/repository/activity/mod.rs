pub mod repo_impl;
pub mod filter;
pub mod create;
pub mod list;
pub mod get;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ActivityRepositoryImpl;
