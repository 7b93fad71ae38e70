#[allow(clippy::module_inception)]
pub mod activity;
pub mod find_activity;

pub use activity::*;
pub use find_activity::*;
