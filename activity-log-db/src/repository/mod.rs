pub mod create_activity;
pub mod get_activity;
pub mod list_activities;

// Re-exports
pub use create_activity::*;
pub use get_activity::*;
pub use list_activities::*;
