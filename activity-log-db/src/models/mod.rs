pub mod activity;

// Re-exports
pub use activity::*;
