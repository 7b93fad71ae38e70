pub mod activity_level;
pub mod activity_type;
pub mod payload;

pub use activity_level::*;
pub use activity_type::*;
pub use payload::*;
