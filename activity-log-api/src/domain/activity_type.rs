use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ApiError;

/// Category of a logged action.
///
/// Stored as its wire string (`"shortcut.create"`, ...) in the `type` column.
/// New categories are added as variants together with their wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    /// A shortcut was created.
    #[serde(rename = "shortcut.create")]
    ShortcutCreate,
    /// A shortcut was opened.
    #[serde(rename = "shortcut.view")]
    ShortcutView,
}

impl ActivityType {
    pub const ALL: [ActivityType; 2] = [ActivityType::ShortcutCreate, ActivityType::ShortcutView];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::ShortcutCreate => "shortcut.create",
            ActivityType::ShortcutView => "shortcut.view",
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shortcut.create" => Ok(ActivityType::ShortcutCreate),
            "shortcut.view" => Ok(ActivityType::ShortcutView),
            _ => Err(ApiError::UnknownActivityType(s.to_string())),
        }
    }
}
