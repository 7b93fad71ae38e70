use activity_log_api::{ActivityLevel, ActivityType};

/// Filter for activity lookups.
///
/// Every field that is `Some` adds an equality constraint; the constraints are
/// combined with AND. The default value matches every activity.
///
/// # Example
/// ```
/// use activity_log_api::{ActivityLevel, ActivityType};
/// use activity_log_db::models::FindActivity;
///
/// let find = FindActivity::new()
///     .with_type(ActivityType::ShortcutView)
///     .with_level(ActivityLevel::Warn);
/// assert!(!find.is_unconstrained());
/// assert!(FindActivity::default().is_unconstrained());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindActivity {
    pub id: Option<i64>,
    pub creator_id: Option<i64>,
    pub activity_type: Option<ActivityType>,
    pub level: Option<ActivityLevel>,
}

impl FindActivity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn with_creator(mut self, creator_id: i64) -> Self {
        self.creator_id = Some(creator_id);
        self
    }

    pub fn with_type(mut self, activity_type: ActivityType) -> Self {
        self.activity_type = Some(activity_type);
        self
    }

    pub fn with_level(mut self, level: ActivityLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.id.is_none()
            && self.creator_id.is_none()
            && self.activity_type.is_none()
            && self.level.is_none()
    }
}
