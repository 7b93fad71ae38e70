use activity_log_api::{ActivityLevel, ActivityType, ApiResult};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// # Documentation
/// - One immutable record of a user-triggered action.
/// - `id` and `created_ts` are generated by the database on insert and never supplied by the caller.
/// - There is no update or delete path: the activity log is write-once, read-many.
/// - `payload` is opaque text to the store; JSON by convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityModel {
    pub id: i64,

    /// Principal that performed the action, not validated here
    pub creator_id: i64,

    /// Unix-epoch seconds assigned at insert time
    pub created_ts: i64,

    #[serde(rename = "type")]
    pub activity_type: ActivityType,

    pub level: ActivityLevel,

    pub payload: String,
}

impl ActivityModel {
    /// Creation time as a UTC timestamp, `None` if `created_ts` is out of range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_ts, 0)
    }

    /// Decodes the JSON payload into a typed payload struct.
    pub fn decode_payload<T: DeserializeOwned>(&self) -> ApiResult<T> {
        activity_log_api::decode_payload(&self.payload)
    }
}
