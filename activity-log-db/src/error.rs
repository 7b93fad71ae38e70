use activity_log_api::ApiError;
use std::time::Duration;
use thiserror::Error;

/// Failure of an activity store operation.
///
/// "Not found" is not represented here: lookups return `Ok(None)`.
#[derive(Error, Debug)]
pub enum ActivityStoreError {
    /// Transaction lifecycle, statement execution or row decoding failed.
    #[error("Persistence error: {0}")]
    Persistence(#[from] sqlx::Error),

    /// A stored `type` or `level` column holds a value outside the known set.
    #[error("Stored activity could not be decoded: {0}")]
    Decode(#[from] ApiError),

    /// The operation did not finish within the configured deadline.
    #[error("Activity store operation timed out after {0:?}")]
    Timeout(Duration),
}
