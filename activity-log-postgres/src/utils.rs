use activity_log_api::ApiError;
use activity_log_db::ActivityStoreError;
use sqlx::{postgres::PgRow, Row};
use std::str::FromStr;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, ActivityStoreError>;
}

/// Retrieves a text column and parses it into a closed enumeration.
///
/// Unknown values surface as [`ActivityStoreError::Decode`] rather than a default.
pub fn get_parsed<T>(row: &PgRow, col_name: &str) -> Result<T, ActivityStoreError>
where
    T: FromStr<Err = ApiError>,
{
    let s: String = row.try_get(col_name)?;
    Ok(s.parse::<T>()?)
}
