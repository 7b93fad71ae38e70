use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unknown activity type: {0:?}")]
    UnknownActivityType(String),

    #[error("Unknown activity level: {0:?}")]
    UnknownActivityLevel(String),

    #[error("Invalid activity payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
