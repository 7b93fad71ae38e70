use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::ApiResult;

/// Payload recorded with [`ActivityType::ShortcutCreate`](crate::ActivityType::ShortcutCreate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutCreatePayload {
    pub shortcut_id: i64,
}

/// Payload recorded with [`ActivityType::ShortcutView`](crate::ActivityType::ShortcutView).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutViewPayload {
    pub shortcut_id: i64,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub referer: String,
    #[serde(default)]
    pub user_agent: String,
}

/// Encodes a typed payload into the JSON text stored in the `payload` column.
pub fn encode_payload<T: Serialize>(payload: &T) -> ApiResult<String> {
    Ok(serde_json::to_string(payload)?)
}

/// Decodes payload text back into a typed payload.
pub fn decode_payload<T: DeserializeOwned>(raw: &str) -> ApiResult<T> {
    Ok(serde_json::from_str(raw)?)
}
