use activity_log_api::{encode_payload, ShortcutCreatePayload};
use rand::Rng;

/// A creator id no other test run is likely to use, so committed rows do not collide.
pub fn unique_creator_id() -> i64 {
    rand::thread_rng().gen_range(1_000_000..i64::MAX / 2)
}

pub fn shortcut_payload(shortcut_id: i64) -> String {
    encode_payload(&ShortcutCreatePayload { shortcut_id }).unwrap()
}
