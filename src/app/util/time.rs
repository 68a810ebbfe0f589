use std::time::{SystemTime, UNIX_EPOCH};

pub fn current_time_in_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis()
}
