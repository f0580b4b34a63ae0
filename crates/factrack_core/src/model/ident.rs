//! Record identifier generation.
//!
//! # Responsibility
//! - Issue the string identifiers assigned to records and accounts at
//!   creation.
//!
//! # Invariants
//! - Identifiers are the creation time in epoch milliseconds rendered as
//!   a decimal string; external consumers may rely on that format.
//! - Identifiers issued by one process are strictly increasing: when two
//!   creations land on the same clock tick (or the clock steps back), the
//!   issued value is bumped past the previous one. Uniqueness across
//!   processes still relies on the single-writer assumption documented at
//!   the crate root.

use once_cell::sync::Lazy;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

static LAST_ISSUED_MS: Lazy<Mutex<u64>> = Lazy::new(|| Mutex::new(0));

/// Returns a fresh record identifier.
pub fn next_record_id() -> String {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);

    let mut last = LAST_ISSUED_MS
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let issued = if now_ms > *last { now_ms } else { *last + 1 };
    *last = issued;

    issued.to_string()
}
