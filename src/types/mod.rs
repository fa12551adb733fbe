//! Request and response types for both API generations.
//!
//! The two generations are kept apart: every v2 result arrives wrapped in
//! [`v2::V2Response`], while v3 returns bare objects that carry their own
//! [`v3::AddressBook`] side table.

use chrono::{DateTime, Utc};

pub mod v2;
pub mod v3;

/// Convert a unix timestamp in seconds to a UTC instant.
pub(crate) fn unix_time(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}
