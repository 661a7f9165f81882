use crate::info::FileTime;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Number of `FILETIME` ticks in one second.
pub const TICKS_PER_SECOND: u64 = 10_000_000;

/// Seconds between 1601-01-01 and 1970-01-01.
pub const EPOCH_OFFSET: i64 = 11_644_473_600;

/// Joins the two halves of a 64-bit value.
pub const fn combine(high: u32, low: u32) -> u64 {
    ((high as u64) << 32) | low as u64
}

/// Converts the halves of a `FILETIME` to whole seconds since the Unix epoch.
///
/// Sub-second ticks are truncated before the epoch offset is applied, so the result for a time
/// before 1970 is rounded toward 1601 rather than toward 1970.
pub const fn to_epoch_seconds(high: u32, low: u32) -> Timestamp {
    let secs = (combine(high, low) / TICKS_PER_SECOND) as i64;

    Timestamp(secs - EPOCH_OFFSET)
}

/// A point in time with a granularity of one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(i64);

impl Timestamp {
    pub const UNIX_EPOCH: Self = Self(0);

    pub const fn from_unix_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Truncates `time` to whole seconds toward the Unix epoch.
    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(v) => Self(v.as_secs() as i64),
            Err(e) => Self(-(e.duration().as_secs() as i64)),
        }
    }

    pub const fn unix_secs(self) -> i64 {
        self.0
    }

    /// Returns [`None`] if the platform [`SystemTime`] cannot represent this point in time (e.g.
    /// before 1601 on Windows).
    pub fn to_system_time(self) -> Option<SystemTime> {
        let d = Duration::from_secs(self.0.unsigned_abs());

        if self.0 < 0 {
            UNIX_EPOCH.checked_sub(d)
        } else {
            UNIX_EPOCH.checked_add(d)
        }
    }
}

impl From<FileTime> for Timestamp {
    fn from(v: FileTime) -> Self {
        to_epoch_seconds(v.high, v.low)
    }
}
