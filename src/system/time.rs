//! Time keeping module for PineTime

use chrono::{DateTime, NaiveDateTime};
use embassy_time::Instant;
use pinetime_wordclock::time::local_time;

/// Known wall-clock time at a point of system uptime
pub struct TimeReference {
    /// Clock time (UTC)
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
}

impl TimeReference {
    /// Create new time reference from a UNIX timestamp, taken to be now
    pub fn from_timestamp(secs: i64) -> Option<Self> {
        let time = DateTime::from_timestamp(secs, 0)?.naive_utc();
        Some(Self {
            time,
            instant: Instant::now(),
        })
    }
}

pub struct TimeManager {
    reference: TimeReference,
    /// Seconds to add to UTC for local time
    utc_offset: i32,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(reference: TimeReference, utc_offset: i32) -> Self {
        Self {
            reference,
            utc_offset,
        }
    }

    /// Current local time, `None` if it cannot be represented
    pub fn get_time(&self) -> Option<NaiveDateTime> {
        let elapsed = Instant::now()
            .duration_since(self.reference.instant)
            .as_micros();
        local_time(self.reference.time, elapsed, self.utc_offset)
    }
}
