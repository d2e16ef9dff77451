//! Wall-clock time as seen by the watchface

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::{phrase::Proximity, Error};

/// Hour and minute of the current time.
///
/// Construction validates the range, so everything derived from it (table
/// indices, buckets) is in bounds.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a new time, hour in 0–23 and minute in 0–59.
    pub fn new(hour: u32, minute: u32) -> Result<Self, Error> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidArgument { hour, minute });
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Take hour and minute from any chrono time value
    pub fn from_timelike<T: Timelike>(time: &T) -> Result<Self, Error> {
        Self::new(time.hour(), time.minute())
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Hour on a 12 hour dial, midnight and noon are 0
    pub fn hour12(&self) -> u8 {
        self.hour % 12
    }

    /// Index of the five minute landmark (0–11)
    pub fn minute_bucket(&self) -> u8 {
        self.minute / 5
    }

    pub fn proximity(&self) -> Proximity {
        crate::phrase::classify_proximity(self.minute)
    }

    /// Whether the phrase names the current hour rather than the next one
    pub fn is_past_hour(&self) -> bool {
        crate::phrase::is_past_hour(self.minute)
    }
}

/// Local time `elapsed_micros` after the UTC instant `utc`.
///
/// `None` when the result does not fit a `NaiveDateTime`.
pub fn local_time(
    utc: NaiveDateTime,
    elapsed_micros: u64,
    utc_offset: i32,
) -> Option<NaiveDateTime> {
    let elapsed = Duration::microseconds(i64::try_from(elapsed_micros).ok()?);
    utc.checked_add_signed(elapsed)?
        .checked_add_signed(Duration::seconds(utc_offset.into()))
}
