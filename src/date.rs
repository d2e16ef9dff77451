//! Date line of the watchface

use core::fmt;

use chrono::Datelike;

use crate::Error;

/// Large enough for the longest date, "Wed September 30"
const BUF_LEN: usize = 20;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Date formatted as abbreviated weekday, full month name and zero padded
/// day, e.g. "Mon January 05".
#[derive(Clone, Copy)]
pub struct DateText {
    str_buf: [u8; BUF_LEN],
    len: usize,
}

impl DateText {
    /// Format the date part of any chrono value
    pub fn new<D: Datelike>(date: &D) -> Result<Self, Error> {
        let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize % WEEKDAYS.len()];
        let month = MONTHS[date.month0() as usize % MONTHS.len()];

        let mut str_buf = [0; BUF_LEN];
        let len = format_no_std::show(
            &mut str_buf,
            format_args!("{} {} {:02}", weekday, month, date.day()),
        )
        .map_err(|_| Error::DateFormat)?
        .len();

        Ok(Self { str_buf, len })
    }

    pub fn as_str(&self) -> &str {
        // Only ever filled from a `&str`
        core::str::from_utf8(&self.str_buf[..self.len]).unwrap_or_default()
    }
}

impl Default for DateText {
    fn default() -> Self {
        Self {
            str_buf: [0; BUF_LEN],
            len: 0,
        }
    }
}

impl PartialEq for DateText {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for DateText {}

impl fmt::Debug for DateText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DateText").field(&self.as_str()).finish()
    }
}

impl fmt::Display for DateText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DateText {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.as_str())
    }
}
