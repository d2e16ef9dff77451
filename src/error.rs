//! Errors of the watchface library

use thiserror::Error;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Hour or minute outside of a valid wall-clock time
    #[error("invalid time {hour}:{minute}, expected hour 0-23 and minute 0-59")]
    InvalidArgument { hour: u32, minute: u32 },
    /// Date did not fit the label buffer
    #[error("date does not fit the label buffer")]
    DateFormat,
}
