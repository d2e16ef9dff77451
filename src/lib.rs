//! Word clock watchface for the PineTime
//!
//! Renders the time as a spoken phrase ("it's nearly half past two") on
//! three lines plus a date line. The phrase logic and the layout are
//! hardware independent and draw onto any `embedded-graphics` target, the
//! firmware in `main.rs` binds them to the PineTime display.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "defmt")]
pub(crate) use defmt::{debug, trace};

#[cfg(not(feature = "defmt"))]
pub(crate) use log::{debug, trace};

pub mod date;
pub mod error;
pub mod phrase;
pub mod time;
pub mod ui;

pub use date::DateText;
pub use error::Error;
pub use phrase::{PhraseRenderer, Proximity, RenderedPhrase};
pub use time::ClockTime;
pub use ui::{DrawError, PhraseWatchface, WatchFace, WatchFaceState};
