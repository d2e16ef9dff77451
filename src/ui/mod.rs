//! UI definitions module
//! Based on: https://github.com/lupyuen/pinetime-watchface/blob/master/src/lib.rs

use chrono::NaiveDateTime;
use embedded_graphics::{pixelcolor::Rgb565, prelude::DrawTarget};

mod phrase_watchface;

pub use phrase_watchface::PhraseWatchface;

pub trait WatchFace {
    /// Update watchface with state.
    ///
    /// Returns whether anything was drawn to `target`.
    fn update<D>(
        &mut self,
        target: &mut D,
        state: &WatchFaceState,
    ) -> Result<bool, DrawError<D::Error>>
    where
        D: DrawTarget<Color = Rgb565>;
}

/// State for the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchFaceState {
    pub time: NaiveDateTime,
}

/// Failure while updating a watchface
#[derive(Debug, PartialEq, Eq)]
pub enum DrawError<E> {
    /// The state could not be turned into text
    Render(crate::Error),
    /// The display rejected a draw
    Display(E),
}

impl<E> From<crate::Error> for DrawError<E> {
    fn from(err: crate::Error) -> Self {
        DrawError::Render(err)
    }
}
