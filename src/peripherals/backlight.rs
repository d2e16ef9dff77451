//! Backlight control module for PineTime
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/backlight.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::gpio::{AnyPin, Level, Output};

/// Brightness used after boot
pub const DEFAULT_BRIGHTNESS: u8 = 2;

const MAX_BRIGHTNESS: u8 = 7;

/// Control the backlight.
///
/// There are three active-low backlight pins, each connected to a FET that
/// toggles backlight power through a resistor.
///
/// - Low: 2.2 kΩ
/// - Mid: 100 Ω
/// - High: 30 Ω
///
/// Each bit of the brightness level drives one pin, giving 7 levels plus off.
pub struct Backlight {
    low: Output<'static, AnyPin>,
    mid: Output<'static, AnyPin>,
    high: Output<'static, AnyPin>,
}

impl Backlight {
    /// Configure backlight pins on boot, starting switched off
    pub fn init(
        low: Output<'static, AnyPin>,
        mid: Output<'static, AnyPin>,
        high: Output<'static, AnyPin>,
    ) -> Self {
        let mut backlight = Self { low, mid, high };
        backlight.off();
        backlight
    }

    /// Set the brightness level between 0 (off) and 7 (max brightness).
    pub fn set(&mut self, brightness: u8) -> Result<(), Error> {
        if brightness > MAX_BRIGHTNESS {
            return Err(Error::OutOfBounds);
        }
        defmt::debug!("Setting backlight brightness to {}", brightness);

        drive(&mut self.low, brightness & 0x01 > 0);
        drive(&mut self.mid, brightness & 0x02 > 0);
        drive(&mut self.high, brightness & 0x04 > 0);

        Ok(())
    }

    /// Turn off the backlight.
    pub fn off(&mut self) {
        drive(&mut self.low, false);
        drive(&mut self.mid, false);
        drive(&mut self.high, false);
    }
}

/// Pins are active low
fn drive(pin: &mut Output<'static, AnyPin>, on: bool) {
    pin.set_level(if on { Level::Low } else { Level::High });
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    OutOfBounds,
}
