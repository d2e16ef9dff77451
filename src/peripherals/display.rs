//! Display control module for PineTime

use display_interface_spi::SPIInterface;
use embassy_nrf::{
    gpio::{AnyPin, Output},
    peripherals::SPI2,
    spim::Spim,
};
use embassy_time::Delay;
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use mipidsi::{models::ST7789, Builder, Orientation};
use pinetime_wordclock::{DrawError, WatchFace, WatchFaceState};

use super::backlight::{self, Backlight};

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

type Lcd = mipidsi::Display<
    SPIInterface<Spim<'static, SPI2>, Output<'static, AnyPin>, Output<'static, AnyPin>>,
    ST7789,
    Output<'static, AnyPin>,
>;

/// ST7789 panel together with its backlight
pub struct Display {
    lcd: Lcd,
    backlight: Backlight,
}

impl Display {
    /// Configure the panel on boot and switch the backlight on
    pub fn init(
        spim: Spim<'static, SPI2>,
        cs_pin: Output<'static, AnyPin>,
        dc_pin: Output<'static, AnyPin>,
        rst_pin: Output<'static, AnyPin>,
        backlight: Backlight,
    ) -> Result<Self, Error> {
        let lcd = Builder::st7789(SPIInterface::new(spim, dc_pin, cs_pin))
            .with_display_size(LCD_W, LCD_H)
            .with_orientation(Orientation::Portrait(false))
            .init(&mut Delay, Some(rst_pin))
            .map_err(|_| Error::Init)?;

        let mut display = Self { lcd, backlight };
        display.clear()?;
        display
            .backlight
            .set(backlight::DEFAULT_BRIGHTNESS)
            .map_err(|_| Error::Backlight)?;

        Ok(display)
    }

    /// Clear the display
    pub fn clear(&mut self) -> Result<(), Error> {
        self.lcd.clear(Rgb565::BLACK).map_err(|_| Error::Draw)
    }

    /// Let `face` draw the current state, returns whether the screen changed
    pub fn show<F>(
        &mut self,
        face: &mut F,
        state: &WatchFaceState,
    ) -> Result<bool, DrawError<mipidsi::Error>>
    where
        F: WatchFace,
    {
        face.update(&mut self.lcd, state)
    }
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    /// Panel did not come up
    Init,
    /// Writing to the panel failed
    Draw,
    Backlight,
}
