//! Word clock watchface
//!
//! Three lines of phrase in ProFont, left aligned, with the date centred
//! underneath.

use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;
use rand_core::RngCore;

use super::{DrawError, WatchFace, WatchFaceState};
use crate::{trace, PhraseRenderer, RenderedPhrase};

const LCD_W: u32 = 240;

const MARGIN: i32 = 10;

const BACKGROUND_COLOR: Rgb565 = Rgb565::BLACK;
const TEXT_COLOR: Rgb565 = Rgb565::WHITE;

/// Fixed text region of the watchface
struct Label {
    bounds: Rectangle,
    font: &'static MonoFont<'static>,
    alignment: Alignment,
}

impl Label {
    const fn new(
        top: i32,
        height: u32,
        font: &'static MonoFont<'static>,
        alignment: Alignment,
    ) -> Self {
        Self {
            bounds: Rectangle::new(Point::new(0, top), Size::new(LCD_W, height)),
            font,
            alignment,
        }
    }

    /// Blank the region and draw `text` into it
    fn draw<D>(&self, target: &mut D, text: &str) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(BACKGROUND_COLOR))
            .draw(target)?;

        let center = self.bounds.center();
        let anchor = match self.alignment {
            Alignment::Left => Point::new(self.bounds.top_left.x + MARGIN, center.y),
            Alignment::Center => center,
            Alignment::Right => Point::new(
                self.bounds.top_left.x + self.bounds.size.width as i32 - MARGIN,
                center.y,
            ),
        };

        let character_style = MonoTextStyle::new(self.font, TEXT_COLOR);
        let text_style = TextStyleBuilder::new()
            .alignment(self.alignment)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(text, anchor, character_style, text_style).draw(target)?;

        Ok(())
    }
}

/// Word clock watchface
pub struct PhraseWatchface<R> {
    renderer: PhraseRenderer,
    /// Source for picking between synonymous lead-ins
    rng: R,
    lead_label: Label,
    middle_label: Label,
    hour_label: Label,
    date_label: Label,
    /// Whether the current phrase is on screen
    drawn: bool,
}

impl<R> PhraseWatchface<R>
where
    R: RngCore,
{
    /// Create new watchface
    pub fn new(rng: R) -> Self {
        Self {
            renderer: PhraseRenderer::new(),
            rng,
            lead_label: Label::new(20, 40, &PROFONT_24_POINT, Alignment::Left),
            middle_label: Label::new(70, 40, &PROFONT_24_POINT, Alignment::Left),
            hour_label: Label::new(120, 40, &PROFONT_24_POINT, Alignment::Left),
            date_label: Label::new(190, 30, &FONT_10X20, Alignment::Center),
            drawn: false,
        }
    }

    /// Phrase currently shown
    pub fn phrase(&self) -> &RenderedPhrase {
        self.renderer.phrase()
    }

    /// Blank the whole screen. The next update redraws everything.
    pub fn clear<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.drawn = false;
        target.clear(BACKGROUND_COLOR)
    }

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let phrase = self.renderer.phrase();
        self.lead_label.draw(target, phrase.lead)?;
        self.middle_label.draw(target, phrase.middle)?;
        self.hour_label.draw(target, phrase.hour_phrase)?;
        self.date_label.draw(target, phrase.date.as_str())
    }
}

impl<R> WatchFace for PhraseWatchface<R>
where
    R: RngCore,
{
    fn update<D>(
        &mut self,
        target: &mut D,
        state: &WatchFaceState,
    ) -> Result<bool, DrawError<D::Error>>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let changed = self.renderer.update(&state.time, &mut self.rng)?;
        if !changed && self.drawn {
            return Ok(false);
        }

        // A failed draw leaves `drawn` unset so the next tick retries
        self.drawn = false;
        self.draw(target).map_err(DrawError::Display)?;
        self.drawn = true;
        trace!("Watchface redrawn");

        Ok(true)
    }
}
