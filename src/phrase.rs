//! Time to phrase mapping
//!
//! Every five minute window is described relative to its nearest landmark:
//! "it's almost ten past", "it's ten past", "just after ten past". From
//! minute 33 on the phrase refers to the upcoming hour ("twenty to three").

use core::fmt;

use chrono::NaiveDateTime;
use rand_core::RngCore;

use crate::{debug, trace, ClockTime, DateText, Error};

const HOURS: [&str; 13] = [
    "twelve", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve",
];

const MINUTES: [&str; 12] = [
    "o'clock",
    "five past",
    "ten past",
    "qtr past",
    "20 past",
    "25 past",
    "half",
    "25 to",
    "twenty to",
    "quarter to",
    "ten to",
    "five to",
];

const BEFORE: [&str; 2] = ["it's almost", "it's nearly"];
const AFTER: [&str; 2] = ["just after", "just gone"];
const EXACT: [&str; 2] = ["it's", "it is now"];

/// First minute at which the phrase names the next hour
const NEXT_HOUR_FROM: u8 = 33;

/// How the minute relates to the nearest five minute landmark
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    /// On the landmark
    Exact,
    /// Three or four minutes short of the next landmark
    Before,
    /// One or two minutes past the landmark
    After,
}

impl Proximity {
    fn leads(self) -> &'static [&'static str; 2] {
        match self {
            Proximity::Exact => &EXACT,
            Proximity::Before => &BEFORE,
            Proximity::After => &AFTER,
        }
    }
}

/// Classify `minute` against the five minute landmarks
pub fn classify_proximity(minute: u8) -> Proximity {
    match minute % 5 {
        0 => Proximity::Exact,
        3..=4 => Proximity::Before,
        _ => Proximity::After,
    }
}

/// Whether the phrase names the current hour rather than the next one
pub fn is_past_hour(minute: u8) -> bool {
    minute < NEXT_HOUR_FROM
}

/// Pick one of the two lead-ins for `proximity`
pub fn select_lead<R: RngCore>(proximity: Proximity, rng: &mut R) -> &'static str {
    let leads = proximity.leads();
    leads[rng.next_u32() as usize % leads.len()]
}

/// Minute phrase for a five minute bucket (0–11).
///
/// When the minute is just short of a landmark the phrase already names
/// that landmark.
pub fn select_minute_phrase(proximity: Proximity, minute_bucket: u8) -> &'static str {
    let index = match proximity {
        Proximity::Before => (minute_bucket as usize + 1) % 12,
        _ => minute_bucket as usize % 12,
    };
    MINUTES[index]
}

/// Hour name, either for `hour` itself or for the hour after it
pub fn select_hour_phrase(past_hour: bool, hour: u8) -> &'static str {
    let hour12 = hour as usize % 12;
    if past_hour {
        HOURS[hour12]
    } else {
        HOURS[(hour12 + 1) % 12]
    }
}

/// Text shown on the watchface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderedPhrase {
    /// First line, e.g. "it's nearly"
    pub lead: &'static str,
    /// Second line
    pub middle: &'static str,
    /// Third line
    pub hour_phrase: &'static str,
    /// Date line
    pub date: DateText,
}

impl fmt::Display for RenderedPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lead, self.middle, self.hour_phrase)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RenderedPhrase {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{} {} {} ({})",
            self.lead,
            self.middle,
            self.hour_phrase,
            self.date
        )
    }
}

/// Turns the current time into a [`RenderedPhrase`].
///
/// Keeps the last rendered time and only recomputes when hour or minute
/// changed.
#[derive(Debug, Default)]
pub struct PhraseRenderer {
    last: Option<ClockTime>,
    phrase: RenderedPhrase,
}

impl PhraseRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered phrase
    pub fn phrase(&self) -> &RenderedPhrase {
        &self.phrase
    }

    /// Last rendered time, `None` before the first render
    pub fn last_rendered(&self) -> Option<ClockTime> {
        self.last
    }

    /// Render `now`, returning the phrase for it
    pub fn render<R: RngCore>(
        &mut self,
        now: &NaiveDateTime,
        rng: &mut R,
    ) -> Result<&RenderedPhrase, Error> {
        self.update(now, rng)?;
        Ok(&self.phrase)
    }

    /// Render `now`, returning whether the phrase was recomputed.
    ///
    /// Nothing changes, and `rng` is not used, when hour and minute match
    /// the previous call.
    pub fn update<R: RngCore>(&mut self, now: &NaiveDateTime, rng: &mut R) -> Result<bool, Error> {
        let time = ClockTime::from_timelike(now)?;
        if self.last == Some(time) {
            trace!("{}:{} already rendered", time.hour(), time.minute());
            return Ok(false);
        }
        let date = DateText::new(now)?;
        self.last = Some(time);
        self.phrase = compose(time, date, rng);
        debug!("Rendered phrase for {}:{}", time.hour(), time.minute());
        Ok(true)
    }
}

fn compose<R: RngCore>(time: ClockTime, date: DateText, rng: &mut R) -> RenderedPhrase {
    let proximity = time.proximity();
    let past_hour = time.is_past_hour();
    let bucket = time.minute_bucket();

    let lead = select_lead(proximity, rng);
    let minute_phrase = select_minute_phrase(proximity, bucket);
    let hour_phrase = select_hour_phrase(past_hour, time.hour());

    // At the top of the hour the hour comes first: "it's almost one o'clock"
    let hour_first = match proximity {
        Proximity::Before => bucket == 11,
        Proximity::Exact | Proximity::After => bucket == 0,
    };

    if hour_first {
        RenderedPhrase {
            lead,
            middle: hour_phrase,
            hour_phrase: minute_phrase,
            date,
        }
    } else {
        RenderedPhrase {
            lead,
            middle: minute_phrase,
            hour_phrase,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::{rngs::mock::StepRng, rngs::StdRng, SeedableRng};

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2015, 1, 5)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .unwrap()
    }

    fn render(hour: u32, minute: u32) -> RenderedPhrase {
        let mut rng = StepRng::new(0, 1);
        *PhraseRenderer::new().render(&at(hour, minute), &mut rng).unwrap()
    }

    #[test]
    fn classify_exact_on_landmarks() {
        for minute in 0..60 {
            let proximity = classify_proximity(minute);
            assert_eq!(proximity == Proximity::Exact, minute % 5 == 0, "{minute}");
        }
    }

    #[test]
    fn classify_before_and_after() {
        assert_eq!(classify_proximity(1), Proximity::After);
        assert_eq!(classify_proximity(2), Proximity::After);
        assert_eq!(classify_proximity(3), Proximity::Before);
        assert_eq!(classify_proximity(4), Proximity::Before);
        assert_eq!(classify_proximity(59), Proximity::Before);
    }

    #[test]
    fn past_hour_threshold() {
        assert!(is_past_hour(0));
        assert!(is_past_hour(32));
        assert!(!is_past_hour(33));
        assert!(!is_past_hour(59));
    }

    #[test]
    fn minute_phrase_in_table() {
        for minute in 0..60u8 {
            let phrase = select_minute_phrase(classify_proximity(minute), minute / 5);
            assert!(MINUTES.contains(&phrase));
        }
    }

    #[test]
    fn before_rounds_up() {
        assert_eq!(select_minute_phrase(Proximity::Before, 0), "five past");
        assert_eq!(select_minute_phrase(Proximity::Before, 11), "o'clock");
        assert_eq!(select_minute_phrase(Proximity::After, 11), "five to");
        assert_eq!(select_minute_phrase(Proximity::Exact, 6), "half");
    }

    #[test]
    fn hour_phrase_wraps() {
        assert_eq!(select_hour_phrase(true, 0), "twelve");
        assert_eq!(select_hour_phrase(true, 13), "one");
        assert_eq!(select_hour_phrase(false, 11), "twelve");
        assert_eq!(select_hour_phrase(false, 23), "twelve");
        assert_eq!(select_hour_phrase(false, 12), "one");
    }

    #[test]
    fn lead_follows_rng() {
        let mut rng = StepRng::new(0, 1);
        assert_eq!(select_lead(Proximity::Before, &mut rng), "it's almost");
        assert_eq!(select_lead(Proximity::Before, &mut rng), "it's nearly");
        assert_eq!(select_lead(Proximity::After, &mut rng), "just after");
        assert_eq!(select_lead(Proximity::After, &mut rng), "just gone");
        assert_eq!(select_lead(Proximity::Exact, &mut rng), "it's");
        assert_eq!(select_lead(Proximity::Exact, &mut rng), "it is now");
    }

    #[test]
    fn twenty_past_two() {
        let phrase = render(2, 20);
        assert!(EXACT.contains(&phrase.lead));
        assert_eq!(phrase.middle, "20 past");
        assert_eq!(phrase.hour_phrase, "two");
        assert_eq!(phrase.date.as_str(), "Mon January 05");
    }

    #[test]
    fn almost_three_oclock() {
        let phrase = render(2, 58);
        assert!(BEFORE.contains(&phrase.lead));
        assert_eq!(phrase.middle, "three");
        assert_eq!(phrase.hour_phrase, "o'clock");
    }

    #[test]
    fn eleven_oclock() {
        let phrase = render(11, 0);
        assert!(EXACT.contains(&phrase.lead));
        assert_eq!(phrase.middle, "eleven");
        assert_eq!(phrase.hour_phrase, "o'clock");
    }

    #[test]
    fn just_after_midnight() {
        let phrase = render(0, 2);
        assert!(AFTER.contains(&phrase.lead));
        assert_eq!(phrase.middle, "twelve");
        assert_eq!(phrase.hour_phrase, "o'clock");
    }

    #[test]
    fn twenty_to_uses_next_hour() {
        let phrase = render(14, 40);
        assert_eq!(phrase.middle, "twenty to");
        assert_eq!(phrase.hour_phrase, "three");
    }

    #[test]
    fn nearly_half_past() {
        // Minute 29 is still before the 33 minute switch
        let phrase = render(2, 29);
        assert!(BEFORE.contains(&phrase.lead));
        assert_eq!(phrase.middle, "half");
        assert_eq!(phrase.hour_phrase, "two");
    }

    #[test]
    fn nearly_five_past_not_swapped() {
        let phrase = render(7, 3);
        assert_eq!(phrase.middle, "five past");
        assert_eq!(phrase.hour_phrase, "seven");
    }

    #[test]
    fn display_joins_lines() {
        let mut rng = StepRng::new(0, 1);
        let mut renderer = PhraseRenderer::new();
        let phrase = renderer.render(&at(2, 58), &mut rng).unwrap();
        assert_eq!(format!("{phrase}"), "it's almost three o'clock");
    }

    #[test]
    fn same_minute_is_cached() {
        let mut rng = StepRng::new(0, 1);
        let mut renderer = PhraseRenderer::new();
        assert_eq!(renderer.last_rendered(), None);

        assert!(renderer.update(&at(9, 15), &mut rng).unwrap());
        let first = *renderer.phrase();

        // Seconds changed, minute did not
        let later = at(9, 15) + chrono::Duration::seconds(30);
        assert!(!renderer.update(&later, &mut rng).unwrap());
        assert_eq!(*renderer.phrase(), first);
        assert_eq!(renderer.last_rendered(), ClockTime::new(9, 15).ok());

        assert!(renderer.update(&at(9, 16), &mut rng).unwrap());
        assert_eq!(renderer.phrase().middle, "qtr past");
        assert!(AFTER.contains(&renderer.phrase().lead));
    }

    #[test]
    fn cache_hit_does_not_draw_randomness() {
        let mut rng = StepRng::new(0, 1);
        let mut renderer = PhraseRenderer::new();
        renderer.update(&at(5, 0), &mut rng).unwrap();
        renderer.update(&at(5, 0), &mut rng).unwrap();
        renderer.update(&at(5, 0), &mut rng).unwrap();
        assert_eq!(rng.next_u32(), 1);
    }

    #[test]
    fn first_render_at_midnight() {
        let mut rng = StepRng::new(0, 1);
        let mut renderer = PhraseRenderer::new();
        assert!(renderer.update(&at(0, 0), &mut rng).unwrap());
        assert_eq!(renderer.phrase().middle, "twelve");
        assert_eq!(renderer.phrase().hour_phrase, "o'clock");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut first = PhraseRenderer::new();
        let mut second = PhraseRenderer::new();
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        for minute in 0..60 {
            let now = at(10, minute);
            assert_eq!(
                first.render(&now, &mut rng_a).unwrap(),
                second.render(&now, &mut rng_b).unwrap()
            );
        }
    }
}
