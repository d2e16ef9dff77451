#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{AnyPin, Level, Output, OutputDrive, Pin},
    peripherals::{RNG, SPI2},
    rng::{self, Rng},
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Ticker};

bind_interrupts!(struct Irqs {
    RNG => rng::InterruptHandler<RNG>;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{backlight::Backlight, display::Display};
use pinetime_wordclock::{PhraseWatchface, WatchFaceState};
use system::{
    config::system_config,
    time::{TimeManager, TimeReference},
};

// Others
use chrono::{NaiveDateTime, Timelike};

// Include build time epoch and UTC offset
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

// Communication channels
static TIME: Signal<ThreadModeRawMutex, NaiveDateTime> = Signal::new();

/// Get the current time once per second.
#[embassy_executor::task(pool_size = 1)]
async fn update_time(clock: TimeManager) {
    let mut tick = Ticker::every(Duration::from_secs(1));
    loop {
        match clock.get_time() {
            // Send time to channel
            Some(now) => TIME.signal(now),
            None => defmt::warn!("Clock out of range"),
        }

        // Re-schedule the timer interrupt
        tick.next().await;
    }
}

/// Redraw the watchface whenever a new time arrives.
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(mut display: Display, mut face: PhraseWatchface<Rng<'static, RNG>>) {
    loop {
        let time = TIME.wait().await;
        match display.show(&mut face, &WatchFaceState { time }) {
            Ok(true) => defmt::info!(
                "{}:{} {}",
                time.hour(),
                time.minute(),
                face.phrase()
            ),
            Ok(false) => {}
            Err(err) => defmt::error!("Failed to draw watchface: {}", defmt::Debug2Format(&err)),
        }
    }
}

fn output(pin: AnyPin, level: Level) -> Output<'static, AnyPin> {
    Output::new(pin, level, OutputDrive::Standard)
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(system_config());
    defmt::info!("Initializing");

    // Initialize Backlight, off until the panel shows something
    let backlight = Backlight::init(
        output(p.P0_14.degrade(), Level::High),
        output(p.P0_22.degrade(), Level::High),
        output(p.P0_23.degrade(), Level::High),
    );

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        output(p.P0_25.degrade(), Level::High),
        output(p.P0_18.degrade(), Level::Low),
        output(p.P0_26.degrade(), Level::Low),
        backlight,
    ));

    // Hardware RNG picks the lead-in wording
    let face = PhraseWatchface::new(Rng::new(p.RNG, Irqs));

    // Start the clock at build time
    let reference = unwrap!(TimeReference::from_timestamp(UTC_EPOCH));
    let clock = TimeManager::init(reference, UTC_OFFSET);

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(update_time(clock)));
    unwrap!(spawner.spawn(update_lcd(display, face)));
}
