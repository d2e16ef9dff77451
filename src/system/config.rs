//! General system configuration

use embassy_nrf::config::{Config, Debug, HfclkSource, LfclkSource};

/// Chip configuration for the PineTime.
///
/// `Config` is `non_exhaustive`, so start from the default and adjust.
pub fn system_config() -> Config {
    let mut config = Config::default();

    // The PineTime has both a 32 MHz and a 32.768 kHz crystal
    config.hfclk_source = HfclkSource::ExternalXtal;
    config.lfclk_source = LfclkSource::ExternalXtal;

    // DC/DC regulator massively reduces runtime current consumption
    config.dcdc.reg1 = true;

    // Allow debugging
    config.debug = Debug::Allowed;

    config
}
