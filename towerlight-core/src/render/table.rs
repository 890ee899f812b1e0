//! Screen mode to line producer table

use crate::config::ScreenMode;

/// Source of one display line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineProducer {
    /// Leave the line empty
    None,
    /// Time of day from the RTC
    Time,
    /// Temperature in the configured unit
    Temperature,
    /// Relative humidity
    Humidity,
    /// Ambient light
    Lux,
    /// IPv4 address, only while the link is up
    LocalAddress,
    /// MAC address
    HardwareAddress,
    /// First custom text line
    CustomLineOne,
    /// Second custom text line
    CustomLineTwo,
}

impl LineProducer {
    /// Whether this producer prints in the small font
    pub const fn is_small(self) -> bool {
        matches!(self, LineProducer::LocalAddress | LineProducer::HardwareAddress)
    }
}

/// Producers for the top and bottom line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinePair {
    /// Drawn at the top row
    pub top: LineProducer,
    /// Drawn at the bottom row
    pub bottom: LineProducer,
}

impl LinePair {
    const fn new(top: LineProducer, bottom: LineProducer) -> Self {
        Self { top, bottom }
    }
}

/// Look up the line producers for a screen mode
pub const fn line_pair(mode: ScreenMode) -> LinePair {
    use LineProducer as P;

    match mode {
        ScreenMode::Off => LinePair::new(P::None, P::None),
        ScreenMode::NetworkInfo => LinePair::new(P::LocalAddress, P::HardwareAddress),
        ScreenMode::ClockTemperature => LinePair::new(P::Time, P::Temperature),
        ScreenMode::LuxTemperature => LinePair::new(P::Lux, P::Temperature),
        ScreenMode::HumidityTemperature => LinePair::new(P::Humidity, P::Temperature),
        ScreenMode::CustomText => LinePair::new(P::CustomLineOne, P::CustomLineTwo),
    }
}
