//! Configuration type definitions
//!
//! These types are written by the configuration collaborator (boot code,
//! user controls) and are read-only to the poller and renderer.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of screen mode slots on any board
pub const MAX_SCREEN_MODES: usize = 8;

/// Maximum custom text length (one line of the small font)
pub const CUSTOM_TEXT_LEN: usize = 21;

/// Shortest climate poll interval (MCP9808 worst-case conversion time)
pub const MIN_CLIMATE_INTERVAL_MS: u32 = 250;

/// Shortest lux poll interval (high resolution conversion time)
pub const MIN_LUX_INTERVAL_MS: u32 = 180;

/// Default climate poll interval
pub const DEFAULT_CLIMATE_INTERVAL_MS: u32 = 2000;

/// Default lux poll interval
pub const DEFAULT_LUX_INTERVAL_MS: u32 = 1000;

/// What the two display lines show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScreenMode {
    /// Display dark
    Off,
    /// IP address / MAC address
    NetworkInfo,
    /// Time of day / temperature
    ClockTemperature,
    /// Ambient light / temperature
    LuxTemperature,
    /// Relative humidity / temperature
    HumidityTemperature,
    /// User-set line one / line two
    CustomText,
}

impl ScreenMode {
    /// Every screen mode, in ethernet slot order
    pub const ALL: [ScreenMode; 6] = [
        ScreenMode::Off,
        ScreenMode::NetworkInfo,
        ScreenMode::ClockTemperature,
        ScreenMode::LuxTemperature,
        ScreenMode::HumidityTemperature,
        ScreenMode::CustomText,
    ];
}

const ETHERNET_MODES: &[ScreenMode] = &[
    ScreenMode::Off,
    ScreenMode::NetworkInfo,
    ScreenMode::ClockTemperature,
    ScreenMode::LuxTemperature,
    ScreenMode::HumidityTemperature,
    ScreenMode::CustomText,
];

// The wifi board has no humidity sensor; custom text takes slot 4.
const WIFI_MODES: &[ScreenMode] = &[
    ScreenMode::Off,
    ScreenMode::NetworkInfo,
    ScreenMode::ClockTemperature,
    ScreenMode::LuxTemperature,
    ScreenMode::CustomText,
];

/// Board variant
///
/// Selects the screen mode slot table. The selector stored in
/// [`PanelConfig::screen_mode`] is a raw slot index into this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeviceVariant {
    /// Wired board, optional SHT4x humidity sensor
    #[default]
    Ethernet,
    /// Wireless board, temperature-only sensor
    Wifi,
}

impl DeviceVariant {
    /// Screen modes in slot order
    pub const fn modes(self) -> &'static [ScreenMode] {
        match self {
            DeviceVariant::Ethernet => ETHERNET_MODES,
            DeviceVariant::Wifi => WIFI_MODES,
        }
    }

    /// Resolve a raw slot index; `None` for unmapped slots
    pub fn screen_mode(self, raw: u8) -> Option<ScreenMode> {
        self.modes().get(raw as usize).copied()
    }

    /// Slot index of a screen mode on this board
    pub fn slot_of(self, mode: ScreenMode) -> Option<u8> {
        self.modes()
            .iter()
            .position(|m| *m == mode)
            .map(|idx| idx as u8)
    }
}

/// Time of day rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockFormat {
    /// " 9:00 AM"
    Hour12,
    /// "09:00h"
    #[default]
    Hour24,
}

/// Temperature rendering unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Celsius, "21.5\tC"
    #[default]
    Celsius,
    /// Degrees Fahrenheit, "70.7\tF"
    Fahrenheit,
}

impl TemperatureUnit {
    /// Unit letter printed after the value
    pub const fn symbol(self) -> char {
        match self {
            TemperatureUnit::Celsius => 'C',
            TemperatureUnit::Fahrenheit => 'F',
        }
    }
}

/// Re-sample cadence per sensor class
///
/// Intervals never drop below the sensor's conversion time; both the
/// constructor and the accessors clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollIntervals {
    climate_ms: u32,
    lux_ms: u32,
}

impl PollIntervals {
    /// Create intervals, clamping each to its minimum
    pub const fn new(climate_ms: u32, lux_ms: u32) -> Self {
        Self {
            climate_ms: clamp_min(climate_ms, MIN_CLIMATE_INTERVAL_MS),
            lux_ms: clamp_min(lux_ms, MIN_LUX_INTERVAL_MS),
        }
    }

    /// Temperature/humidity interval in milliseconds
    pub const fn climate_ms(&self) -> u32 {
        clamp_min(self.climate_ms, MIN_CLIMATE_INTERVAL_MS)
    }

    /// Ambient light interval in milliseconds
    pub const fn lux_ms(&self) -> u32 {
        clamp_min(self.lux_ms, MIN_LUX_INTERVAL_MS)
    }
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self::new(DEFAULT_CLIMATE_INTERVAL_MS, DEFAULT_LUX_INTERVAL_MS)
    }
}

const fn clamp_min(value: u32, min: u32) -> u32 {
    if value < min {
        min
    } else {
        value
    }
}

/// Per-slot sleep eligibility
///
/// Slots past [`MAX_SCREEN_MODES`] are never eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SleepTable {
    eligible: [bool; MAX_SCREEN_MODES],
}

impl SleepTable {
    /// Table with every slot eligible
    pub const fn all() -> Self {
        Self {
            eligible: [true; MAX_SCREEN_MODES],
        }
    }

    /// Build from a prefix of slots; missing slots are not eligible
    ///
    /// Returns `None` if more than [`MAX_SCREEN_MODES`] entries are given.
    pub fn from_slots(slots: &[bool]) -> Option<Self> {
        if slots.len() > MAX_SCREEN_MODES {
            return None;
        }
        let mut table = Self::default();
        table.eligible[..slots.len()].copy_from_slice(slots);
        Some(table)
    }

    /// Mark a slot eligible or not; out-of-range slots are ignored
    pub fn set(&mut self, raw: u8, eligible: bool) {
        if let Some(slot) = self.eligible.get_mut(raw as usize) {
            *slot = eligible;
        }
    }

    /// Check whether a slot honors the sleep flag
    pub fn is_eligible(&self, raw: u8) -> bool {
        self.eligible.get(raw as usize).copied().unwrap_or(false)
    }
}

/// User-set text for the custom screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomText {
    /// Top line
    pub line_one: String<CUSTOM_TEXT_LEN>,
    /// Bottom line
    pub line_two: String<CUSTOM_TEXT_LEN>,
}

impl CustomText {
    /// Build both lines; `None` if either exceeds [`CUSTOM_TEXT_LEN`]
    pub fn new(line_one: &str, line_two: &str) -> Option<Self> {
        let mut text = Self::default();
        text.line_one.push_str(line_one).ok()?;
        text.line_two.push_str(line_two).ok()?;
        Some(text)
    }
}

/// Complete panel configuration
///
/// Passed by reference into every tick; the core never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Board variant (selects the screen mode table)
    pub variant: DeviceVariant,
    /// Raw screen mode slot, resolved through the variant's table
    pub screen_mode: u8,
    /// Clock rendering
    pub clock_format: ClockFormat,
    /// Temperature rendering
    pub temperature_unit: TemperatureUnit,
    /// Global sleep flag
    pub sleep_active: bool,
    /// Which slots honor the sleep flag
    pub sleep_modes: SleepTable,
    /// Custom screen text
    pub custom: CustomText,
    /// Sensor poll cadence
    pub intervals: PollIntervals,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            variant: DeviceVariant::Ethernet,
            screen_mode: 2,
            clock_format: ClockFormat::Hour24,
            temperature_unit: TemperatureUnit::Celsius,
            sleep_active: false,
            sleep_modes: SleepTable::default(),
            custom: CustomText::default(),
            intervals: PollIntervals::default(),
        }
    }
}

impl PanelConfig {
    /// Resolve the raw slot through the variant's table
    pub fn resolved_mode(&self) -> Option<ScreenMode> {
        self.variant.screen_mode(self.screen_mode)
    }

    /// Select a screen mode by name; returns false if the board lacks it
    pub fn select_mode(&mut self, mode: ScreenMode) -> bool {
        match self.variant.slot_of(mode) {
            Some(slot) => {
                self.screen_mode = slot;
                true
            }
            None => false,
        }
    }

    /// Check whether the display should be dark this tick
    pub fn is_blanked(&self) -> bool {
        self.sleep_active && self.sleep_modes.is_eligible(self.screen_mode)
    }
}
