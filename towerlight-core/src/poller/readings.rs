//! Cached sensor readings
//!
//! Written only by the [`Poller`](super::Poller), read by the renderer.
//! Presence is fixed when the cache is built and never changes afterwards.

use crate::config::TemperatureUnit;
use crate::traits::ClockTime;

/// Temperature in both display units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature {
    /// Degrees Celsius
    pub celsius: f32,
    /// Degrees Fahrenheit
    pub fahrenheit: f32,
}

impl Temperature {
    /// Value in the requested unit
    pub fn in_unit(&self, unit: TemperatureUnit) -> f32 {
        match unit {
            TemperatureUnit::Celsius => self.celsius,
            TemperatureUnit::Fahrenheit => self.fahrenheit,
        }
    }
}

/// Last sampled value of one sensor class
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading<T> {
    value: T,
    present: bool,
    last_sample_ms: u32,
    samples: u32,
}

impl<T: Copy + Default> SensorReading<T> {
    /// Create an empty reading
    pub fn new(present: bool) -> Self {
        Self {
            value: T::default(),
            present,
            last_sample_ms: 0,
            samples: 0,
        }
    }

    /// Whether the sensor was detected at boot
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Cached value, or `None` if the sensor is not fitted
    ///
    /// Before the first sample this is the type's default (0.0).
    pub fn value(&self) -> Option<T> {
        self.present.then_some(self.value)
    }

    /// Tick time of the last sample (ms)
    pub fn last_sample_ms(&self) -> u32 {
        self.last_sample_ms
    }

    /// Number of samples taken since boot
    pub fn sample_count(&self) -> u32 {
        self.samples
    }

    /// Check whether more than `interval_ms` has passed since the last sample
    ///
    /// Uses wrapping arithmetic so the millisecond counter may roll over.
    pub(crate) fn is_due(&self, now_ms: u32, interval_ms: u32) -> bool {
        now_ms.wrapping_sub(self.last_sample_ms) > interval_ms
    }

    /// Store a fresh value stamped with the tick that took it
    pub(crate) fn record(&mut self, value: T, now_ms: u32) {
        self.value = value;
        self.last_sample_ms = now_ms;
        self.samples = self.samples.saturating_add(1);
    }
}

/// Last time of day read from the RTC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockReading {
    time: ClockTime,
    present: bool,
}

impl ClockReading {
    /// Create an empty reading
    pub fn new(present: bool) -> Self {
        Self {
            time: ClockTime::default(),
            present,
        }
    }

    /// Whether the RTC was detected at boot
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Cached time, or `None` if no RTC is fitted
    pub fn value(&self) -> Option<ClockTime> {
        self.present.then_some(self.time)
    }

    pub(crate) fn record(&mut self, time: ClockTime) {
        self.time = time;
    }
}

/// Every cached reading the renderer may draw
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    pub(crate) temperature: SensorReading<Temperature>,
    pub(crate) humidity: SensorReading<f32>,
    pub(crate) lux: SensorReading<f32>,
    pub(crate) clock: ClockReading,
}

impl Readings {
    /// Build an empty cache from boot-time presence flags
    pub fn new(temperature: bool, humidity: bool, lux: bool, clock: bool) -> Self {
        Self {
            temperature: SensorReading::new(temperature),
            humidity: SensorReading::new(humidity),
            lux: SensorReading::new(lux),
            clock: ClockReading::new(clock),
        }
    }

    /// Temperature reading
    pub fn temperature(&self) -> &SensorReading<Temperature> {
        &self.temperature
    }

    /// Relative humidity reading (%)
    pub fn humidity(&self) -> &SensorReading<f32> {
        &self.humidity
    }

    /// Ambient light reading (lux)
    pub fn lux(&self) -> &SensorReading<f32> {
        &self.lux
    }

    /// Time of day reading
    pub fn clock(&self) -> &ClockReading {
        &self.clock
    }
}
