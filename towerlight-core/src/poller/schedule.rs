//! Sensor poll scheduler
//!
//! Each sensor class is a small state machine evaluated once per tick:
//!
//! - **Idle**: interval not elapsed, cached value stale but valid
//! - **Due**: interval elapsed, one synchronous resample this tick
//! - **Due, pending** (lux only): interval elapsed but the conversion has not
//!   finished; retried every tick without touching the timestamp
//!
//! The new timestamp is the tick that noticed the elapsed interval, not a
//! computed deadline, so the cadence drifts by up to one tick per sample.
//! This is a debounce, not a fixed-rate timer.

use super::readings::{Readings, Temperature};
use crate::config::PollIntervals;
use crate::traits::{ClimateSensor, LuxSensor, RealTimeClock};

/// What happened to one sensor class during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollPhase {
    /// Sensor not fitted; branch skipped
    Absent,
    /// Interval not yet elapsed
    Idle,
    /// Fresh value stored this tick
    Sampled,
    /// Interval elapsed but the conversion is not ready
    Pending,
}

/// Per-tick polling summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollReport {
    /// Temperature/humidity class
    pub climate: PollPhase,
    /// Ambient light class
    pub lux: PollPhase,
    /// Whether the RTC was read
    pub clock_read: bool,
}

/// Polls the fitted sensors and owns the reading cache
///
/// Presence of each sensor is probed once in [`Poller::new`].
pub struct Poller<C, L, K> {
    climate: C,
    lux: L,
    clock: K,
    readings: Readings,
}

impl<C, L, K> Poller<C, L, K>
where
    C: ClimateSensor,
    L: LuxSensor,
    K: RealTimeClock,
{
    /// Probe the sensors and build an empty cache
    ///
    /// When a lux sensor is fitted its first conversion is started here so
    /// the first due tick can find a finished value.
    pub fn new(mut climate: C, mut lux: L, mut clock: K) -> Self {
        let climate_present = climate.is_present();
        let humidity_present = climate_present && climate.measures_humidity();
        let lux_present = lux.is_present();
        let clock_present = clock.is_present();

        if lux_present {
            lux.start();
        }

        #[cfg(feature = "defmt")]
        defmt::info!(
            "sensors: climate={} humidity={} lux={} rtc={}",
            climate_present,
            humidity_present,
            lux_present,
            clock_present
        );

        Self {
            climate,
            lux,
            clock,
            readings: Readings::new(climate_present, humidity_present, lux_present, clock_present),
        }
    }

    /// Get the cached readings
    pub fn readings(&self) -> &Readings {
        &self.readings
    }

    /// Run one polling pass
    ///
    /// # Arguments
    /// - `now_ms`: Monotonic milliseconds since boot (may wrap)
    /// - `intervals`: Per-class re-sample cadence
    pub fn poll(&mut self, now_ms: u32, intervals: &PollIntervals) -> PollReport {
        PollReport {
            climate: self.poll_climate(now_ms, intervals.climate_ms()),
            lux: self.poll_lux(now_ms, intervals.lux_ms()),
            clock_read: self.poll_clock(),
        }
    }

    /// Get the wrapped sensors back
    pub fn into_sensors(self) -> (C, L, K) {
        (self.climate, self.lux, self.clock)
    }

    #[cfg(test)]
    pub(crate) fn lux_sensor_mut(&mut self) -> &mut L {
        &mut self.lux
    }

    fn poll_climate(&mut self, now_ms: u32, interval_ms: u32) -> PollPhase {
        if !self.readings.temperature.is_present() {
            return PollPhase::Absent;
        }
        if !self.readings.temperature.is_due(now_ms, interval_ms) {
            return PollPhase::Idle;
        }

        let sample = self.climate.read();
        self.readings.temperature.record(
            Temperature {
                celsius: sample.celsius,
                fahrenheit: sample.fahrenheit,
            },
            now_ms,
        );
        if self.readings.humidity.is_present() {
            if let Some(humidity) = sample.humidity {
                self.readings.humidity.record(humidity, now_ms);
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("climate sampled at {}ms: {}C", now_ms, sample.celsius);

        PollPhase::Sampled
    }

    fn poll_lux(&mut self, now_ms: u32, interval_ms: u32) -> PollPhase {
        if !self.readings.lux.is_present() {
            return PollPhase::Absent;
        }
        if !self.readings.lux.is_due(now_ms, interval_ms) {
            return PollPhase::Idle;
        }
        if !self.lux.has_value() {
            #[cfg(feature = "defmt")]
            defmt::trace!("lux due, conversion pending");
            return PollPhase::Pending;
        }

        let lux = self.lux.read_lux();
        self.lux.start();
        self.readings.lux.record(lux, now_ms);

        #[cfg(feature = "defmt")]
        defmt::debug!("lux sampled at {}ms: {}", now_ms, lux);

        PollPhase::Sampled
    }

    fn poll_clock(&mut self) -> bool {
        if !self.readings.clock.is_present() {
            return false;
        }
        let time = self.clock.now();
        self.readings.clock.record(time);
        true
    }
}
