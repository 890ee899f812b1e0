//! Climate and ambient light sensor traits

/// Convert degrees Celsius to degrees Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 1.8 + 32.0
}

/// One climate measurement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClimateSample {
    /// Temperature in degrees Celsius
    pub celsius: f32,
    /// Temperature in degrees Fahrenheit
    pub fahrenheit: f32,
    /// Relative humidity in percent, if the sensor measures it
    pub humidity: Option<f32>,
}

impl ClimateSample {
    /// Sample from a temperature-only sensor
    pub fn from_celsius(celsius: f32) -> Self {
        Self {
            celsius,
            fahrenheit: celsius_to_fahrenheit(celsius),
            humidity: None,
        }
    }

    /// Sample from a combined temperature and humidity sensor
    pub fn with_humidity(celsius: f32, humidity: f32) -> Self {
        Self {
            humidity: Some(humidity),
            ..Self::from_celsius(celsius)
        }
    }
}

/// Trait for temperature (and optionally humidity) sensors
///
/// Implementations cover temperature-only parts such as the MCP9808 and
/// combined parts such as the SHT4x.
pub trait ClimateSensor {
    /// Check whether the sensor answered at boot
    ///
    /// Takes `&mut self` because probing usually means a bus transaction.
    fn is_present(&mut self) -> bool;

    /// Whether [`read`](ClimateSensor::read) fills in humidity
    fn measures_humidity(&self) -> bool {
        false
    }

    /// Take a synchronous measurement
    fn read(&mut self) -> ClimateSample;
}

/// Trait for ambient light sensors with free-running conversions
pub trait LuxSensor {
    /// Check whether the sensor answered at boot
    fn is_present(&mut self) -> bool;

    /// Check whether the current conversion has completed
    fn has_value(&mut self) -> bool;

    /// Read the completed conversion in lux
    fn read_lux(&mut self) -> f32;

    /// Start the next conversion
    fn start(&mut self);
}

/// Climate source that prefers one sensor and falls back to another
///
/// The ethernet board can carry both a combined temperature/humidity
/// sensor and a temperature-only sensor; the combined one wins when fitted.
/// Presence of both is probed once in [`PreferredClimate::probe`].
pub struct PreferredClimate<P, S> {
    primary: P,
    secondary: S,
    primary_present: bool,
    secondary_present: bool,
}

impl<P: ClimateSensor, S: ClimateSensor> PreferredClimate<P, S> {
    /// Probe both sensors and build the combined source
    pub fn probe(mut primary: P, mut secondary: S) -> Self {
        let primary_present = primary.is_present();
        let secondary_present = secondary.is_present();
        Self {
            primary,
            secondary,
            primary_present,
            secondary_present,
        }
    }

    /// Get back the wrapped sensors
    pub fn into_inner(self) -> (P, S) {
        (self.primary, self.secondary)
    }
}

impl<P: ClimateSensor, S: ClimateSensor> ClimateSensor for PreferredClimate<P, S> {
    fn is_present(&mut self) -> bool {
        self.primary_present || self.secondary_present
    }

    fn measures_humidity(&self) -> bool {
        if self.primary_present {
            self.primary.measures_humidity()
        } else {
            self.secondary_present && self.secondary.measures_humidity()
        }
    }

    fn read(&mut self) -> ClimateSample {
        if self.primary_present {
            self.primary.read()
        } else {
            self.secondary.read()
        }
    }
}

/// Placeholder for a peripheral that is not fitted on this board
///
/// Reports not-present for every sensor trait, so its read methods are
/// never reached by the poller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Absent;

impl ClimateSensor for Absent {
    fn is_present(&mut self) -> bool {
        false
    }

    fn read(&mut self) -> ClimateSample {
        ClimateSample::from_celsius(0.0)
    }
}

impl LuxSensor for Absent {
    fn is_present(&mut self) -> bool {
        false
    }

    fn has_value(&mut self) -> bool {
        false
    }

    fn read_lux(&mut self) -> f32 {
        0.0
    }

    fn start(&mut self) {}
}

impl super::RealTimeClock for Absent {
    fn is_present(&mut self) -> bool {
        false
    }

    fn now(&mut self) -> super::ClockTime {
        super::ClockTime::default()
    }
}
