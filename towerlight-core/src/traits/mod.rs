//! Hardware capability traits
//!
//! These traits define the interface between the panel logic and the
//! drivers fitted on a given board. Fakes implementing the same contracts
//! drive the unit tests.

pub mod clock;
pub mod display;
pub mod network;
pub mod sensor;

pub use clock::{ClockTime, RealTimeClock};
pub use display::{DisplayError, DisplayExt, DisplaySink};
pub use network::{MacAddress, NetworkInterface};
pub use sensor::{
    celsius_to_fahrenheit, Absent, ClimateSample, ClimateSensor, LuxSensor, PreferredClimate,
};
