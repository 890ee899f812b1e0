//! Per-source polling scheduler
//!
//! Decides once per tick which sensor classes are due and refreshes the
//! cached readings the renderer draws from.

pub mod readings;
pub mod schedule;

pub use readings::{ClockReading, Readings, SensorReading, Temperature};
pub use schedule::{PollPhase, PollReport, Poller};
