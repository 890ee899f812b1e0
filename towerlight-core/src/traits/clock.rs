//! Real-time clock trait

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wall-clock time of day as read from the RTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockTime {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Minute of hour (0-59)
    pub minute: u8,
}

impl ClockTime {
    /// Create a time of day, rejecting out-of-range fields
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }
}

/// Trait for real-time clock peripherals
pub trait RealTimeClock {
    /// Check whether the clock chip answered at boot
    ///
    /// Takes `&mut self` because probing usually means a bus transaction.
    fn is_present(&mut self) -> bool;

    /// Read the current time of day
    fn now(&mut self) -> ClockTime;
}
