//! Fake capabilities shared by the unit tests

use core::net::Ipv4Addr;

use crate::traits::{
    ClimateSample, ClimateSensor, ClockTime, DisplayError, DisplaySink, LuxSensor, MacAddress,
    NetworkInterface, RealTimeClock,
};

pub struct FakeClimate {
    pub present: bool,
    pub celsius: f32,
    pub humidity: Option<f32>,
    pub reads: usize,
}

impl FakeClimate {
    pub fn combined(celsius: f32, humidity: f32) -> Self {
        Self {
            present: true,
            celsius,
            humidity: Some(humidity),
            reads: 0,
        }
    }

    pub fn temperature_only(celsius: f32) -> Self {
        Self {
            present: true,
            celsius,
            humidity: None,
            reads: 0,
        }
    }

    pub fn missing() -> Self {
        Self {
            present: false,
            celsius: 99.0,
            humidity: Some(99.0),
            reads: 0,
        }
    }
}

impl ClimateSensor for FakeClimate {
    fn is_present(&mut self) -> bool {
        self.present
    }

    fn measures_humidity(&self) -> bool {
        self.humidity.is_some()
    }

    fn read(&mut self) -> ClimateSample {
        assert!(self.present, "read from a climate sensor that is not fitted");
        self.reads += 1;
        match self.humidity {
            Some(h) => ClimateSample::with_humidity(self.celsius, h),
            None => ClimateSample::from_celsius(self.celsius),
        }
    }
}

pub struct FakeLux {
    pub present: bool,
    pub ready: bool,
    pub lux: f32,
    pub reads: usize,
    pub starts: usize,
}

impl FakeLux {
    pub fn ready(lux: f32) -> Self {
        Self {
            present: true,
            ready: true,
            lux,
            reads: 0,
            starts: 0,
        }
    }

    pub fn converting(lux: f32) -> Self {
        Self {
            ready: false,
            ..Self::ready(lux)
        }
    }

    pub fn missing() -> Self {
        Self {
            present: false,
            ..Self::ready(99.0)
        }
    }
}

impl LuxSensor for FakeLux {
    fn is_present(&mut self) -> bool {
        self.present
    }

    fn has_value(&mut self) -> bool {
        self.ready
    }

    fn read_lux(&mut self) -> f32 {
        assert!(self.present, "read from a lux sensor that is not fitted");
        self.reads += 1;
        self.lux
    }

    fn start(&mut self) {
        self.starts += 1;
    }
}

pub struct FakeClock {
    pub present: bool,
    pub time: ClockTime,
    pub reads: usize,
}

impl FakeClock {
    pub fn at(hour: u8, minute: u8) -> Self {
        Self {
            present: true,
            time: ClockTime { hour, minute },
            reads: 0,
        }
    }

    pub fn missing() -> Self {
        Self {
            present: false,
            ..Self::at(0, 0)
        }
    }
}

impl RealTimeClock for FakeClock {
    fn is_present(&mut self) -> bool {
        self.present
    }

    fn now(&mut self) -> ClockTime {
        assert!(self.present, "read from a clock that is not fitted");
        self.reads += 1;
        self.time
    }
}

pub struct FakeNetwork {
    pub link: bool,
    pub ip: Ipv4Addr,
    pub mac: MacAddress,
    pub queries: usize,
}

impl FakeNetwork {
    pub fn up() -> Self {
        Self {
            link: true,
            ip: Ipv4Addr::new(192, 168, 1, 42),
            mac: [0x0A, 0x1B, 0x2C, 0x3D, 0x4E, 0x5F],
            queries: 0,
        }
    }

    pub fn down() -> Self {
        Self {
            link: false,
            ..Self::up()
        }
    }
}

impl NetworkInterface for FakeNetwork {
    fn link_up(&mut self) -> bool {
        self.queries += 1;
        self.link
    }

    fn local_address(&mut self) -> Ipv4Addr {
        assert!(self.link, "address requested while the link is down");
        self.queries += 1;
        self.ip
    }

    fn hardware_address(&mut self) -> MacAddress {
        self.queries += 1;
        self.mac
    }
}

/// One printed run of text
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub y: u8,
    pub size: u8,
    pub text: String,
}

/// Display sink that keeps every flushed frame
#[derive(Default)]
pub struct RecordingDisplay {
    pending: Vec<Span>,
    cursor_y: u8,
    size: u8,
    pub frames: Vec<Vec<Span>>,
    pub clears: usize,
    pub fail_flush: bool,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            size: 1,
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> &[Span] {
        self.frames.last().map(|f| f.as_slice()).unwrap_or(&[])
    }

    /// Concatenated text printed on row `y` of the last frame
    pub fn line(&self, y: u8) -> String {
        self.last_frame()
            .iter()
            .filter(|s| s.y == y)
            .map(|s| s.text.as_str())
            .collect()
    }

    pub fn last_frame_is_blank(&self) -> bool {
        self.last_frame().iter().all(|s| s.text.is_empty())
    }
}

impl DisplaySink for RecordingDisplay {
    fn clear(&mut self) {
        self.clears += 1;
        self.pending.clear();
    }

    fn set_cursor(&mut self, _x: u8, y: u8) {
        self.cursor_y = y;
    }

    fn set_text_size(&mut self, size: u8) {
        self.size = size;
    }

    fn print(&mut self, text: &str) {
        self.pending.push(Span {
            y: self.cursor_y,
            size: self.size,
            text: text.into(),
        });
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if self.fail_flush {
            return Err(DisplayError::Communication);
        }
        self.frames.push(self.pending.clone());
        Ok(())
    }
}
