//! Text frame buffer
//!
//! Collects prints from the status panel into per-row lines and replays
//! them onto a [`DisplayBackend`] on flush.

use heapless::{String, Vec};
use towerlight_core::traits::{DisplayError, DisplaySink};

use crate::backend::{DisplayBackend, CHAR_HEIGHT};

/// Maximum number of text runs per frame
pub const FRAME_LINES: usize = 4;

/// Maximum characters buffered per row (small font across a 128px panel)
pub const FRAME_LINE_LEN: usize = 21;

/// One buffered run of text
///
/// A run starts at a cursor position; further prints without moving the
/// cursor append to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    /// Top edge in pixels
    pub y: u8,
    /// Left edge in pixels
    pub x: u8,
    /// Font scale the row was printed with
    pub size: u8,
    /// Row text
    pub text: String<FRAME_LINE_LEN>,
}

/// Buffered text display over a backend
///
/// Text beyond a run's capacity is dropped, as is a run past
/// [`FRAME_LINES`]; neither is an error.
pub struct TextFrame<B> {
    backend: B,
    lines: Vec<FrameLine, FRAME_LINES>,
    cursor: (u8, u8),
    size: u8,
}

impl<B: DisplayBackend> TextFrame<B> {
    /// Create an empty frame over `backend`
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            lines: Vec::new(),
            cursor: (0, 0),
            size: 1,
        }
    }

    /// Buffered runs, in first-print order
    pub fn lines(&self) -> &[FrameLine] {
        &self.lines
    }

    /// Text of the first run on pixel row `y`, if any
    pub fn line_at(&self, y: u8) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.y == y)
            .map(|l| l.text.as_str())
    }

    /// Borrow the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Borrow the backend mutably
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Get the backend back
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn line_mut(&mut self) -> Option<&mut FrameLine> {
        let (x, y) = self.cursor;
        let idx = match self.lines.iter().position(|l| l.x == x && l.y == y) {
            Some(idx) => idx,
            None => {
                let line = FrameLine {
                    y,
                    x,
                    size: self.size,
                    text: String::new(),
                };
                if self.lines.push(line).is_err() {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("frame full, dropping row {}", y);
                    return None;
                }
                self.lines.len() - 1
            }
        };
        self.lines.get_mut(idx)
    }
}

impl<B: DisplayBackend> DisplaySink for TextFrame<B> {
    fn clear(&mut self) {
        self.lines.clear();
        self.cursor = (0, 0);
    }

    fn set_cursor(&mut self, x: u8, y: u8) {
        self.cursor = (x, y);
    }

    fn set_text_size(&mut self, size: u8) {
        self.size = size.max(1);
    }

    fn print(&mut self, text: &str) {
        let size = self.size;
        if let Some(line) = self.line_mut() {
            line.size = size;
            for ch in text.chars() {
                if line.text.push(ch).is_err() {
                    break;
                }
            }
        }
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.backend.is_ready() {
            return Err(DisplayError::NotReady);
        }

        let (_, height) = self.backend.dimensions();
        self.backend.clear()?;
        for line in self.lines.iter().filter(|l| !l.text.is_empty()) {
            let bottom = line.y as u16 + CHAR_HEIGHT as u16 * line.size as u16;
            if bottom > height as u16 {
                continue;
            }
            let text = fit(&line.text, self.backend.columns_at(line.size));
            self.backend.draw_text(line.y, line.x, line.size, text)?;
        }
        self.backend.flush()
    }
}

/// Cut `text` to at most `columns` characters
fn fit(text: &str, columns: usize) -> &str {
    match text.char_indices().nth(columns) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(feature = "defmt")]
impl<B> defmt::Format for TextFrame<B> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TextFrame[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}@{}: {}", line.size, line.y, line.text.as_str());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::net::Ipv4Addr;
    use proptest::prelude::*;
    use towerlight_core::config::{PanelConfig, ScreenMode};
    use towerlight_core::traits::{Absent, ClockTime, DisplayExt, MacAddress, NetworkInterface, RealTimeClock};
    use towerlight_core::StatusPanel;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Text(u8, u8, u8, std::string::String),
        Flush,
    }

    struct RecordingBackend {
        ops: std::vec::Vec<Op>,
        width: u8,
        height: u8,
        ready: bool,
    }

    impl RecordingBackend {
        /// 128x32 panel
        fn new() -> Self {
            Self {
                ops: std::vec::Vec::new(),
                width: 128,
                height: 32,
                ready: true,
            }
        }

        fn texts(&self) -> std::vec::Vec<(u8, u8, &str)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(row, _, size, text) => Some((*row, *size, text.as_str())),
                    _ => None,
                })
                .collect()
        }
    }

    impl DisplayBackend for RecordingBackend {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.ops.push(Op::Clear);
            Ok(())
        }

        fn draw_text(&mut self, row: u8, col: u8, size: u8, text: &str) -> Result<(), DisplayError> {
            self.ops.push(Op::Text(row, col, size, text.into()));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.ops.push(Op::Flush);
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            (self.width, self.height)
        }

        fn is_ready(&self) -> bool {
            self.ready
        }
    }

    #[test]
    fn test_flush_replays_lines() {
        let mut frame = TextFrame::new(RecordingBackend::new());
        frame.set_text_size(2);
        frame.print_at(0, 0, "12:30h");
        frame.print_at(0, 16, "21.5");
        frame.print(" C");
        frame.flush().unwrap();

        let backend = frame.backend();
        assert_eq!(backend.ops.first(), Some(&Op::Clear));
        assert_eq!(backend.ops.last(), Some(&Op::Flush));
        assert_eq!(backend.texts(), [(0, 2, "12:30h"), (16, 2, "21.5 C")]);
    }

    #[test]
    fn test_empty_frame_only_clears() {
        let mut frame = TextFrame::new(RecordingBackend::new());
        frame.print_at(0, 0, "stale");
        frame.blank().unwrap();

        assert_eq!(frame.backend().ops, [Op::Clear, Op::Flush]);
        assert!(frame.lines().is_empty());
    }

    #[test]
    fn test_long_text_truncated() {
        let mut frame = TextFrame::new(RecordingBackend::new());
        frame.set_text_size(2);
        frame.print_at(0, 0, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(frame.line_at(0), Some("ABCDEFGHIJKLMNOPQRSTU"));

        frame.flush().unwrap();
        // 128px / 12px cells
        assert_eq!(frame.backend().texts(), [(0, 2, "ABCDEFGHIJ")]);
    }

    #[test]
    fn test_print_at_new_column_starts_new_run() {
        let mut frame = TextFrame::new(RecordingBackend::new());
        frame.print_at(0, 0, "IP");
        frame.print(":");
        frame.print_at(60, 0, "up");
        frame.flush().unwrap();

        let runs: std::vec::Vec<_> = frame
            .backend()
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(row, col, _, text) => Some((*row, *col, text.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(runs, [(0, 0, "IP:"), (0, 60, "up")]);
        assert_eq!(frame.line_at(0), Some("IP:"));
    }

    #[test]
    fn test_extra_rows_dropped() {
        let mut frame = TextFrame::new(RecordingBackend::new());
        for y in 0..(FRAME_LINES as u8 + 2) {
            frame.print_at(0, y, "x");
        }
        assert_eq!(frame.lines().len(), FRAME_LINES);
    }

    #[test]
    fn test_row_past_bottom_edge_skipped() {
        let mut frame = TextFrame::new(RecordingBackend::new());
        frame.set_text_size(2);
        frame.print_at(0, 16, "fits");
        frame.print_at(0, 24, "falls off");
        frame.flush().unwrap();
        assert_eq!(frame.backend().texts(), [(16, 2, "fits")]);
    }

    #[test]
    fn test_not_ready_backend() {
        let mut backend = RecordingBackend::new();
        backend.ready = false;
        let mut frame = TextFrame::new(backend);
        frame.print_at(0, 0, "hello");

        assert_eq!(frame.flush(), Err(DisplayError::NotReady));
        assert!(frame.backend().ops.is_empty());
    }

    struct Clock;

    impl RealTimeClock for Clock {
        fn is_present(&mut self) -> bool {
            true
        }

        fn now(&mut self) -> ClockTime {
            ClockTime { hour: 7, minute: 5 }
        }
    }

    struct Link;

    impl NetworkInterface for Link {
        fn link_up(&mut self) -> bool {
            true
        }

        fn local_address(&mut self) -> Ipv4Addr {
            Ipv4Addr::new(10, 1, 2, 3)
        }

        fn hardware_address(&mut self) -> MacAddress {
            [0x0A, 0x1B, 0x2C, 0x3D, 0x4E, 0x5F]
        }
    }

    #[test]
    fn test_status_panel_end_to_end() {
        let frame = TextFrame::new(RecordingBackend::new());
        let mut panel = StatusPanel::new(frame, Link, Absent, Absent, Clock);
        let mut config = PanelConfig::default();

        panel.tick(10, &config).unwrap();
        assert_eq!(panel.display().backend().texts(), [(0, 2, "07:05h")]);

        assert!(config.select_mode(ScreenMode::NetworkInfo));
        panel.display_mut().backend_mut().ops.clear();
        panel.tick(20, &config).unwrap();
        assert_eq!(
            panel.display().backend().texts(),
            [(0, 1, "10.1.2.3"), (16, 1, "0A:1B:2C:3D:4E:5F")]
        );
    }

    proptest! {
        #[test]
        fn prop_print_never_overflows(
            prints in proptest::collection::vec(("\\PC{0,40}", 0u8..64, 1u8..4), 0..12),
        ) {
            let mut frame = TextFrame::new(RecordingBackend::new());
            for (text, y, size) in &prints {
                frame.set_text_size(*size);
                frame.print_at(0, *y, text);
            }
            prop_assert!(frame.lines().len() <= FRAME_LINES);
            for line in frame.lines() {
                prop_assert!(line.text.len() <= FRAME_LINE_LEN);
            }
            prop_assert!(frame.flush().is_ok());
        }
    }
}
