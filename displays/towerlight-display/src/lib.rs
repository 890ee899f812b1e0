//! Text frame display for the tower light status panel
//!
//! This crate provides:
//! - `DisplayBackend` trait for the physical panel (SSD1306 and friends)
//! - `TextFrame`, a line buffer implementing the core's `DisplaySink`
//!
//! # Architecture
//!
//! The status panel core draws through `DisplaySink` using pixel cursor
//! rows and a font scale, the way Adafruit-style OLED libraries work.
//! `TextFrame` collects those prints into per-row lines and, on flush,
//! replays them onto a `DisplayBackend` in one pass. Backends only need to
//! know how to draw a run of text at a pixel row and column.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod frame;

// Re-export key types
pub use backend::{DisplayBackend, CHAR_HEIGHT, CHAR_WIDTH};
pub use frame::{FrameLine, TextFrame, FRAME_LINES, FRAME_LINE_LEN};
pub use towerlight_core::traits::DisplayError;
