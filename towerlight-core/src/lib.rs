//! Board-agnostic core logic for the tower light status panel
//!
//! This crate contains everything between the sensor drivers and the
//! display driver, with no dependency on concrete hardware:
//!
//! - Capability traits (display sink, climate/lux sensors, clock, network)
//! - Configuration types and a TOML-subset parser
//! - Per-source polling scheduler
//! - Screen mode dispatcher and line formatting
//! - Status panel tick (poll, then render)
//!
//! Both board variants (ethernet and wifi) run the same core; they differ
//! only in which sensors are fitted and in their screen mode table.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod panel;
pub mod poller;
pub mod render;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use panel::{StatusPanel, TickReport};
