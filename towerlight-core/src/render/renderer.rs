//! Screen mode dispatcher
//!
//! Redraws the whole two-line frame every tick from the reading cache.

use super::format::{
    format_humidity, format_ip, format_lux, format_mac, format_temperature, format_time,
};
use super::table::{line_pair, LineProducer};
use crate::config::PanelConfig;
use crate::poller::Readings;
use crate::traits::{DisplayError, DisplayExt, DisplaySink, NetworkInterface};

/// Cursor row of the top line (pixels)
pub const LINE_ONE_Y: u8 = 0;

/// Cursor row of the bottom line (pixels)
pub const LINE_TWO_Y: u8 = 16;

/// Font scale for sensor and custom lines
pub const LARGE_TEXT: u8 = 2;

/// Font scale for address lines
pub const SMALL_TEXT: u8 = 1;

/// Outcome of one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderState {
    /// Sleep applied; an empty frame was flushed
    Blanked,
    /// The current screen mode was drawn
    Active,
}

/// Draws the configured screen mode
#[derive(Debug, Default)]
pub struct Renderer {
    last: Option<RenderState>,
    unmapped: Option<u8>,
}

impl Renderer {
    /// Create a renderer that has not drawn yet
    pub const fn new() -> Self {
        Self {
            last: None,
            unmapped: None,
        }
    }

    /// State of the last successful render
    pub fn last_state(&self) -> Option<RenderState> {
        self.last
    }

    /// Raw slot last drawn with no screen mode on this board, if it is
    /// still selected
    pub fn unmapped_slot(&self) -> Option<u8> {
        self.unmapped
    }

    /// Render one frame
    ///
    /// When the sleep flag is set and the current slot is sleep-eligible the
    /// frame is cleared and flushed with nothing else touched. Otherwise the
    /// slot is resolved through the board's mode table and both lines are
    /// drawn; an unmapped slot flushes an empty frame.
    pub fn render<D, N>(
        &mut self,
        display: &mut D,
        network: &mut N,
        readings: &Readings,
        config: &PanelConfig,
    ) -> Result<RenderState, DisplayError>
    where
        D: DisplaySink,
        N: NetworkInterface,
    {
        let state = if config.is_blanked() {
            display.blank()?;
            RenderState::Blanked
        } else {
            display.clear();
            display.set_text_size(LARGE_TEXT);

            match config.resolved_mode() {
                Some(mode) => {
                    self.unmapped = None;
                    let pair = line_pair(mode);
                    draw_line(display, network, readings, config, pair.top, LINE_ONE_Y);
                    draw_line(display, network, readings, config, pair.bottom, LINE_TWO_Y);
                }
                None => {
                    if self.unmapped != Some(config.screen_mode) {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("screen mode {} not mapped on {}", config.screen_mode, config.variant);
                        self.unmapped = Some(config.screen_mode);
                    }
                }
            }

            display.flush()?;
            RenderState::Active
        };

        if self.last != Some(state) {
            #[cfg(feature = "defmt")]
            defmt::debug!("display {}", state);
            self.last = Some(state);
        }

        Ok(state)
    }
}

/// Run one line producer at cursor row `y`
///
/// Producers whose source is absent leave the line empty.
fn draw_line<D, N>(
    display: &mut D,
    network: &mut N,
    readings: &Readings,
    config: &PanelConfig,
    producer: LineProducer,
    y: u8,
) where
    D: DisplaySink,
    N: NetworkInterface,
{
    match producer {
        LineProducer::None => {}
        LineProducer::Time => {
            if let Some(time) = readings.clock().value() {
                display.print_at(0, y, &format_time(time, config.clock_format));
            }
        }
        LineProducer::Temperature => {
            if let Some(temp) = readings.temperature().value() {
                let unit = config.temperature_unit;
                display.print_at(0, y, &format_temperature(temp.in_unit(unit), unit));
            }
        }
        LineProducer::Humidity => {
            if let Some(humidity) = readings.humidity().value() {
                display.print_at(0, y, &format_humidity(humidity));
            }
        }
        LineProducer::Lux => {
            if let Some(lux) = readings.lux().value() {
                display.print_at(0, y, &format_lux(lux));
            }
        }
        LineProducer::LocalAddress => {
            if network.link_up() {
                display.set_text_size(SMALL_TEXT);
                display.print_at(0, y, &format_ip(network.local_address()));
            }
        }
        LineProducer::HardwareAddress => {
            display.set_text_size(SMALL_TEXT);
            display.print_at(0, y, &format_mac(&network.hardware_address()));
        }
        LineProducer::CustomLineOne => display.print_at(0, y, &config.custom.line_one),
        LineProducer::CustomLineTwo => display.print_at(0, y, &config.custom.line_two),
    }
}
