//! Status panel
//!
//! Owns the injected display, network interface and sensors, and runs one
//! poll followed by one render per tick. The caller drives the tick from
//! its main loop with a monotonic millisecond counter.

use crate::config::PanelConfig;
use crate::poller::{PollReport, Poller, Readings};
use crate::render::{RenderState, Renderer};
use crate::traits::{ClimateSensor, DisplayError, DisplaySink, LuxSensor, NetworkInterface, RealTimeClock};

/// Result of one panel tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// What the poller did
    pub poll: PollReport,
    /// What the renderer did
    pub render: RenderState,
}

/// Tower light status panel
pub struct StatusPanel<D, N, C, L, K> {
    display: D,
    network: N,
    poller: Poller<C, L, K>,
    renderer: Renderer,
}

impl<D, N, C, L, K> StatusPanel<D, N, C, L, K>
where
    D: DisplaySink,
    N: NetworkInterface,
    C: ClimateSensor,
    L: LuxSensor,
    K: RealTimeClock,
{
    /// Create the panel, probing every sensor once
    pub fn new(display: D, network: N, climate: C, lux: L, clock: K) -> Self {
        Self {
            display,
            network,
            poller: Poller::new(climate, lux, clock),
            renderer: Renderer::new(),
        }
    }

    /// Poll the sensors, then redraw the display
    ///
    /// # Errors
    /// Returns the display's flush error. Readings sampled during this tick
    /// are kept either way.
    pub fn tick(&mut self, now_ms: u32, config: &PanelConfig) -> Result<TickReport, DisplayError> {
        let poll = self.poller.poll(now_ms, &config.intervals);
        let render = self.renderer.render(
            &mut self.display,
            &mut self.network,
            self.poller.readings(),
            config,
        )?;
        Ok(TickReport { poll, render })
    }

    /// Cached sensor readings
    pub fn readings(&self) -> &Readings {
        self.poller.readings()
    }

    /// State of the last successful render, `None` before the first tick
    pub fn last_render(&self) -> Option<RenderState> {
        self.renderer.last_state()
    }

    /// Borrow the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Borrow the display mutably
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Take the panel apart again
    pub fn into_parts(self) -> (D, N, C, L, K) {
        let (climate, lux, clock) = self.poller.into_sensors();
        (self.display, self.network, climate, lux, clock)
    }
}
