//! Frame-clocked draw dispatch, gated to the session's visible lifetime.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Requested display cadence in frames per second.
///
/// Defaults to a fixed 60 on all three bounds. The link itself never skips
/// or adapts; honoring the preferred rate is the platform loop's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameRateRange {
    pub minimum: f32,
    pub maximum: f32,
    pub preferred: f32,
}

impl Default for FrameRateRange {
    fn default() -> Self {
        Self::uniform(60.0)
    }
}

impl FrameRateRange {
    /// Range with all three bounds set to the same rate.
    pub fn uniform(fps: f32) -> Self {
        Self {
            minimum: fps,
            maximum: fps,
            preferred: fps,
        }
    }

    /// Interval between frames at the preferred rate.
    pub fn frame_interval(&self) -> Duration {
        if self.preferred > 0.0 {
            Duration::from_secs_f64(1.0 / f64::from(self.preferred))
        } else {
            Duration::ZERO
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkState {
    Uninstalled,
    Running,
}

/// Render-loop driver.
///
/// While installed, every tick dispatches exactly one draw; once
/// `uninstall` returns, no further tick can dispatch. Ticks are serialized
/// by the single main execution context, so draws never overlap.
#[derive(Debug)]
pub struct DisplayLink {
    state: LinkState,
    rate: FrameRateRange,
}

impl DisplayLink {
    pub fn new(rate: FrameRateRange) -> Self {
        Self {
            state: LinkState::Uninstalled,
            rate,
        }
    }

    pub fn rate(&self) -> FrameRateRange {
        self.rate
    }

    pub fn is_installed(&self) -> bool {
        self.state == LinkState::Running
    }

    pub fn install(&mut self) {
        self.state = LinkState::Running;
    }

    pub fn uninstall(&mut self) {
        self.state = LinkState::Uninstalled;
    }

    /// Dispatch one draw if the link is installed. Returns whether the
    /// draw ran; ticks arriving after `uninstall` are dropped.
    pub fn tick<F: FnOnce()>(&mut self, draw: F) -> bool {
        match self.state {
            LinkState::Running => {
                draw();
                true
            }
            LinkState::Uninstalled => false,
        }
    }
}
