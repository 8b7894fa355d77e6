//! Viewer options loaded from an optional JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::display_link::FrameRateRange;
use crate::error::ViewerError;

/// User-tunable viewer settings. Missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Requested display cadence for the render loop.
    pub frame_rate: FrameRateRange,
    /// Pinch scale step applied per scroll-wheel line in the desktop
    /// shell's pinch emulation.
    pub scroll_pinch_step: f32,
    /// Window title for the desktop shell.
    pub title: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            frame_rate: FrameRateRange::default(),
            scroll_pinch_step: 0.05,
            title: "splatview".to_owned(),
        }
    }
}

impl ViewerOptions {
    /// Load options from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
