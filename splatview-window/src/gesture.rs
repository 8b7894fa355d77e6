//! Gesture state and its translation into camera-control calls.
//!
//! Recognizers accumulate cumulative translation/scale the way platform
//! gesture recognizers do, and reset to neutral when consumed, so every
//! consumed event carries only the change since the previous one. The
//! translation into renderer calls lives in [`apply_gesture`].

use glam::Vec2;
use splatview_bridge::SplatRenderer;

/// Phase of a pinch gesture as reported by the platform recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinchPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// A recognized gesture carrying incremental deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Drag with `touches` active fingers; `delta` is the translation
    /// since the previous consumed event.
    Pan { touches: u32, delta: Vec2 },
    /// Pinch carrying the scale factor accumulated since the previous
    /// consumed event.
    Pinch { phase: PinchPhase, scale: f32 },
}

/// Scale applied to two-finger pan deltas before they reach the renderer.
const ORBIT_SCALE: f32 = 0.01;

/// Translate one gesture event into renderer camera calls.
///
/// Sign conventions follow the engine: one-finger pan passes raw deltas
/// through unchanged; two-finger pan inverts the horizontal axis and
/// scales both axes by 0.01; a pinch moves the camera along z only, with
/// zoom-in (scale > 1) mapping to negative z. Pan events with touch counts
/// outside {1, 2} and pinch phases other than `Changed` are no-ops.
pub fn apply_gesture<R: SplatRenderer>(renderer: &mut R, event: GestureEvent) {
    match event {
        GestureEvent::Pan { touches: 1, delta } => {
            renderer.pan_translation(delta.x, delta.y);
        }
        GestureEvent::Pan { touches: 2, delta } => {
            renderer.movement(-ORBIT_SCALE * delta.x, ORBIT_SCALE * delta.y, 0.0);
        }
        GestureEvent::Pan { .. } => {}
        GestureEvent::Pinch {
            phase: PinchPhase::Changed,
            scale,
        } => {
            let dz = if scale > 1.0 { -(scale - 1.0) } else { 1.0 - scale };
            renderer.movement(0.0, 0.0, dz);
        }
        GestureEvent::Pinch { .. } => {}
    }
}

/// Accumulates drag translation for a fixed touch count.
///
/// `take` consumes the accumulated translation and resets it to zero, so
/// consecutive takes report incremental deltas rather than drifting
/// cumulative ones.
#[derive(Debug)]
pub struct PanRecognizer {
    touches: u32,
    translation: Vec2,
}

impl PanRecognizer {
    pub fn new(touches: u32) -> Self {
        Self {
            touches,
            translation: Vec2::ZERO,
        }
    }

    pub fn touches(&self) -> u32 {
        self.touches
    }

    /// Translation accumulated since the last `take`.
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    pub fn accumulate(&mut self, delta: Vec2) {
        self.translation += delta;
    }

    /// Consume the accumulated translation as a pan event, resetting the
    /// accumulator to zero.
    pub fn take(&mut self) -> GestureEvent {
        let delta = self.translation;
        self.translation = Vec2::ZERO;
        GestureEvent::Pan {
            touches: self.touches,
            delta,
        }
    }
}

/// Accumulates a cumulative pinch scale factor.
///
/// `take` consumes the factor and resets it to 1.0 so scale deltas are
/// incremental per event, not compounded across the whole gesture.
#[derive(Debug)]
pub struct PinchRecognizer {
    scale: f32,
}

impl PinchRecognizer {
    pub fn new() -> Self {
        Self { scale: 1.0 }
    }

    /// Scale accumulated since the last `take`.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn multiply(&mut self, factor: f32) {
        self.scale *= factor;
    }

    /// Consume the accumulated scale as a pinch event in the given phase,
    /// resetting the factor to 1.0.
    pub fn take(&mut self, phase: PinchPhase) -> GestureEvent {
        let scale = self.scale;
        self.scale = 1.0;
        GestureEvent::Pinch { phase, scale }
    }
}

impl Default for PinchRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
