//! Raw window-event tracking.
//!
//! Turns winit touch and mouse events into the gesture deltas the session
//! consumes. Touch platforms get the real thing: one active touch drives
//! one-finger pan, two drive the two-finger pan (centroid movement) plus
//! the pinch (span ratio). On desktop, left-drag stands in for one-finger
//! pan, right-drag for two-finger pan, and the scroll wheel for pinch.

use std::collections::HashMap;

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};

use crate::gesture::PinchPhase;

/// A gesture delta extracted from raw input, ready for the session
/// handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureDelta {
    /// One-finger drag delta.
    Pan(Vec2),
    /// Two-finger drag delta (centroid movement).
    Orbit(Vec2),
    /// Pinch update with the scale factor since the previous update.
    Pinch(PinchPhase, f32),
}

/// Tracks live touch points and mouse drag state across events.
pub struct InputTracker {
    touches: HashMap<u64, Vec2>,
    cursor: Option<Vec2>,
    drag: Option<MouseButton>,
    pinch_span: Option<f32>,
    scroll_pinch_step: f32,
}

impl InputTracker {
    pub fn new(scroll_pinch_step: f32) -> Self {
        Self {
            touches: HashMap::new(),
            cursor: None,
            drag: None,
            pinch_span: None,
            scroll_pinch_step,
        }
    }

    /// Feed one window event; any recognized gesture deltas are appended
    /// to `out`.
    pub fn handle(&mut self, event: &WindowEvent, out: &mut Vec<GestureDelta>) {
        match event {
            WindowEvent::Touch(touch) => {
                let location = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                self.touch(touch.id, touch.phase, location, out);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = Vec2::new(position.x as f32, position.y as f32);
                self.cursor_moved(position, out);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_input(*state, *button);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 * 0.1,
                };
                self.mouse_wheel(lines, out);
            }
            _ => {}
        }
    }

    fn touch(&mut self, id: u64, phase: TouchPhase, location: Vec2, out: &mut Vec<GestureDelta>) {
        match phase {
            TouchPhase::Started => {
                self.touches.insert(id, location);
                if self.touches.len() == 2 {
                    self.pinch_span = Some(self.span());
                    out.push(GestureDelta::Pinch(PinchPhase::Began, 1.0));
                }
            }
            TouchPhase::Moved => {
                let Some(previous) = self.touches.insert(id, location) else {
                    return;
                };
                let delta = location - previous;
                match self.touches.len() {
                    1 => out.push(GestureDelta::Pan(delta)),
                    2 => {
                        // One touch moves per event, so the centroid moves
                        // by half its delta.
                        out.push(GestureDelta::Orbit(delta * 0.5));
                        let span = self.span();
                        if let Some(previous_span) = self.pinch_span.replace(span) {
                            if previous_span > f32::EPSILON {
                                out.push(GestureDelta::Pinch(
                                    PinchPhase::Changed,
                                    span / previous_span,
                                ));
                            }
                        }
                    }
                    _ => {}
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.remove(&id);
                if self.touches.len() < 2 && self.pinch_span.take().is_some() {
                    let end = if phase == TouchPhase::Cancelled {
                        PinchPhase::Cancelled
                    } else {
                        PinchPhase::Ended
                    };
                    out.push(GestureDelta::Pinch(end, 1.0));
                }
            }
        }
    }

    fn cursor_moved(&mut self, position: Vec2, out: &mut Vec<GestureDelta>) {
        if let Some(previous) = self.cursor {
            let delta = position - previous;
            if self.touches.is_empty() {
                match self.drag {
                    Some(MouseButton::Left) => out.push(GestureDelta::Pan(delta)),
                    Some(MouseButton::Right) => out.push(GestureDelta::Orbit(delta)),
                    _ => {}
                }
            }
        }
        self.cursor = Some(position);
    }

    fn mouse_input(&mut self, state: ElementState, button: MouseButton) {
        match state {
            ElementState::Pressed => {
                if self.drag.is_none() {
                    self.drag = Some(button);
                }
            }
            ElementState::Released => {
                if self.drag == Some(button) {
                    self.drag = None;
                }
            }
        }
    }

    fn mouse_wheel(&mut self, lines: f32, out: &mut Vec<GestureDelta>) {
        if lines != 0.0 {
            let factor = (1.0 + lines * self.scroll_pinch_step).max(0.1);
            out.push(GestureDelta::Pinch(PinchPhase::Changed, factor));
        }
    }

    /// Distance between the two live touch points.
    fn span(&self) -> f32 {
        let mut points = self.touches.values();
        match (points.next(), points.next()) {
            (Some(a), Some(b)) => (*a - *b).length(),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> InputTracker {
        InputTracker::new(0.05)
    }

    #[test]
    fn test_single_touch_drag_pans() {
        let mut input = tracker();
        let mut out = Vec::new();
        input.touch(1, TouchPhase::Started, Vec2::new(10.0, 10.0), &mut out);
        input.touch(1, TouchPhase::Moved, Vec2::new(15.0, 7.0), &mut out);
        assert_eq!(out, vec![GestureDelta::Pan(Vec2::new(5.0, -3.0))]);
    }

    #[test]
    fn test_second_touch_begins_pinch() {
        let mut input = tracker();
        let mut out = Vec::new();
        input.touch(1, TouchPhase::Started, Vec2::new(0.0, 0.0), &mut out);
        input.touch(2, TouchPhase::Started, Vec2::new(100.0, 0.0), &mut out);
        assert_eq!(out, vec![GestureDelta::Pinch(PinchPhase::Began, 1.0)]);
    }

    #[test]
    fn test_two_finger_move_orbits_and_pinches() {
        let mut input = tracker();
        let mut out = Vec::new();
        input.touch(1, TouchPhase::Started, Vec2::new(0.0, 0.0), &mut out);
        input.touch(2, TouchPhase::Started, Vec2::new(100.0, 0.0), &mut out);
        out.clear();

        input.touch(2, TouchPhase::Moved, Vec2::new(150.0, 0.0), &mut out);

        assert_eq!(
            out,
            vec![
                GestureDelta::Orbit(Vec2::new(25.0, 0.0)),
                GestureDelta::Pinch(PinchPhase::Changed, 1.5),
            ]
        );
    }

    #[test]
    fn test_three_touches_produce_nothing() {
        let mut input = tracker();
        let mut out = Vec::new();
        input.touch(1, TouchPhase::Started, Vec2::new(0.0, 0.0), &mut out);
        input.touch(2, TouchPhase::Started, Vec2::new(100.0, 0.0), &mut out);
        input.touch(3, TouchPhase::Started, Vec2::new(50.0, 50.0), &mut out);
        out.clear();

        input.touch(3, TouchPhase::Moved, Vec2::new(60.0, 60.0), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_lifting_a_finger_ends_the_pinch() {
        let mut input = tracker();
        let mut out = Vec::new();
        input.touch(1, TouchPhase::Started, Vec2::new(0.0, 0.0), &mut out);
        input.touch(2, TouchPhase::Started, Vec2::new(100.0, 0.0), &mut out);
        out.clear();

        input.touch(2, TouchPhase::Ended, Vec2::new(100.0, 0.0), &mut out);
        assert_eq!(out, vec![GestureDelta::Pinch(PinchPhase::Ended, 1.0)]);

        // The remaining finger pans again.
        out.clear();
        input.touch(1, TouchPhase::Moved, Vec2::new(4.0, 0.0), &mut out);
        assert_eq!(out, vec![GestureDelta::Pan(Vec2::new(4.0, 0.0))]);
    }

    #[test]
    fn test_left_drag_pans_right_drag_orbits() {
        let mut input = tracker();
        let mut out = Vec::new();
        input.cursor_moved(Vec2::new(10.0, 10.0), &mut out);

        input.mouse_input(ElementState::Pressed, MouseButton::Left);
        input.cursor_moved(Vec2::new(12.0, 13.0), &mut out);
        input.mouse_input(ElementState::Released, MouseButton::Left);

        input.mouse_input(ElementState::Pressed, MouseButton::Right);
        input.cursor_moved(Vec2::new(20.0, 13.0), &mut out);
        input.mouse_input(ElementState::Released, MouseButton::Right);

        assert_eq!(
            out,
            vec![
                GestureDelta::Pan(Vec2::new(2.0, 3.0)),
                GestureDelta::Orbit(Vec2::new(8.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_cursor_motion_without_drag_is_ignored() {
        let mut input = tracker();
        let mut out = Vec::new();
        input.cursor_moved(Vec2::new(10.0, 10.0), &mut out);
        input.cursor_moved(Vec2::new(50.0, 50.0), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_scroll_wheel_emulates_pinch() {
        let mut input = tracker();
        let mut out = Vec::new();
        input.mouse_wheel(1.0, &mut out);
        input.mouse_wheel(-1.0, &mut out);
        assert_eq!(
            out,
            vec![
                GestureDelta::Pinch(PinchPhase::Changed, 1.05),
                GestureDelta::Pinch(PinchPhase::Changed, 0.95),
            ]
        );
    }
}
