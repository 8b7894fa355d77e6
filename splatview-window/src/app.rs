//! Desktop shell: owns the window, feeds raw input into the gesture
//! pipeline, and drives session transitions from the event loop.
//!
//! Visibility mapping: `resumed` is the appear transition, window close,
//! Escape, and `suspended` are disappear transitions. Redraws are paced to
//! the session's preferred frame rate with `ControlFlow::WaitUntil`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use splatview_bridge::SplatRenderer;
use tracing::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::error::ViewerError;
use crate::input::{GestureDelta, InputTracker};
use crate::options::ViewerOptions;
use crate::orientation::FixedOrientation;
use crate::session::SessionController;
use crate::surface::WindowSurface;

/// Run the viewer for a scene file against the given renderer binding.
pub fn run_with_renderer<R: SplatRenderer + 'static>(
    scene: PathBuf,
    renderer: R,
    options: ViewerOptions,
) -> Result<(), ViewerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(scene, renderer, options);
    event_loop.run_app(&mut app)?;
    app.finish()
}

struct App<R: SplatRenderer> {
    options: ViewerOptions,
    session: SessionController<R, FixedOrientation>,
    input: InputTracker,
    window: Option<Arc<Window>>,
    surface: Option<WindowSurface>,
    next_frame: Instant,
    error: Option<ViewerError>,
}

impl<R: SplatRenderer> App<R> {
    fn new(scene: PathBuf, renderer: R, options: ViewerOptions) -> Self {
        let session = SessionController::new(
            scene,
            renderer,
            FixedOrientation::default(),
            options.frame_rate,
        );
        let input = InputTracker::new(options.scroll_pinch_step);
        Self {
            options,
            session,
            input,
            window: None,
            surface: None,
            next_frame: Instant::now(),
            error: None,
        }
    }

    fn finish(self) -> Result<(), ViewerError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn end_session(&mut self, event_loop: &ActiveEventLoop) {
        self.session.view_disappeared();
        event_loop.exit();
    }
}

impl<R: SplatRenderer> ApplicationHandler for App<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attributes = Window::default_attributes()
                .with_title(self.options.title.clone())
                .with_inner_size(PhysicalSize::new(1280, 720));
            match event_loop.create_window(attributes) {
                Ok(window) => {
                    let window = Arc::new(window);
                    self.surface = Some(WindowSurface::new(window.clone()));
                    self.window = Some(window);
                }
                Err(err) => {
                    error!("failed to create window: {err}");
                    self.error = Some(err.into());
                    event_loop.exit();
                    return;
                }
            }
        }

        if self.session.is_live() {
            return;
        }
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        if let Err(err) = self.session.view_appeared(surface) {
            error!("session did not start: {err}");
            self.error = Some(err);
            event_loop.exit();
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        info!("view hidden, ending session");
        self.session.view_disappeared();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Covers abnormal dismissal paths; a no-op if the session already
        // ended through close or suspend.
        self.session.view_disappeared();
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_live() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.end_session(event_loop);
                return;
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.end_session(event_loop);
                return;
            }
            WindowEvent::RedrawRequested => {
                if self.session.frame() {
                    self.next_frame =
                        Instant::now() + self.session.display_link().rate().frame_interval();
                }
                return;
            }
            WindowEvent::Resized(size) => {
                // Surface dimensions are captured once per session; a
                // mid-session resize is not forwarded to the renderer.
                debug!("window resized to {}x{} mid-session", size.width, size.height);
                return;
            }
            _ => {}
        }

        let mut deltas = Vec::new();
        self.input.handle(&event, &mut deltas);
        for delta in deltas {
            match delta {
                GestureDelta::Pan(delta) => self.session.pan_changed(delta),
                GestureDelta::Orbit(delta) => self.session.orbit_changed(delta),
                GestureDelta::Pinch(phase, factor) => self.session.pinch_changed(phase, factor),
            }
        }
    }
}
