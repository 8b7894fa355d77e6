//! Session lifecycle: binds renderer initialization and teardown to view
//! visibility and holds the orientation lock for the session's duration.

use std::path::PathBuf;

use glam::Vec2;
use splatview_bridge::{RendererConfig, SplatRenderer};
use tracing::{info, warn};

use crate::display_link::{DisplayLink, FrameRateRange};
use crate::error::ViewerError;
use crate::gesture::{PanRecognizer, PinchPhase, PinchRecognizer, apply_gesture};
use crate::orientation::{OrientationMask, OrientationService};
use crate::surface::SurfaceProvider;

/// Sole owner of the renderer's coarse lifecycle.
///
/// At most one session is live at a time, and appear/disappear transitions
/// alternate. On appear the controller locks the device orientation,
/// provisions the surface, initializes the renderer, and starts the draw
/// loop; on disappear it reverses those steps in strict order: the display
/// link is uninstalled before the renderer is torn down, and the
/// orientation lock is released only after teardown.
pub struct SessionController<R, O>
where
    R: SplatRenderer,
    O: OrientationService,
{
    scene: PathBuf,
    renderer: R,
    orientation: O,
    link: DisplayLink,
    pan: PanRecognizer,
    orbit: PanRecognizer,
    pinch: PinchRecognizer,
    live: bool,
}

impl<R, O> SessionController<R, O>
where
    R: SplatRenderer,
    O: OrientationService,
{
    pub fn new(scene: PathBuf, renderer: R, orientation: O, rate: FrameRateRange) -> Self {
        Self {
            scene,
            renderer,
            orientation,
            link: DisplayLink::new(rate),
            pan: PanRecognizer::new(1),
            orbit: PanRecognizer::new(2),
            pinch: PinchRecognizer::new(),
            live: false,
        }
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn display_link(&self) -> &DisplayLink {
        &self.link
    }

    /// Appear transition.
    ///
    /// An unreadable scene file aborts the transition before any renderer
    /// or orientation state is touched: no partial session is created and
    /// the failure is reported as a warning only, matching the silent
    /// no-start behavior of the reference app.
    pub fn view_appeared<S: SurfaceProvider>(&mut self, surface: &S) -> Result<(), ViewerError> {
        if let Err(source) = std::fs::metadata(&self.scene) {
            warn!(
                "scene file {:?} is not accessible; session not started",
                self.scene
            );
            return Err(ViewerError::SceneAccess {
                path: self.scene.clone(),
                source,
            });
        }

        let mask = OrientationMask::locking(self.orientation.device_orientation());
        self.orientation.apply_mask(mask);

        let target = match surface.provision() {
            Ok(target) => target,
            Err(err) => {
                // The lock was already taken; release it so a failed start
                // leaves no residue.
                self.orientation.apply_mask(OrientationMask::All);
                return Err(err);
            }
        };

        let config = RendererConfig {
            scene: self.scene.clone(),
            surface: target.handle,
            width: target.width,
            height: target.height,
        };
        info!(
            "starting session for {:?} at {}x{}, locked to {:?}",
            self.scene, target.width, target.height, mask
        );
        // Blocks until the renderer accepts draw calls.
        self.renderer.initialize(&config);
        self.link.install();
        self.live = true;
        Ok(())
    }

    /// Disappear transition. The display link is uninstalled first so no
    /// draw can race teardown, then the renderer is cleaned up exactly
    /// once, then the orientation lock is released.
    pub fn view_disappeared(&mut self) {
        if !self.live {
            return;
        }
        self.link.uninstall();
        self.renderer.cleanup();
        self.orientation.apply_mask(OrientationMask::All);
        self.live = false;
        info!("session ended for {:?}", self.scene);
    }

    /// One display tick. Issues at most one draw while the link is
    /// installed; ticks after uninstall dispatch nothing.
    pub fn frame(&mut self) -> bool {
        let renderer = &mut self.renderer;
        self.link.tick(|| renderer.draw())
    }

    /// Feed a one-finger drag delta. The accumulated translation is
    /// consumed immediately and reset, so each renderer call carries only
    /// the change since the previous one.
    pub fn pan_changed(&mut self, delta: Vec2) {
        if !self.live {
            return;
        }
        self.pan.accumulate(delta);
        let event = self.pan.take();
        apply_gesture(&mut self.renderer, event);
    }

    /// Feed a two-finger drag delta. Same consume-and-reset rule as
    /// [`pan_changed`](Self::pan_changed).
    pub fn orbit_changed(&mut self, delta: Vec2) {
        if !self.live {
            return;
        }
        self.orbit.accumulate(delta);
        let event = self.orbit.take();
        apply_gesture(&mut self.renderer, event);
    }

    /// Feed a pinch update. Only the changed phase issues a camera call,
    /// and only then is the cumulative scale reset to 1.0.
    pub fn pinch_changed(&mut self, phase: PinchPhase, factor: f32) {
        if !self.live {
            return;
        }
        self.pinch.multiply(factor);
        if phase == PinchPhase::Changed {
            let event = self.pinch.take(PinchPhase::Changed);
            apply_gesture(&mut self.renderer, event);
        }
    }
}
