//! Interactive viewer shell for an external Gaussian-splatting engine.
//!
//! The core of this crate is the translation from multi-touch gesture
//! deltas into normalized camera-control calls, plus the render-loop and
//! session lifecycle machinery that keeps the engine's draw loop strictly
//! bound to view visibility.

mod app;
mod display_link;
mod error;
mod gesture;
mod input;
mod options;
mod orientation;
mod session;
mod surface;

#[cfg(test)]
mod test_support;

pub use app::run_with_renderer;
pub use display_link::{DisplayLink, FrameRateRange};
pub use error::ViewerError;
pub use gesture::{GestureEvent, PanRecognizer, PinchPhase, PinchRecognizer, apply_gesture};
pub use options::ViewerOptions;
pub use orientation::{DeviceOrientation, FixedOrientation, OrientationMask, OrientationService};
pub use session::SessionController;
pub use surface::{SurfaceProvider, SurfaceTarget, WindowSurface};

use std::path::Path;

/// Run the viewer for a scene file with the default renderer binding:
/// the vkgs engine when the `vkgs` feature is enabled, a null renderer
/// otherwise.
pub fn run(scene: &Path, options: ViewerOptions) -> Result<(), ViewerError> {
    #[cfg(feature = "vkgs")]
    {
        run_with_renderer(
            scene.to_path_buf(),
            splatview_bridge::VkgsRenderer::default(),
            options,
        )
    }
    #[cfg(not(feature = "vkgs"))]
    {
        run_with_renderer(
            scene.to_path_buf(),
            splatview_bridge::NullRenderer::default(),
            options,
        )
    }
}
