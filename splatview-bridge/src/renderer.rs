use std::path::PathBuf;

use tracing::{info, trace};

use crate::surface::SurfaceHandle;

/// Configuration handed to the engine exactly once per session.
///
/// Immutable after `initialize`; the engine may keep its own copy. Width
/// and height are physical pixels, not logical points.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Path of the splat scene file to load.
    pub scene: PathBuf,
    /// Borrowed drawable the engine renders into.
    pub surface: SurfaceHandle,
    /// Surface width in pixels.
    pub width: i32,
    /// Surface height in pixels.
    pub height: i32,
}

/// The engine's call surface.
///
/// All calls are synchronous and, from the caller's perspective,
/// non-failing: the boundary exposes no error channel. `initialize` blocks
/// until the engine can accept draw calls; `cleanup` must be called exactly
/// once per matching `initialize`.
pub trait SplatRenderer {
    /// Bring the engine up against the given scene and surface. Blocks
    /// until draw calls are accepted.
    fn initialize(&mut self, config: &RendererConfig);

    /// Render one frame with the current camera state.
    fn draw(&mut self);

    /// Release all engine resources. Exactly once per session.
    fn cleanup(&mut self);

    /// Pan the camera by a raw translation delta.
    fn pan_translation(&mut self, dx: f32, dy: f32);

    /// Move the camera by a normalized displacement; `dz` carries zoom.
    fn movement(&mut self, dx: f32, dy: f32, dz: f32);
}

/// Stand-in binding that renders nothing.
///
/// Lets the viewer run end to end when the engine is not linked in, which
/// keeps the default build free of external native dependencies.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl SplatRenderer for NullRenderer {
    fn initialize(&mut self, config: &RendererConfig) {
        info!(
            "null renderer initialized for {:?} ({}x{})",
            config.scene, config.width, config.height
        );
    }

    fn draw(&mut self) {
        trace!("draw");
    }

    fn cleanup(&mut self) {
        info!("null renderer cleaned up");
    }

    fn pan_translation(&mut self, dx: f32, dy: f32) {
        trace!("pan ({dx}, {dy})");
    }

    fn movement(&mut self, dx: f32, dy: f32, dz: f32) {
        trace!("move ({dx}, {dy}, {dz})");
    }
}
