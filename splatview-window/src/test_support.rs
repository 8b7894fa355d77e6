//! Shared fakes for exercising the gesture pipeline and session lifecycle
//! without a real engine.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use splatview_bridge::{RendererConfig, SplatRenderer, SurfaceHandle};

use crate::error::ViewerError;
use crate::orientation::{DeviceOrientation, OrientationMask, OrientationService};
use crate::surface::{SurfaceProvider, SurfaceTarget};

/// Everything observable at the renderer and orientation boundaries, in
/// call order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Initialize {
        scene: PathBuf,
        width: i32,
        height: i32,
    },
    Draw,
    Cleanup,
    Pan {
        dx: f32,
        dy: f32,
    },
    Movement {
        dx: f32,
        dy: f32,
        dz: f32,
    },
    Mask(OrientationMask),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub fn new_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Renderer fake appending every boundary call to a shared log.
pub struct RecordingRenderer {
    log: CallLog,
}

impl RecordingRenderer {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl SplatRenderer for RecordingRenderer {
    fn initialize(&mut self, config: &RendererConfig) {
        self.log.borrow_mut().push(Call::Initialize {
            scene: config.scene.clone(),
            width: config.width,
            height: config.height,
        });
    }

    fn draw(&mut self) {
        self.log.borrow_mut().push(Call::Draw);
    }

    fn cleanup(&mut self) {
        self.log.borrow_mut().push(Call::Cleanup);
    }

    fn pan_translation(&mut self, dx: f32, dy: f32) {
        self.log.borrow_mut().push(Call::Pan { dx, dy });
    }

    fn movement(&mut self, dx: f32, dy: f32, dz: f32) {
        self.log.borrow_mut().push(Call::Movement { dx, dy, dz });
    }
}

/// Orientation fake reporting a scripted orientation and logging mask
/// changes into the same sequence as the renderer calls, so cross-boundary
/// ordering can be asserted.
pub struct ScriptedOrientation {
    orientation: DeviceOrientation,
    log: CallLog,
}

impl ScriptedOrientation {
    pub fn new(orientation: DeviceOrientation, log: CallLog) -> Self {
        Self { orientation, log }
    }
}

impl OrientationService for ScriptedOrientation {
    fn device_orientation(&self) -> DeviceOrientation {
        self.orientation
    }

    fn apply_mask(&mut self, mask: OrientationMask) {
        self.log.borrow_mut().push(Call::Mask(mask));
    }
}

/// Surface provider fake with fixed dimensions and a null handle.
pub struct FakeSurface {
    pub width: i32,
    pub height: i32,
}

impl SurfaceProvider for FakeSurface {
    fn provision(&self) -> Result<SurfaceTarget, ViewerError> {
        Ok(SurfaceTarget {
            handle: SurfaceHandle::null(),
            width: self.width,
            height: self.height,
        })
    }
}

/// Surface provider fake that always fails.
pub struct BrokenSurface;

impl SurfaceProvider for BrokenSurface {
    fn provision(&self) -> Result<SurfaceTarget, ViewerError> {
        Err(ViewerError::Surface("no drawable".to_owned()))
    }
}

/// A path that is guaranteed readable in every test environment.
pub fn readable_scene() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")
}
