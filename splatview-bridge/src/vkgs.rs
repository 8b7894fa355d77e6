//! FFI binding to the vkgs splatting engine.
//!
//! The engine keeps a single global instance behind these entry points, so
//! the adapter carries no state of its own and simply forwards calls.

use std::ffi::{CString, c_char, c_void};

use tracing::{error, info};

use crate::renderer::{RendererConfig, SplatRenderer};

unsafe extern "C" {
    unsafe fn vkgs_initialize(scene: *const c_char, surface: *mut c_void, width: i32, height: i32);
    unsafe fn vkgs_draw();
    unsafe fn vkgs_pan_translation(x: f32, y: f32);
    unsafe fn vkgs_movement(x: f32, y: f32, z: f32);
    unsafe fn vkgs_cleanup();
}

/// Adapter over the engine's C entry points.
#[derive(Debug, Default)]
pub struct VkgsRenderer;

impl SplatRenderer for VkgsRenderer {
    fn initialize(&mut self, config: &RendererConfig) {
        let Ok(scene) = CString::new(config.scene.as_os_str().as_encoded_bytes()) else {
            error!("scene path {:?} contains an interior NUL byte", config.scene);
            return;
        };
        info!(
            "initializing vkgs for {:?} ({}x{})",
            config.scene, config.width, config.height
        );
        unsafe {
            vkgs_initialize(
                scene.as_ptr(),
                config.surface.as_ptr(),
                config.width,
                config.height,
            );
        }
    }

    fn draw(&mut self) {
        unsafe { vkgs_draw() }
    }

    fn cleanup(&mut self) {
        info!("tearing down vkgs");
        unsafe { vkgs_cleanup() }
    }

    fn pan_translation(&mut self, dx: f32, dy: f32) {
        unsafe { vkgs_pan_translation(dx, dy) }
    }

    fn movement(&mut self, dx: f32, dy: f32, dz: f32) {
        unsafe { vkgs_movement(dx, dy, dz) }
    }
}
