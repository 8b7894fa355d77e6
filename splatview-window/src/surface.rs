//! Drawable-surface provisioning for the renderer configuration.

use std::ffi::c_void;
use std::sync::Arc;

use splatview_bridge::SurfaceHandle;
use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};
use winit::window::Window;

use crate::error::ViewerError;

/// A drawable surface and its native pixel dimensions.
///
/// Dimensions are physical pixels, never logical points; the renderer
/// sizes its swapchain from them once per session.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceTarget {
    pub handle: SurfaceHandle,
    pub width: i32,
    pub height: i32,
}

/// Produces the drawable handle the renderer writes into.
///
/// No ownership transfer: the windowing layer governs the underlying
/// resource's lifetime, and the handle is borrowed into the renderer
/// configuration.
pub trait SurfaceProvider {
    fn provision(&self) -> Result<SurfaceTarget, ViewerError>;
}

/// Winit-backed provider extracting the window's native handle.
pub struct WindowSurface {
    window: Arc<Window>,
}

impl WindowSurface {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl SurfaceProvider for WindowSurface {
    fn provision(&self) -> Result<SurfaceTarget, ViewerError> {
        let size = self.window.inner_size();
        let raw = self
            .window
            .window_handle()
            .map_err(|err| ViewerError::Surface(err.to_string()))?
            .as_raw();
        let ptr: *mut c_void = match raw {
            RawWindowHandle::AppKit(handle) => handle.ns_view.as_ptr(),
            RawWindowHandle::UiKit(handle) => handle.ui_view.as_ptr(),
            RawWindowHandle::Wayland(handle) => handle.surface.as_ptr(),
            RawWindowHandle::Win32(handle) => handle.hwnd.get() as *mut c_void,
            RawWindowHandle::Xlib(handle) => handle.window as *mut c_void,
            other => {
                return Err(ViewerError::Surface(format!(
                    "unsupported window handle {other:?}"
                )));
            }
        };
        Ok(SurfaceTarget {
            handle: SurfaceHandle::from_raw(ptr),
            width: size.width as i32,
            height: size.height as i32,
        })
    }
}
