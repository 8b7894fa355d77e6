use std::ffi::c_void;

/// Opaque, non-owning reference to a platform drawable surface.
///
/// The windowing layer owns the underlying resource; the renderer receives
/// this handle inside its configuration and must not outlive the window
/// that produced it. A null handle is valid for headless use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceHandle(*mut c_void);

impl SurfaceHandle {
    /// Wrap a raw platform handle (e.g. a `CAMetalLayer` pointer or an
    /// `HWND`). The caller keeps ownership.
    pub fn from_raw(ptr: *mut c_void) -> Self {
        Self(ptr)
    }

    /// Handle with no backing surface.
    pub fn null() -> Self {
        Self(std::ptr::null_mut())
    }

    /// The raw pointer passed across the engine boundary.
    pub fn as_ptr(self) -> *mut c_void {
        self.0
    }
}
