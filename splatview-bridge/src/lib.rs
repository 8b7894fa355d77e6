//! Call boundary to the external Vulkan Gaussian-splatting engine.
//!
//! The engine lives outside this repository and is reached through a narrow
//! C-style interface: initialize with a configuration, one draw per frame,
//! cleanup, and three camera-control primitives. This crate models that
//! boundary as the [`SplatRenderer`] trait so the viewer can be exercised
//! against a fake without linking the real engine. The concrete `vkgs`
//! binding is feature-gated.

mod renderer;
mod surface;
#[cfg(feature = "vkgs")]
mod vkgs;

pub use renderer::{NullRenderer, RendererConfig, SplatRenderer};
pub use surface::SurfaceHandle;
#[cfg(feature = "vkgs")]
pub use vkgs::VkgsRenderer;
