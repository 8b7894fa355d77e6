//! Error types for the viewer shell.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while starting or running the viewer.
///
/// The renderer boundary itself is non-failing; errors only arise around
/// it, before a session starts.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("cannot access scene file {path:?}: {source}")]
    SceneAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("surface provisioning failed: {0}")]
    Surface(String),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("invalid options file: {0}")]
    Options(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
