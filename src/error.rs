//! Error types for the console.

use thiserror::Error;

/// Errors the console can surface. The dashboard itself has no I/O, so the
/// taxonomy is narrow: terminal failures at the boundary, and a non-fatal
/// variant for when the animation surface cannot be sized.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// The drawing surface for the background animation could not be
    /// acquired. Non-fatal: the animator renders nothing and the rest of the
    /// dashboard is unaffected.
    #[error("rendering surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// Terminal setup or draw failure.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
