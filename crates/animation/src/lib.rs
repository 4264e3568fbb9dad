//! Periodic repaint driver for the animated label window.
//!
//! [`cursor`] holds the wrapping horizontal offset, [`repaint`] is the seam towards the
//! windowing toolkit, and [`animation_loop`] runs the timed tick on a worker thread until
//! its [`AnimationHandle`] cancels it.

pub mod animation_loop;
pub mod cursor;
pub mod repaint;

use thiserror::Error;

pub use animation_loop::{run_animation, AnimationHandle, AnimationLoop, LoopExit};
pub use cursor::{OffsetCursor, SharedOffset, MAX_OFFSET, START_OFFSET, STEP};
pub use repaint::RepaintSink;

#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("animation tick period must be non-zero")]
    ZeroPeriod,
    #[error("failed to build animation runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to spawn animation worker thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("animation worker panicked")]
    WorkerPanicked,
}
