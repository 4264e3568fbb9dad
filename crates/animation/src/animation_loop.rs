use std::{
    thread::{self, JoinHandle},
    time::Duration,
};

use tokio::sync::watch;

use crate::{cursor::SharedOffset, repaint::RepaintSink, AnimationError};

/// Why the animation loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// `AnimationHandle::cancel` was called (window closed).
    Cancelled,
    /// The shutdown sender went away without an explicit cancel.
    HandleDropped,
}

/// Requests a repaint, waits `period`, then advances `offset`; repeats until shut down.
///
/// The wait is raced against `shutdown`, so cancellation ends the loop without
/// finishing the current tick.
pub async fn run_animation<S: RepaintSink>(
    sink: S,
    offset: SharedOffset,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> LoopExit {
    loop {
        if *shutdown.borrow_and_update() {
            return LoopExit::Cancelled;
        }

        sink.request_repaint();

        tokio::select! {
            biased;
            changed = shutdown.changed() => match changed {
                Ok(()) if *shutdown.borrow() => return LoopExit::Cancelled,
                Ok(()) => continue,
                Err(_) => return LoopExit::HandleDropped,
            },
            _ = tokio::time::sleep(period) => {}
        }

        let x = offset.advance();
        tracing::trace!(x, "animation tick");
    }
}

pub struct AnimationLoop {
    period: Duration,
    offset: SharedOffset,
}

impl AnimationLoop {
    pub fn new(offset: SharedOffset, period: Duration) -> Self {
        Self { period, offset }
    }

    /// Starts the loop on its own worker thread with a single-threaded runtime.
    pub fn spawn<S: RepaintSink>(self, sink: S) -> Result<AnimationHandle, AnimationError> {
        if self.period.is_zero() {
            return Err(AnimationError::ZeroPeriod);
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(AnimationError::Runtime)?;
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let Self { period, offset } = self;

        let worker = thread::Builder::new()
            .name("animation-loop".into())
            .spawn(move || {
                tracing::info!(?period, "animation loop started");
                let exit = runtime.block_on(run_animation(sink, offset, period, shutdown_rx));
                tracing::info!(?exit, "animation loop stopped");
                exit
            })
            .map_err(AnimationError::Spawn)?;

        Ok(AnimationHandle {
            shutdown: shutdown_tx,
            worker: Some(worker),
        })
    }
}

/// Owns the running loop. Dropping the handle cancels the loop without waiting for it.
pub struct AnimationHandle {
    shutdown: watch::Sender<bool>,
    worker: Option<JoinHandle<LoopExit>>,
}

impl AnimationHandle {
    pub fn cancel(&self) {
        // Err only means the loop already ended.
        let _ = self.shutdown.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Cancels the loop and waits for the worker thread to exit.
    pub fn join(mut self) -> Result<LoopExit, AnimationError> {
        self.cancel();
        match self.worker.take() {
            Some(worker) => worker.join().map_err(|_| AnimationError::WorkerPanicked),
            None => Ok(LoopExit::Cancelled),
        }
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "tests/animation_loop_tests.rs"]
mod tests;
