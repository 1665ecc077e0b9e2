use std::future::Future;
use std::time::Duration;

use futures::future::{abortable, AbortHandle};
use log::debug;
use tokio::time::Instant;

/// Owns the one-shot timer tasks of the mounted page.
///
/// Every mount gets a fresh epoch. Remounting aborts whatever the previous
/// page still had pending, and callers compare the epoch a cue was
/// scheduled under with [`Choreographer::epoch`] to drop anything that
/// slipped through.
#[derive(Debug, Default)]
pub struct Choreographer {
    epoch: u64,
    pending: Vec<AbortHandle>,
}

impl Choreographer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Epoch of the current mount
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Abort all pending tasks and start a new epoch
    pub fn remount(&mut self) -> u64 {
        self.cancel_all();
        self.epoch += 1;
        self.epoch
    }

    /// Abort every pending task of the current mount
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            debug!("Aborting {} pending cue(s) of epoch {}", self.pending.len(), self.epoch);
        }
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }

    /// Run `task` once after `after`, unless the mount is torn down first
    pub fn schedule<F>(&mut self, after: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.track(async move {
            tokio::time::sleep(after).await;
            task.await;
        });
    }

    /// Run `task` now, tied to the lifetime of the current mount
    pub fn track<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (task, handle) = abortable(task);
        self.pending.push(handle);
        tokio::spawn(task);
    }

    /// Number of tasks started under the current epoch
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for Choreographer {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Start time and length of an animated phase
#[derive(Debug, Clone, Copy)]
pub struct PhaseClock {
    started: Instant,
    duration: Duration,
}

impl PhaseClock {
    pub fn start(duration: Duration) -> Self {
        Self {
            started: Instant::now(),
            duration,
        }
    }

    /// Fraction of the phase elapsed, clamped to `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = self.started.elapsed().as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}
