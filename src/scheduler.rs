//! Periodic sweep scheduling with a single-flight guard.
//!
//! The scheduler owns the sweep lifecycle: it fires a tick callback at a
//! fixed interval on a background thread and stops cleanly on request. The
//! [`SingleFlight`] guard enforces the key resource-safety contract: at most
//! one sweep runs at a time over a source directory. A tick that finds the
//! guard held is skipped, never queued; two sweeps racing on the same file
//! could leave it without a safe copy.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Ensures at most one sweep is in flight at a time.
#[derive(Debug, Default)]
pub struct SingleFlight {
    busy: AtomicBool,
}

impl SingleFlight {
    /// Creates a released guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tries to claim the guard. Returns `None` when a sweep is already
    /// running; the caller must skip its trigger rather than wait.
    pub fn try_begin(&self) -> Option<SingleFlightGuard<'_>> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
        {
            Some(SingleFlightGuard { flag: &self.busy })
        } else {
            None
        }
    }
}

/// Releases the [`SingleFlight`] claim on drop.
pub struct SingleFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for SingleFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Fires a tick callback at a fixed interval on a background thread.
pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    /// Creates a scheduler with the given interval between ticks.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Starts the tick thread. The first tick fires after one interval;
    /// callers wanting an immediate pass run it themselves before starting.
    pub fn start<F>(self, mut tick: F) -> SchedulerHandle
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let join = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(self.interval) {
                    Err(RecvTimeoutError::Timeout) => tick(),
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        SchedulerHandle { stop_tx, join }
    }
}

/// Handle to a running scheduler thread.
pub struct SchedulerHandle {
    stop_tx: Sender<()>,
    join: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Signals the tick thread to stop and waits for it to finish.
    pub fn stop(self) {
        let _ = self.stop_tx.send(());
        let _ = self.join.join();
    }

    /// Blocks until the scheduler thread exits. Used by foreground watch
    /// mode, where only process termination ends the loop.
    pub fn wait(self) {
        let SchedulerHandle { stop_tx, join } = self;
        let _ = join.join();
        drop(stop_tx);
    }
}
