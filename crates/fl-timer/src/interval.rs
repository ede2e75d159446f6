//! A timer that fires on a background thread.
//!
//! # Race-free stop
//!
//! Every restart bumps a generation counter held in a mutex.  The worker
//! thread takes that mutex, checks the generation is still its own, and
//! invokes the callback *while holding the lock*.  `stop` bumps the
//! generation under the same lock, so it either waits for an in-flight
//! callback to finish or runs first, in which case the worker sees a stale
//! generation and exits without invoking.
//!
//! The worker sleeps in `recv_timeout` on a shutdown channel; dropping the
//! sender wakes it immediately.

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use log::{debug, warn};

use crate::{Timer, TimerCallback, TimerResult};

/// Default cadence: ~60 invocations per second.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Default)]
struct State {
    generation: u64,
    running:    bool,
}

/// Handle to a live worker thread.
struct Worker {
    /// Never sent on; dropped to wake the worker for shutdown.
    shutdown: Sender<()>,
    handle:   JoinHandle<()>,
}

/// A [`Timer`] that invokes its callback every `interval` on a dedicated
/// thread.
pub struct IntervalTimer {
    interval: Duration,
    state:    Arc<Mutex<State>>,
    worker:   Option<Worker>,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: Arc::new(Mutex::new(State::default())),
            worker: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Timer for IntervalTimer {
    fn restart(&mut self, callback: TimerCallback) -> TimerResult<()> {
        self.stop();

        let generation = {
            let mut state = lock(&self.state);
            state.generation += 1;
            state.running = true;
            state.generation
        };

        let (shutdown, shutdown_rx) = crossbeam_channel::bounded(0);
        let state = Arc::clone(&self.state);
        let interval = self.interval;
        let spawned = thread::Builder::new()
            .name(format!("fl-timer-{generation}"))
            .spawn(move || run_worker(state, generation, interval, shutdown_rx, callback));

        match spawned {
            Ok(handle) => {
                debug!("interval timer started (generation {generation}, every {interval:?})");
                self.worker = Some(Worker { shutdown, handle });
                Ok(())
            }
            Err(e) => {
                lock(&self.state).running = false;
                Err(e.into())
            }
        }
    }

    fn stop(&mut self) {
        {
            let mut state = lock(&self.state);
            state.generation += 1;
            state.running = false;
        }
        if let Some(Worker { shutdown, handle }) = self.worker.take() {
            drop(shutdown);
            if handle.join().is_err() {
                warn!("interval timer callback panicked");
            }
            debug!("interval timer stopped");
        }
    }

    fn is_running(&self) -> bool {
        lock(&self.state).running
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_worker(
    state:      Arc<Mutex<State>>,
    generation: u64,
    interval:   Duration,
    shutdown:   Receiver<()>,
    mut callback: TimerCallback,
) {
    let origin = Instant::now();
    loop {
        match shutdown.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            // Sender dropped: shut down.
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
        }

        let mut guard = lock(&state);
        if guard.generation != generation || !guard.running {
            return;
        }
        if let ControlFlow::Break(()) = callback(origin.elapsed()) {
            guard.running = false;
            return;
        }
    }
}
