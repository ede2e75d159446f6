//! A timer fired explicitly by its owner.

use std::ops::ControlFlow;
use std::time::Duration;

use crate::{Timer, TimerCallback, TimerResult};

/// A [`Timer`] with a virtual clock, advanced by the host.
///
/// Suits hosts that already own a frame loop (a renderer's redraw, say) and
/// tests that need deterministic stepping.
#[derive(Default)]
pub struct ManualTimer {
    callback: Option<TimerCallback>,
    running:  bool,
    /// Virtual time since the last restart.
    elapsed:  Duration,
    fired:    u64,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the virtual clock by `dt` and, if running, invoke the
    /// callback once.  Returns `true` if the callback ran.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        if !self.running {
            return false;
        }
        let Some(callback) = self.callback.as_mut() else {
            return false;
        };
        self.fired += 1;
        if let ControlFlow::Break(()) = callback(self.elapsed) {
            self.running = false;
        }
        true
    }

    /// Invoke the callback up to `n` times, `dt` apart, stopping early if
    /// the timer stops.  Returns how many invocations ran.
    pub fn advance_n(&mut self, n: usize, dt: Duration) -> usize {
        let mut ran = 0;
        for _ in 0..n {
            if !self.advance(dt) {
                break;
            }
            ran += 1;
        }
        ran
    }

    /// Virtual time since the last restart.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total callback invocations since construction.
    pub fn fired(&self) -> u64 {
        self.fired
    }
}

impl Timer for ManualTimer {
    fn restart(&mut self, callback: TimerCallback) -> TimerResult<()> {
        self.callback = Some(callback);
        self.elapsed = Duration::ZERO;
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
