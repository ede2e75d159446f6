//! The `Timer` trait.

use std::ops::ControlFlow;
use std::time::Duration;

use crate::TimerResult;

/// Step callback installed by [`Timer::restart`].
///
/// Receives the time elapsed since the timer was (re)started.  Returning
/// `ControlFlow::Break(())` stops the timer; no further invocation follows.
pub type TimerCallback = Box<dyn FnMut(Duration) -> ControlFlow<()> + Send + 'static>;

/// A periodic scheduler.
///
/// Cadence is entirely the implementation's concern.  The simulation only
/// relies on the callback being invoked sequentially, never concurrently
/// with itself.
pub trait Timer {
    /// Install `callback` (dropping any previous one) and begin invoking it.
    /// Elapsed time restarts from zero.
    fn restart(&mut self, callback: TimerCallback) -> TimerResult<()>;

    /// Stop invoking the callback.  An in-flight invocation may finish, but
    /// none starts after this returns.
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}
