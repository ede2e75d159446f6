//! `fl-timer`: schedulers that repeatedly invoke a step callback.
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`timer`]    | `Timer` trait, `TimerCallback`                               |
//! | [`manual`]   | `ManualTimer`: fired explicitly from a host's frame loop    |
//! | [`interval`] | `IntervalTimer`: fires on a background thread               |
//! | [`error`]    | `TimerError`, `TimerResult<T>`                               |
//!
//! # Cancellation
//!
//! `stop` is cooperative.  A callback already executing when `stop` is
//! called runs to completion; once `stop` returns, no further callback
//! starts.  A callback stops its own timer by returning
//! `ControlFlow::Break(())`.

pub mod error;
pub mod interval;
pub mod manual;
pub mod timer;

#[cfg(test)]
mod tests;

pub use error::{TimerError, TimerResult};
pub use interval::IntervalTimer;
pub use manual::ManualTimer;
pub use timer::{Timer, TimerCallback};
