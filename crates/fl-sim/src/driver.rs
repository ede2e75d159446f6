//! Timer-driven execution of a [`Simulation`].

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::error;

use fl_timer::Timer;

use crate::{DriveState, SimResult, Simulation};

/// Runs [`Simulation::step`] from a [`Timer`].
///
/// The simulation sits behind an `Arc<Mutex<_>>` shared with the timer
/// callback, so a step and any [`with`][Self::with]/[`with_mut`][Self::with_mut]
/// call never overlap.
///
/// Event handlers run inside the step, with the mutex held: a handler must
/// not call back into the driver.
///
/// If a force fails, the error is logged and the loop stops; call
/// [`restart`][Self::restart] to resume.
pub struct SimulationDriver<T: Timer> {
    sim:   Arc<Mutex<Simulation>>,
    timer: T,
}

fn lock(sim: &Mutex<Simulation>) -> MutexGuard<'_, Simulation> {
    sim.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T: Timer> SimulationDriver<T> {
    /// Take ownership of `sim` and start the timer immediately.
    pub fn new(sim: Simulation, timer: T) -> SimResult<Self> {
        let mut driver = Self {
            sim: Arc::new(Mutex::new(sim)),
            timer,
        };
        driver.restart()?;
        Ok(driver)
    }

    /// Mark the simulation Running and (re)start the timer.
    pub fn restart(&mut self) -> SimResult<()> {
        lock(&self.sim).restart();
        let sim = Arc::clone(&self.sim);
        self.timer.restart(Box::new(move |_elapsed: Duration| drive_step(&sim)))?;
        Ok(())
    }

    /// Stop the timer, then the simulation.  A step already in progress
    /// finishes first.
    pub fn stop(&mut self) {
        self.timer.stop();
        lock(&self.sim).stop();
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Run `f` with shared access between steps.
    pub fn with<R>(&self, f: impl FnOnce(&Simulation) -> R) -> R {
        f(&lock(&self.sim))
    }

    /// Run `f` with exclusive access between steps.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Simulation) -> R) -> R {
        f(&mut lock(&self.sim))
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Stop driving and hand the simulation back.
    ///
    /// Drops the timer (and with it the callback's handle on the
    /// simulation) first.
    pub fn into_inner(mut self) -> Simulation {
        self.stop();
        let Self { sim, timer } = self;
        drop(timer);
        match Arc::try_unwrap(sim) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(PoisonError::into_inner),
            // A timer that kept its callback alive past drop; fall back to
            // swapping the state out.
            Err(shared) => {
                let mut guard = lock(&shared);
                std::mem::replace(&mut *guard, Simulation::new(Vec::new(), 1))
            }
        }
    }
}

/// Timer callback body.
fn drive_step(sim: &Mutex<Simulation>) -> ControlFlow<()> {
    let mut sim = lock(sim);
    match sim.step() {
        Ok(DriveState::Running) => ControlFlow::Continue(()),
        Ok(DriveState::Stopped) => ControlFlow::Break(()),
        Err(e) => {
            error!("simulation step failed: {e}");
            sim.stop();
            ControlFlow::Break(())
        }
    }
}
