//! Unit tests for fl-timer.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::{IntervalTimer, ManualTimer, Timer, TimerCallback};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn counting(counter: &Arc<AtomicUsize>) -> TimerCallback {
    let counter = Arc::clone(counter);
    Box::new(move |_elapsed: Duration| {
        counter.fetch_add(1, Ordering::SeqCst);
        ControlFlow::Continue(())
    })
}

// ── ManualTimer ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod manual_tests {
    use super::*;

    #[test]
    fn idle_until_restarted() {
        let mut timer = ManualTimer::new();
        assert!(!timer.is_running());
        assert!(!timer.advance(Duration::from_millis(16)));
        assert_eq!(timer.fired(), 0);
    }

    #[test]
    fn fires_once_per_advance() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut timer = ManualTimer::new();
        timer.restart(counting(&count)).unwrap();
        assert_eq!(timer.advance_n(5, Duration::from_millis(10)), 5);
        assert_eq!(count.load(Ordering::SeqCst), 5);
        assert_eq!(timer.elapsed(), Duration::from_millis(50));
    }

    #[test]
    fn stop_halts_and_keeps_elapsed() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut timer = ManualTimer::new();
        timer.restart(counting(&count)).unwrap();
        timer.advance(Duration::from_millis(10));
        timer.stop();
        assert!(!timer.advance(Duration::from_millis(10)));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(timer.elapsed(), Duration::from_millis(20));
    }

    #[test]
    fn restart_resets_elapsed() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut timer = ManualTimer::new();
        timer.restart(counting(&count)).unwrap();
        timer.advance(Duration::from_millis(30));
        timer.restart(counting(&count)).unwrap();
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn break_stops_timer() {
        let mut timer = ManualTimer::new();
        let mut left = 3;
        timer
            .restart(Box::new(move |_: Duration| {
                left -= 1;
                if left == 0 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
            }))
            .unwrap();
        assert_eq!(timer.advance_n(10, Duration::from_millis(1)), 3);
        assert!(!timer.is_running());
    }

    #[test]
    fn callback_sees_elapsed() {
        let seen = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&seen);
        let mut timer = ManualTimer::new();
        timer
            .restart(Box::new(move |elapsed: Duration| {
                sink.store(elapsed.as_millis() as usize, Ordering::SeqCst);
                ControlFlow::Continue(())
            }))
            .unwrap();
        timer.advance(Duration::from_millis(7));
        timer.advance(Duration::from_millis(8));
        assert_eq!(seen.load(Ordering::SeqCst), 15);
    }
}

// ── IntervalTimer ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod interval_tests {
    use std::thread;

    use super::*;

    #[test]
    fn fires_repeatedly_until_stopped() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut timer = IntervalTimer::new(Duration::from_millis(1));
        timer.restart(counting(&count)).unwrap();
        assert!(timer.is_running());

        // Generous deadline so a loaded CI machine still sees a few firings.
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while count.load(Ordering::SeqCst) < 3 && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        timer.stop();
        assert!(!timer.is_running());

        let after_stop = count.load(Ordering::SeqCst);
        assert!(after_stop >= 3);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn break_stops_worker() {
        let count = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&count);
        let mut timer = IntervalTimer::new(Duration::from_millis(1));
        timer
            .restart(Box::new(move |_: Duration| {
                sink.fetch_add(1, Ordering::SeqCst);
                ControlFlow::Break(())
            }))
            .unwrap();

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while timer.is_running() && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(!timer.is_running());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn stop_without_start_is_harmless() {
        let mut timer = IntervalTimer::default();
        timer.stop();
        assert!(!timer.is_running());
    }

    #[test]
    fn restart_replaces_callback() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut timer = IntervalTimer::new(Duration::from_millis(1));
        timer.restart(counting(&first)).unwrap();
        timer.restart(counting(&second)).unwrap();
        let frozen = first.load(Ordering::SeqCst);

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while second.load(Ordering::SeqCst) == 0 && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        timer.stop();
        assert_eq!(first.load(Ordering::SeqCst), frozen);
        assert!(second.load(Ordering::SeqCst) > 0);
    }
}
