use std::thread;
use std::time::{Duration, Instant};

/// Default tick frequency in updates per second.
pub const DEFAULT_UPS: u32 = 60;

/// Fixed-tick pacer.
///
/// `wait()` blocks the calling thread until the next tick boundary (derived
/// from the target UPS), then reports the wall-clock time since the previous
/// tick in milliseconds. Over N seconds at 60 UPS this yields roughly 60·N
/// completed ticks, within scheduler jitter.
///
/// When a tick overruns its slot the deadline is rebased to `now + interval`
/// instead of accumulating debt, so a long stall produces one long `dt`
/// rather than a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    deadline: Instant,
    last_tick: Instant,
}

impl TickClock {
    /// Creates a pacer targeting `ups` ticks per second.
    ///
    /// `ups = 0` is treated as uncapped: `wait()` never sleeps and only
    /// measures elapsed time.
    pub fn new(ups: u32) -> Self {
        let interval = interval_for_ups(ups);
        let now = Instant::now();
        Self {
            interval,
            deadline: now + interval,
            last_tick: now,
        }
    }

    /// Resets the baseline, e.g. after a suspension.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.deadline = now + self.interval;
        self.last_tick = now;
    }

    /// Blocks until the current tick boundary, then returns the elapsed time
    /// since the previous tick in milliseconds.
    pub fn wait(&mut self) -> f32 {
        if let Some(remaining) = sleep_needed(self.deadline, Instant::now()) {
            thread::sleep(remaining);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.deadline = next_deadline(self.deadline, self.interval, now);

        (dt.as_secs_f64() * 1000.0) as f32
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(DEFAULT_UPS)
    }
}

fn interval_for_ups(ups: u32) -> Duration {
    if ups == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs(1) / ups
    }
}

/// Time left until `deadline`, or `None` when it has already passed.
fn sleep_needed(deadline: Instant, now: Instant) -> Option<Duration> {
    let remaining = deadline.checked_duration_since(now)?;
    (remaining > Duration::ZERO).then_some(remaining)
}

/// Advances the deadline by one interval, rebasing when the loop has fallen
/// behind schedule.
fn next_deadline(deadline: Instant, interval: Duration, now: Instant) -> Instant {
    let next = deadline + interval;
    if next <= now { now + interval } else { next }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> Instant {
        Instant::now()
    }

    #[test]
    fn interval_matches_ups() {
        assert_eq!(interval_for_ups(60), Duration::from_secs(1) / 60);
        assert_eq!(interval_for_ups(0), Duration::ZERO);
    }

    #[test]
    fn sleep_needed_before_deadline() {
        let base = t0();
        let deadline = base + Duration::from_millis(10);
        assert_eq!(
            sleep_needed(deadline, base + Duration::from_millis(4)),
            Some(Duration::from_millis(6))
        );
    }

    #[test]
    fn sleep_needed_past_deadline_is_none() {
        let base = t0();
        let deadline = base + Duration::from_millis(10);
        assert_eq!(sleep_needed(deadline, deadline), None);
        assert_eq!(sleep_needed(deadline, base + Duration::from_millis(20)), None);
    }

    #[test]
    fn next_deadline_on_schedule() {
        let base = t0();
        let interval = Duration::from_millis(16);
        let deadline = base + interval;
        // Woke exactly at the boundary: next boundary is one interval later.
        assert_eq!(next_deadline(deadline, interval, deadline), deadline + interval);
    }

    #[test]
    fn next_deadline_rebases_after_stall() {
        let base = t0();
        let interval = Duration::from_millis(16);
        let deadline = base + interval;
        // The loop stalled for several intervals; schedule from `now`.
        let late = deadline + Duration::from_millis(100);
        assert_eq!(next_deadline(deadline, interval, late), late + interval);
    }

    #[test]
    fn sixty_ups_yields_sixty_ticks_per_second() {
        // Simulate one second of a perfectly punctual loop: every tick wakes
        // exactly when `sleep_needed` says the boundary is.
        let base = t0();
        let interval = interval_for_ups(60);
        let mut deadline = base + interval;
        let mut now = base;
        let end = base + Duration::from_secs(1);

        let mut ticks = 0u32;
        loop {
            if let Some(remaining) = sleep_needed(deadline, now) {
                now += remaining;
            }
            if now > end {
                break;
            }
            ticks += 1;
            deadline = next_deadline(deadline, interval, now);
        }

        assert_eq!(ticks, 60);
    }

    #[test]
    fn dt_accumulates_to_wall_time() {
        // Same simulation, but check that per-tick deltas sum to the elapsed
        // wall-clock time (no time is lost or double-counted by the pacer).
        let base = t0();
        let interval = interval_for_ups(60);
        let mut deadline = base + interval;
        let mut now = base;
        let mut last_tick = base;
        let mut total = Duration::ZERO;

        for _ in 0..120 {
            if let Some(remaining) = sleep_needed(deadline, now) {
                now += remaining;
            }
            total += now.duration_since(last_tick);
            last_tick = now;
            deadline = next_deadline(deadline, interval, now);
        }

        assert_eq!(total, now.duration_since(base));
    }

    #[test]
    fn uncapped_clock_never_sleeps() {
        let mut clock = TickClock::new(0);
        // No boundary to wait for; wait() returns immediately with a tiny dt.
        let dt = clock.wait();
        assert!(dt >= 0.0);
        assert!(dt < 1000.0);
    }
}
