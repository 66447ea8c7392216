use std::time::{Duration, Instant};

/// Default UI poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Interval between session engine ticks
pub const ENGINE_TICK: Duration = Duration::from_secs(1);

/// Get the UI poll duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Periodic one-second timer driven by the event loop.
///
/// At most one instance exists per app. `stop` drops the deadline, after
/// which `fire` never reports a tick until `start` is called again.
#[derive(Debug, Default)]
pub struct SecondTicker {
    next_due: Option<Instant>,
}

impl SecondTicker {
    pub fn new() -> Self {
        Self { next_due: None }
    }

    /// Arm the timer; the first tick is due one interval after `now`.
    /// Re-arming an armed timer restarts its interval.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + ENGINE_TICK);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Whether a tick is due at `now`. Reports at most one tick per call;
    /// intervals missed while the process was suspended are dropped.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let next = due + ENGINE_TICK;
        self.next_due = Some(if next <= now { now + ENGINE_TICK } else { next });
        true
    }
}
