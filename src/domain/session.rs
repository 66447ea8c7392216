use super::dates::day_key;
use super::enums::SessionMode;
use super::settings::Settings;
use chrono::NaiveDate;

/// Event emitted by a tick that crossed a countdown boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A countdown reached zero. Emitted for both modes.
    SessionEnded { ended_mode: SessionMode, day_key: String },
    /// A Focus countdown completed and earned its configured minutes
    FocusMinuteEarned { minutes: u32 },
}

/// Result of one engine tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub events: Vec<SessionEvent>,
}

impl TickOutcome {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Focus/break countdown state machine.
///
/// Settings are passed into every operation that needs a duration, so the
/// engine never caches them: a change takes effect at the next reset or rollover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEngine {
    mode: SessionMode,
    running: bool,
    seconds_remaining: u32,
}

impl SessionEngine {
    /// Paused at the start of a Focus countdown
    pub fn new(settings: &Settings) -> Self {
        Self {
            mode: SessionMode::Focus,
            running: false,
            seconds_remaining: SessionMode::Focus.duration_secs(settings),
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Back to a paused Focus countdown at the current focus duration
    pub fn reset(&mut self, settings: &Settings) {
        self.switch_to(SessionMode::Focus, settings);
    }

    pub fn set_focus_mode(&mut self, settings: &Settings) {
        self.switch_to(SessionMode::Focus, settings);
    }

    pub fn set_break_mode(&mut self, settings: &Settings) {
        self.switch_to(SessionMode::Break, settings);
    }

    fn switch_to(&mut self, mode: SessionMode, settings: &Settings) {
        self.running = false;
        self.mode = mode;
        self.seconds_remaining = mode.duration_secs(settings);
    }

    /// Advance the countdown by one second.
    ///
    /// Paused engines ignore the tick. When the last second elapses the ended
    /// mode is reported, the mode flips and the countdown restarts at the new
    /// mode's duration from `settings`; the engine keeps running.
    pub fn tick(&mut self, settings: &Settings, today: NaiveDate) -> TickOutcome {
        if !self.running {
            return TickOutcome::default();
        }

        if self.seconds_remaining == 0 {
            // Nothing was counting down, so nothing ended
            self.seconds_remaining = self.mode.duration_secs(settings);
            return TickOutcome::default();
        }

        if self.seconds_remaining > 1 {
            self.seconds_remaining -= 1;
            return TickOutcome::default();
        }

        let ended_mode = self.mode;
        let mut events = vec![SessionEvent::SessionEnded {
            ended_mode,
            day_key: day_key(today),
        }];
        if ended_mode == SessionMode::Focus {
            events.push(SessionEvent::FocusMinuteEarned {
                minutes: settings.focus_minutes,
            });
        }

        self.mode = ended_mode.other();
        self.seconds_remaining = self.mode.duration_secs(settings);

        TickOutcome { events }
    }

    /// Fraction of the current countdown already elapsed (0.0 to 1.0)
    pub fn progress_ratio(&self, settings: &Settings) -> f64 {
        let total = self.mode.duration_secs(settings);
        if total == 0 {
            return 0.0;
        }
        let elapsed = total.saturating_sub(self.seconds_remaining);
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }
}

/// Format seconds as "MM:SS" (minutes grow past two digits for long sessions)
pub fn format_clock(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
