use serde::{Deserialize, Serialize};

pub const FOCUS_MINUTES_RANGE: (u32, u32) = (1, 180);
pub const BREAK_MINUTES_RANGE: (u32, u32) = (1, 120);

/// Pomodoro durations, persisted under the `settings` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub focus_minutes: u32,
    pub break_minutes: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            break_minutes: 5,
        }
    }
}

impl Settings {
    /// Commit free-text input for the focus duration.
    /// Non-numeric input, including an empty field, keeps the current value.
    pub fn commit_focus(&mut self, raw: &str) {
        self.focus_minutes = clamp_minutes(raw, FOCUS_MINUTES_RANGE, self.focus_minutes);
    }

    /// Commit free-text input for the break duration.
    pub fn commit_break(&mut self, raw: &str) {
        self.break_minutes = clamp_minutes(raw, BREAK_MINUTES_RANGE, self.break_minutes);
    }

    /// Clamp values that came from disk into their valid ranges
    pub fn sanitized(self) -> Self {
        Self {
            focus_minutes: self
                .focus_minutes
                .clamp(FOCUS_MINUTES_RANGE.0, FOCUS_MINUTES_RANGE.1),
            break_minutes: self
                .break_minutes
                .clamp(BREAK_MINUTES_RANGE.0, BREAK_MINUTES_RANGE.1),
        }
    }
}

/// Parse, round and clamp a minutes value; `fallback` when `raw` is not a finite number
fn clamp_minutes(raw: &str, (min, max): (u32, u32), fallback: u32) -> u32 {
    // An empty or whitespace field is not a number: keep the committed value, never clamp to `min`
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n.round().clamp(min as f64, max as f64) as u32,
        _ => fallback,
    }
}
