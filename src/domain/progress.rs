use super::dates::day_key;
use super::session::SessionEvent;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-day counters keyed by day identifier
pub type DayCounts = BTreeMap<String, u32>;

/// Consecutive days with at least one completed focus session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub current: u32,
    pub best: u32,
    pub last_active_day: Option<String>,
}

impl Streak {
    /// Count `today` as an active day. Returns whether the streak changed.
    pub fn record_focus_day(&mut self, today: NaiveDate) -> bool {
        let today_key = day_key(today);
        if self.last_active_day.as_deref() == Some(today_key.as_str()) {
            return false;
        }

        let continues = match (&self.last_active_day, today.pred_opt()) {
            (Some(last), Some(yesterday)) => *last == day_key(yesterday),
            _ => false,
        };

        self.current = if continues {
            self.current.saturating_add(1)
        } else {
            1
        };
        self.best = self.best.max(self.current);
        self.last_active_day = Some(today_key);
        true
    }

    /// Restore `best >= current` for values loaded from disk
    pub fn sanitized(mut self) -> Self {
        self.best = self.best.max(self.current);
        self
    }
}

/// Progress aggregates derived from session events and the task list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    pub focus_by_day: DayCounts,
    pub tasks_done_by_day: DayCounts,
    pub streak: Streak,
}

impl Progress {
    /// Fold one session event into the aggregates. Returns whether anything changed.
    pub fn apply(&mut self, event: &SessionEvent, today: NaiveDate) -> bool {
        match event {
            SessionEvent::FocusMinuteEarned { minutes } => {
                let total = self.focus_by_day.entry(day_key(today)).or_insert(0);
                *total = total.saturating_add(*minutes);
                let streak_changed = self.streak.record_focus_day(today);
                if streak_changed {
                    log::info!(
                        "Streak now {} (best {})",
                        self.streak.current,
                        self.streak.best
                    );
                }
                true
            }
            // Hook point only; focus accounting lives on FocusMinuteEarned
            SessionEvent::SessionEnded { .. } => false,
        }
    }

    /// Overwrite today's completed-task snapshot. Returns whether the stored value changed.
    pub fn record_tasks_done(&mut self, today: NaiveDate, completed: usize) -> bool {
        let completed = u32::try_from(completed).unwrap_or(u32::MAX);
        let previous = self.tasks_done_by_day.insert(day_key(today), completed);
        previous != Some(completed)
    }

    pub fn focus_minutes_on(&self, key: &str) -> u32 {
        self.focus_by_day.get(key).copied().unwrap_or(0)
    }

    pub fn tasks_done_on(&self, key: &str) -> u32 {
        self.tasks_done_by_day.get(key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::SessionMode;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn earned(minutes: u32) -> SessionEvent {
        SessionEvent::FocusMinuteEarned { minutes }
    }

    #[test]
    fn test_focus_minutes_accumulate() {
        let mut progress = Progress::default();
        let today = date(2024, 4, 10);

        assert!(progress.apply(&earned(25), today));
        assert!(progress.apply(&earned(25), today));
        assert_eq!(progress.focus_minutes_on("2024-04-10"), 50);
        assert_eq!(progress.focus_minutes_on("2024-04-09"), 0);
    }

    #[test]
    fn test_session_ended_is_a_no_op() {
        let mut progress = Progress::default();
        let event = SessionEvent::SessionEnded {
            ended_mode: SessionMode::Focus,
            day_key: "2024-04-10".to_string(),
        };
        assert!(!progress.apply(&event, date(2024, 4, 10)));
        assert_eq!(progress, Progress::default());
    }

    #[test]
    fn test_streak_extends_from_yesterday() {
        let mut progress = Progress {
            streak: Streak {
                current: 3,
                best: 3,
                last_active_day: Some("2024-04-09".to_string()),
            },
            ..Default::default()
        };
        let today = date(2024, 4, 10);

        progress.apply(&earned(25), today);
        assert_eq!(
            progress.streak,
            Streak {
                current: 4,
                best: 4,
                last_active_day: Some("2024-04-10".to_string()),
            }
        );

        // Second session the same day leaves the streak alone
        progress.apply(&earned(25), today);
        assert_eq!(progress.streak.current, 4);
        assert_eq!(progress.streak.best, 4);
    }

    #[test]
    fn test_streak_keeps_higher_best() {
        let mut streak = Streak {
            current: 2,
            best: 9,
            last_active_day: Some("2024-02-28".to_string()),
        };
        assert!(streak.record_focus_day(date(2024, 2, 29)));
        assert_eq!(streak.current, 3);
        assert_eq!(streak.best, 9);
    }

    #[test]
    fn test_streak_resets_after_gap() {
        let mut streak = Streak {
            current: 5,
            best: 5,
            last_active_day: Some("2024-04-07".to_string()),
        };
        assert!(streak.record_focus_day(date(2024, 4, 10)));
        assert_eq!(streak.current, 1);
        assert_eq!(streak.best, 5);
    }

    #[test]
    fn test_streak_first_activity() {
        let mut streak = Streak::default();
        assert!(streak.record_focus_day(date(2024, 1, 1)));
        assert_eq!(streak.current, 1);
        assert_eq!(streak.best, 1);
        assert!(!streak.record_focus_day(date(2024, 1, 1)));
    }

    #[test]
    fn test_streak_across_year_boundary() {
        let mut streak = Streak {
            current: 1,
            best: 1,
            last_active_day: Some("2023-12-31".to_string()),
        };
        streak.record_focus_day(date(2024, 1, 1));
        assert_eq!(streak.current, 2);
    }

    #[test]
    fn test_streak_sanitized() {
        let loaded = Streak {
            current: 6,
            best: 2,
            last_active_day: None,
        };
        assert_eq!(loaded.sanitized().best, 6);
    }

    #[test]
    fn test_tasks_done_snapshot_overwrites() {
        let mut progress = Progress::default();
        let today = date(2024, 4, 10);

        assert!(progress.record_tasks_done(today, 1));
        assert!(!progress.record_tasks_done(today, 1));
        assert_eq!(progress.tasks_done_on("2024-04-10"), 1);

        assert!(progress.record_tasks_done(today, 0));
        assert_eq!(progress.tasks_done_on("2024-04-10"), 0);
    }

    #[test]
    fn test_streak_persisted_shape() {
        let json = serde_json::to_string(&Streak::default()).unwrap();
        assert_eq!(json, r#"{"current":0,"best":0,"lastActiveDay":null}"#);
    }

    #[test]
    fn test_loaded_totals_saturate() {
        let mut progress = Progress {
            streak: Streak {
                current: u32::MAX,
                best: u32::MAX,
                last_active_day: Some("2024-04-09".to_string()),
            },
            ..Default::default()
        };
        progress
            .focus_by_day
            .insert("2024-04-10".to_string(), u32::MAX);

        assert!(progress.apply(&earned(1), date(2024, 4, 10)));
        assert_eq!(progress.focus_minutes_on("2024-04-10"), u32::MAX);
        assert_eq!(progress.streak.current, u32::MAX);
        assert_eq!(progress.streak.best, u32::MAX);
    }
}
