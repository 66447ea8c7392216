use super::dates::{trailing_day_keys, trailing_day_keys_from};
use super::progress::DayCounts;
use chrono::NaiveDate;

/// Number of days in the weekly chart
pub const WEEK_DAYS: usize = 7;

/// One bar group of the weekly chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    /// Full day key, `YYYY-MM-DD`
    pub day: String,
    /// "MM-DD"
    pub label: String,
    pub focus_minutes: u32,
    pub tasks_done: u32,
}

/// Weekly series ending today
pub fn build_series(focus_by_day: &DayCounts, tasks_done_by_day: &DayCounts) -> Vec<SeriesPoint> {
    series_for_keys(trailing_day_keys(WEEK_DAYS), focus_by_day, tasks_done_by_day)
}

/// Series over the trailing `days` ending at `end`, oldest first
pub fn build_series_from(
    focus_by_day: &DayCounts,
    tasks_done_by_day: &DayCounts,
    end: NaiveDate,
    days: usize,
) -> Vec<SeriesPoint> {
    series_for_keys(trailing_day_keys_from(end, days), focus_by_day, tasks_done_by_day)
}

fn series_for_keys(
    keys: Vec<String>,
    focus_by_day: &DayCounts,
    tasks_done_by_day: &DayCounts,
) -> Vec<SeriesPoint> {
    keys.into_iter()
        .map(|key| SeriesPoint {
            label: short_label(&key).to_string(),
            focus_minutes: focus_by_day.get(&key).copied().unwrap_or(0),
            tasks_done: tasks_done_by_day.get(&key).copied().unwrap_or(0),
            day: key,
        })
        .collect()
}

/// Last five characters of a day key
fn short_label(key: &str) -> &str {
    key.get(key.len().saturating_sub(5)..).unwrap_or(key)
}
