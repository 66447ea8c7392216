use crate::domain::SeriesPoint;

/// Aggregates over a trailing window of days
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportStats {
    pub days: usize,
    pub total_focus_minutes: u32,
    pub total_tasks_done: u32,
    /// Days with at least one focus minute
    pub active_days: usize,
    pub avg_focus_minutes: f64,
    /// Day key and minutes of the day with the most focus (earliest on ties)
    pub best_day: Option<(String, u32)>,
}

impl ReportStats {
    /// Calculate statistics from a day series
    pub fn from_series(series: &[SeriesPoint]) -> Self {
        if series.is_empty() {
            return Self::default();
        }

        let total_focus_minutes = saturating_total(series.iter().map(|p| p.focus_minutes));
        let total_tasks_done = saturating_total(series.iter().map(|p| p.tasks_done));
        let active_days = series.iter().filter(|p| p.focus_minutes > 0).count();

        let best_day = series
            .iter()
            .filter(|p| p.focus_minutes > 0)
            .fold(None::<&SeriesPoint>, |best, p| match best {
                Some(b) if b.focus_minutes >= p.focus_minutes => Some(b),
                _ => Some(p),
            })
            .map(|p| (p.day.clone(), p.focus_minutes));

        Self {
            days: series.len(),
            total_focus_minutes,
            total_tasks_done,
            active_days,
            avg_focus_minutes: total_focus_minutes as f64 / series.len() as f64,
            best_day,
        }
    }
}

/// Sum that stops at `u32::MAX` instead of overflowing
fn saturating_total(values: impl Iterator<Item = u32>) -> u32 {
    values.fold(0, u32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn point(day: &str, focus: u32, tasks: u32) -> SeriesPoint {
        SeriesPoint {
            day: day.to_string(),
            label: day[5..].to_string(),
            focus_minutes: focus,
            tasks_done: tasks,
        }
    }

    #[test]
    fn test_empty_stats() {
        let stats = ReportStats::from_series(&[]);
        assert_eq!(stats, ReportStats::default());
    }

    #[test]
    fn test_stats_calculation() {
        let series = vec![
            point("2024-05-01", 0, 1),
            point("2024-05-02", 50, 2),
            point("2024-05-03", 25, 0),
            point("2024-05-04", 50, 3),
        ];

        let stats = ReportStats::from_series(&series);
        assert_eq!(stats.days, 4);
        assert_eq!(stats.total_focus_minutes, 125);
        assert_eq!(stats.total_tasks_done, 6);
        assert_eq!(stats.active_days, 3);
        assert_eq!(stats.avg_focus_minutes, 31.25);
        assert_eq!(stats.best_day, Some(("2024-05-02".to_string(), 50)));
    }

    #[test]
    fn test_no_focus_means_no_best_day() {
        let stats = ReportStats::from_series(&[point("2024-05-01", 0, 4)]);
        assert_eq!(stats.best_day, None);
        assert_eq!(stats.active_days, 0);
    }

    #[test]
    fn test_totals_saturate() {
        let series = vec![point("2024-05-01", u32::MAX, u32::MAX), point("2024-05-02", 10, 1)];

        let stats = ReportStats::from_series(&series);
        assert_eq!(stats.total_focus_minutes, u32::MAX);
        assert_eq!(stats.total_tasks_done, u32::MAX);
        assert_eq!(stats.best_day, Some(("2024-05-01".to_string(), u32::MAX)));
    }
}
