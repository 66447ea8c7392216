use crate::domain::{build_series_from, today, DayCounts, Progress, SeriesPoint, Streak};
use crate::persistence::{files::atomic_write, Store, FOCUS_BY_DAY_KEY, STREAK_KEY, TASKS_DONE_BY_DAY_KEY};
use crate::report::stats::ReportStats;
use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Format minutes as "Xh Ym" or "Xm"
fn format_minutes(total_mins: u32) -> String {
    if total_mins < 60 {
        format!("{}m", total_mins)
    } else {
        let hours = total_mins / 60;
        let mins = total_mins % 60;
        if mins == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, mins)
        }
    }
}

/// Render the markdown report for the trailing `days` ending at `end`
pub fn render_report(progress: &Progress, end: NaiveDate, days: usize) -> String {
    let series: Vec<SeriesPoint> =
        build_series_from(&progress.focus_by_day, &progress.tasks_done_by_day, end, days);
    let stats = ReportStats::from_series(&series);
    let streak = &progress.streak;

    let mut report = String::new();

    report.push_str(&format!("# Progress Report - {} ({} days)\n\n", end, days));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!(
        "- **Focus Time:** {} ({} active of {} days)\n",
        format_minutes(stats.total_focus_minutes),
        stats.active_days,
        stats.days
    ));
    report.push_str(&format!(
        "- **Daily Average:** {:.1} focus minutes\n",
        stats.avg_focus_minutes
    ));
    if let Some((day, minutes)) = &stats.best_day {
        report.push_str(&format!(
            "- **Best Day:** {} ({})\n",
            day,
            format_minutes(*minutes)
        ));
    }
    report.push_str(&format!("- **Tasks Done:** {}\n\n", stats.total_tasks_done));

    // Streak Section
    report.push_str("## Streak\n\n");
    report.push_str(&format!("- **Current:** {} days\n", streak.current));
    report.push_str(&format!("- **Best:** {} days\n", streak.best));
    report.push_str(&format!(
        "- **Last Active Day:** {}\n\n",
        streak.last_active_day.as_deref().unwrap_or("never")
    ));

    // Daily Breakdown Section
    report.push_str("## Daily Breakdown\n\n");
    report.push_str("| Day | Focus | Tasks Done |\n");
    report.push_str("|-----|-------|------------|\n");
    for point in &series {
        report.push_str(&format!(
            "| {} | {} | {} |\n",
            point.day,
            format_minutes(point.focus_minutes),
            point.tasks_done
        ));
    }

    report
}

/// Generate a report from the persisted progress and write it to disk.
/// Defaults to `<data dir>/report-YYYY-MM-DD.md`.
pub fn generate_report(store: &Store, days: usize, output_path: Option<PathBuf>) -> Result<PathBuf> {
    let progress = Progress {
        focus_by_day: store.load(FOCUS_BY_DAY_KEY, DayCounts::new()),
        tasks_done_by_day: store.load(TASKS_DONE_BY_DAY_KEY, DayCounts::new()),
        streak: store.load(STREAK_KEY, Streak::default()).sanitized(),
    };

    let end = today();
    let report = render_report(&progress, end, days);

    let path = match output_path {
        Some(path) => path,
        None => store.dir().join(format!("report-{}.md", end.format("%Y-%m-%d"))),
    };
    atomic_write(&path, &report)?;
    log::info!("Report written to {}", path.display());

    Ok(path)
}
