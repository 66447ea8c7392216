use crate::app::AppState;
use crate::domain::{build_series, SeriesPoint};
use crate::ui::layout::create_progress_layout;
use crate::ui::styles::{
    border_style, default_style, focus_bar_style, label_style, tasks_bar_style, title_style,
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph},
    Frame,
};

/// Render the weekly progress page
pub fn render_progress(f: &mut Frame, app: &AppState, area: Rect) {
    let layout = create_progress_layout(area);
    let series = build_series(&app.progress.focus_by_day, &app.progress.tasks_done_by_day);

    render_streak(f, app, layout.streak_area);
    render_chart(
        f,
        " Focus Minutes (Last 7 days) ",
        &bars(&series, |p| p.focus_minutes),
        focus_bar_style(),
        layout.focus_chart_area,
    );
    render_chart(
        f,
        " Tasks Done (Last 7 days) ",
        &bars(&series, |p| p.tasks_done),
        tasks_bar_style(),
        layout.tasks_chart_area,
    );
}

/// (label, value) pairs for one chart
fn bars(series: &[SeriesPoint], value: impl Fn(&SeriesPoint) -> u32) -> Vec<(&str, u64)> {
    series
        .iter()
        .map(|point| (point.label.as_str(), value(point) as u64))
        .collect()
}

fn render_streak(f: &mut Frame, app: &AppState, area: Rect) {
    let streak = &app.progress.streak;
    let last_active = streak.last_active_day.as_deref().unwrap_or("—");

    let line = Line::from(vec![
        Span::styled("Current streak: ", label_style()),
        Span::styled(format!("{} days", streak.current), default_style()),
        Span::raw("     "),
        Span::styled("Best streak: ", label_style()),
        Span::styled(streak.best.to_string(), default_style()),
        Span::raw("     "),
        Span::styled("Last active day: ", label_style()),
        Span::styled(last_active, default_style()),
    ]);

    let paragraph = Paragraph::new(vec![Line::raw(""), line]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Weekly Progress ", title_style())),
    );
    f.render_widget(paragraph, area);
}

fn render_chart(f: &mut Frame, title: &str, data: &[(&str, u64)], bar_style: Style, area: Rect) {
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        )
        .data(data)
        .bar_width(5)
        .bar_gap(2)
        .bar_style(bar_style)
        .value_style(default_style())
        .label_style(label_style());
    f.render_widget(chart, area);
}
