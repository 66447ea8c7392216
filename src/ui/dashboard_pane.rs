use crate::app::AppState;
use crate::domain::{format_clock, today_key, UiMode};
use crate::ui::layout::create_dashboard_layout;
use crate::ui::styles::{
    border_style, default_style, editing_style, gauge_style, label_style, paused_style,
    running_style, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

fn pane_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(format!(" {} ", title), title_style()))
}

/// Render the dashboard page
pub fn render_dashboard(f: &mut Frame, app: &AppState, area: Rect) {
    let layout = create_dashboard_layout(area);
    render_timer(f, app, layout.timer_area);
    render_overview(f, app, layout.overview_area);
    render_settings(f, app, layout.settings_area);
    render_today(f, app, layout.today_area);
}

/// Countdown card: mode, clock, run state and a progress gauge
fn render_timer(f: &mut Frame, app: &AppState, area: Rect) {
    let block = pane_block("Pomodoro Timer");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let (status, status_style) = if app.engine.is_running() {
        ("RUNNING", running_style())
    } else {
        ("PAUSED", paused_style())
    };

    let lines = vec![
        Line::raw(""),
        Line::styled(app.engine.mode().name(), label_style()),
        Line::raw(""),
        Line::styled(format_clock(app.engine.seconds_remaining()), title_style()),
        Line::raw(""),
        Line::styled(status, status_style),
        Line::raw(""),
        Line::styled("Press Space to start/pause", label_style()),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        rows[0],
    );

    let ratio = app.engine.progress_ratio(&app.settings);
    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0));
    f.render_widget(gauge, rows[1]);
}

fn stat_spans(label: &str, value: String) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("{}: ", label), label_style()),
        Span::styled(value, default_style()),
        Span::raw("   "),
    ]
}

/// Today's overview: task totals, completion and streak
fn render_overview(f: &mut Frame, app: &AppState, area: Rect) {
    let streak = &app.progress.streak;

    let mut first = stat_spans("Tasks total", app.tasks.len().to_string());
    first.extend(stat_spans("Tasks done", app.tasks.completed_count().to_string()));
    first.extend(stat_spans(
        "Completion",
        format!("{}%", app.tasks.completion_percent()),
    ));

    let mut second = stat_spans("Streak", format!("{} days", streak.current));
    second.extend(stat_spans("Best", streak.best.to_string()));

    let lines = vec![Line::raw(""), Line::from(first), Line::from(second)];
    f.render_widget(
        Paragraph::new(lines).block(pane_block("Today's Overview")),
        area,
    );
}

fn settings_line<'a>(label: &'a str, value: &'a str, editing: bool) -> Line<'a> {
    let mut spans = vec![
        Span::styled(format!("{:<7}", label), label_style()),
        Span::raw("> "),
    ];
    if editing {
        spans.push(Span::styled(value, editing_style()));
        spans.push(Span::styled("█", editing_style()));
    } else {
        spans.push(Span::styled(value, default_style()));
    }
    spans.push(Span::styled(" min", label_style()));
    Line::from(spans)
}

/// Editable focus/break minutes
fn render_settings(f: &mut Frame, app: &AppState, area: Rect) {
    let lines = vec![
        Line::raw(""),
        settings_line(
            "Focus",
            &app.focus_input,
            app.ui_mode == UiMode::EditingFocus,
        ),
        Line::raw(""),
        settings_line(
            "Break",
            &app.break_input,
            app.ui_mode == UiMode::EditingBreak,
        ),
        Line::raw(""),
        Line::styled("e/E to edit, Enter to save", label_style()),
    ];
    f.render_widget(
        Paragraph::new(lines).block(pane_block("Pomodoro Settings")),
        area,
    );
}

/// Focus minutes and tasks done recorded for today
fn render_today(f: &mut Frame, app: &AppState, area: Rect) {
    let key = today_key();
    let lines = vec![
        Line::raw(""),
        Line::from(stat_spans(
            "Focus minutes",
            app.progress.focus_minutes_on(&key).to_string(),
        )),
        Line::from(stat_spans(
            "Tasks done",
            app.progress.tasks_done_on(&key).to_string(),
        )),
        Line::raw(""),
        Line::styled(
            "Finish one focus session today to keep your streak.",
            label_style(),
        ),
    ];
    f.render_widget(
        Paragraph::new(lines).block(pane_block("Progress Today")),
        area,
    );
}
