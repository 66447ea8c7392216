use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub tabs_area: Rect,
    pub content_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top bar: page tabs (1 row)
/// - Middle: the active page
/// - Bottom bar: keybindings (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Min(0),    // Page content
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    MainLayout {
        tabs_area: chunks[0],
        content_area: chunks[1],
        keybindings_area: chunks[2],
    }
}

/// Dashboard areas
pub struct DashboardLayout {
    pub timer_area: Rect,
    pub overview_area: Rect,
    pub settings_area: Rect,
    pub today_area: Rect,
}

/// Split the dashboard: timer (40%) | overview above settings + today's progress (60%)
pub fn create_dashboard_layout(area: Rect) -> DashboardLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(columns[1]);

    let bottom_right = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(right[1]);

    DashboardLayout {
        timer_area: columns[0],
        overview_area: right[0],
        settings_area: bottom_right[0],
        today_area: bottom_right[1],
    }
}

/// Progress page areas
pub struct ProgressLayout {
    pub streak_area: Rect,
    pub focus_chart_area: Rect,
    pub tasks_chart_area: Rect,
}

/// Streak summary row above two side-by-side charts
pub fn create_progress_layout(area: Rect) -> ProgressLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    ProgressLayout {
        streak_area: rows[0],
        focus_chart_area: charts[0],
        tasks_chart_area: charts[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.tabs_area.height, 1);
        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.content_area.height, 48);
    }

    #[test]
    fn test_create_dashboard_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_dashboard_layout(area);

        assert_eq!(layout.timer_area.width, 40);
        assert_eq!(layout.overview_area.height, 6);
        assert!(layout.settings_area.height > 0);
        assert_eq!(layout.settings_area.y, layout.today_area.y);
    }

    #[test]
    fn test_create_progress_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_progress_layout(area);

        assert_eq!(layout.streak_area.height, 5);
        assert_eq!(layout.focus_chart_area.height, 35);
        assert_eq!(layout.focus_chart_area.width, 50);
    }
}
