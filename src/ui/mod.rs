pub mod dashboard_pane;
pub mod keybindings;
pub mod layout;
pub mod progress_pane;
pub mod styles;
pub mod tasks_pane;

use crate::app::AppState;
use crate::domain::Page;
use dashboard_pane::render_dashboard;
use keybindings::render_keybindings;
use layout::create_layout;
use progress_pane::render_progress;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::Tabs,
    Frame,
};
use styles::{hint_style, selected_style};
use tasks_pane::render_tasks;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_tabs(f, app.page, layout.tabs_area);

    match app.page {
        Page::Dashboard => render_dashboard(f, app, layout.content_area),
        Page::Tasks => render_tasks(f, app, layout.content_area),
        Page::Progress => render_progress(f, app, layout.content_area),
    }

    render_keybindings(f, app.page, app.ui_mode, layout.keybindings_area);
}

/// Page selector bar
fn render_tabs(f: &mut Frame, page: Page, area: Rect) {
    let titles: Vec<Line> = Page::all()
        .iter()
        .enumerate()
        .map(|(i, p)| Line::raw(format!("{} {}", i + 1, p.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(page.index())
        .style(hint_style())
        .highlight_style(selected_style());
    f.render_widget(tabs, area);
}
