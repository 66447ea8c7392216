use crate::domain::{Page, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hint text for the current page and input mode
pub fn hints(page: Page, ui_mode: UiMode) -> Vec<&'static str> {
    match ui_mode {
        UiMode::EditingFocus | UiMode::EditingBreak => {
            return vec![" Enter save   ", "Tab other field   ", "Esc cancel"];
        }
        UiMode::AddingTask => return vec![" Enter add   ", "Esc close"],
        UiMode::Normal => {}
    }

    let mut spans = vec![" Space start/pause   ", "Tab/1-3 pages   "];
    match page {
        Page::Dashboard => spans.extend([
            "s start   ",
            "p pause   ",
            "r reset   ",
            "f focus   ",
            "b break   ",
            "e/E edit minutes   ",
        ]),
        Page::Tasks => spans.extend([
            "a add   ",
            "↑/↓ select   ",
            "Enter/x done   ",
            "d delete   ",
        ]),
        Page::Progress => {}
    }
    spans.push("q quit");
    spans
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, page: Page, ui_mode: UiMode, area: Rect) {
    let line = Line::from(
        hints(page, ui_mode)
            .into_iter()
            .map(Span::raw)
            .collect::<Vec<_>>(),
    );

    let paragraph = Paragraph::new(line).style(hint_style());
    f.render_widget(paragraph, area);
}
