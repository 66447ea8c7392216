use crate::app::AppState;
use crate::domain::{Task, UiMode};
use crate::ui::styles::{
    border_style, default_style, done_style, editing_style, label_style, selected_style,
    title_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Create a checkbox line for a task
fn create_task_line(task: &Task) -> Line<'_> {
    let (checkbox, style) = if task.done {
        ("[x] ", done_style())
    } else {
        ("[ ] ", default_style())
    };
    Line::from(vec![
        Span::styled(checkbox, label_style()),
        Span::styled(task.title.as_str(), style),
    ])
}

/// Render the tasks page: input field, totals and the task list
pub fn render_tasks(f: &mut Frame, app: &AppState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_input(f, app, rows[0]);
    render_list(f, app, rows[1]);
}

fn render_input(f: &mut Frame, app: &AppState, area: Rect) {
    let adding = app.ui_mode == UiMode::AddingTask;
    let line = if adding {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.task_input.as_str(), editing_style()),
            Span::styled("█", editing_style()), // Cursor
        ])
    } else {
        Line::styled("Press 'a' to add a task…", label_style())
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if adding { editing_style() } else { border_style() })
            .title(Span::styled(" Add Task ", title_style())),
    );
    f.render_widget(paragraph, area);
}

fn render_list(f: &mut Frame, app: &AppState, area: Rect) {
    let title = format!(
        " Tasks  Total: {} · Done: {} ",
        app.tasks.len(),
        app.tasks.completed_count()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if app.tasks.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No tasks yet. Add your first one above.",
            label_style(),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .map(|task| ListItem::new(create_task_line(task)))
        .collect();

    let mut state = ListState::default();
    if app.ui_mode == UiMode::Normal {
        state.select(Some(app.selected_task));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(selected_style());
    f.render_stateful_widget(list, area, &mut state);
}
