use crate::app::AppState;
use crate::domain::{Page, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Key that starts/pauses the timer from any page
pub const TOGGLE_TIMER_KEY: KeyCode = KeyCode::Char(' ');

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Space is plain text while a field has the cursor
    if key.code == TOGGLE_TIMER_KEY && !app.ui_mode.is_text_entry() {
        app.toggle_timer();
        return Ok(false);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::EditingFocus | UiMode::EditingBreak => handle_settings_input_mode(app, key),
        UiMode::AddingTask => handle_task_input_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),

        // Page navigation
        KeyCode::Tab => app.next_page(),
        KeyCode::Char('1') => app.set_page(Page::Dashboard),
        KeyCode::Char('2') => app.set_page(Page::Tasks),
        KeyCode::Char('3') => app.set_page(Page::Progress),

        _ => match app.page {
            Page::Dashboard => handle_dashboard_key(app, key),
            Page::Tasks => handle_tasks_key(app, key),
            Page::Progress => {}
        },
    }
    Ok(false)
}

fn handle_dashboard_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('s') => app.start_timer(),
        KeyCode::Char('p') => app.pause_timer(),
        KeyCode::Char('r') => app.reset_timer(),
        KeyCode::Char('f') => app.set_focus_mode(),
        KeyCode::Char('b') => app.set_break_mode(),
        KeyCode::Char('e') => app.begin_edit_settings(true),
        KeyCode::Char('E') => app.begin_edit_settings(false),
        _ => {}
    }
}

fn handle_tasks_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Enter | KeyCode::Char('x') => app.toggle_selected_task(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected_task(),
        _ => {}
    }
}

/// Handle keys while a settings field is being edited
fn handle_settings_input_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.commit_settings_input(),
        KeyCode::Tab => app.switch_settings_field(),
        KeyCode::Esc => app.cancel_settings_input(),
        KeyCode::Backspace => app.settings_input_backspace(),
        KeyCode::Char(c) => app.settings_input_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the add-task field
fn handle_task_input_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_task_input(),
        KeyCode::Esc => app.cancel_add_task(),
        KeyCode::Backspace => app.task_input_backspace(),
        KeyCode::Char(c) => app.task_input_add_char(c),
        _ => {}
    }
    Ok(false)
}
