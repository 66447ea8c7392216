use crate::domain::{
    today, Page, Progress, SessionEngine, SessionEvent, Settings, Streak, TaskList, UiMode,
};
use crate::notifications;
use crate::persistence::{
    Store, FOCUS_BY_DAY_KEY, SETTINGS_KEY, STREAK_KEY, TASKS_DONE_BY_DAY_KEY, TASKS_KEY,
};
use crate::ticker::SecondTicker;
use anyhow::Result;
use chrono::NaiveDate;
use std::time::Instant;

/// Which persisted keys have unsaved changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtyKeys {
    pub settings: bool,
    pub tasks: bool,
    pub progress: bool,
}

impl DirtyKeys {
    pub fn any(&self) -> bool {
        self.settings || self.tasks || self.progress
    }
}

/// Main application state
pub struct AppState {
    pub store: Store,
    pub settings: Settings,
    pub engine: SessionEngine,
    pub tasks: TaskList,
    pub progress: Progress,
    pub ticker: SecondTicker,
    pub page: Page,
    pub ui_mode: UiMode,
    pub focus_input: String,
    pub break_input: String,
    pub task_input: String,
    pub selected_task: usize,
    pub dirty: DirtyKeys,
    pub notifications_enabled: bool,
}

impl AppState {
    /// Load every persisted key from `store` and build a paused Focus session
    pub fn new(store: Store) -> Self {
        let settings = store.load(SETTINGS_KEY, Settings::default()).sanitized();
        let tasks = store.load(TASKS_KEY, TaskList::default());
        let progress = Progress {
            focus_by_day: store.load(FOCUS_BY_DAY_KEY, Default::default()),
            tasks_done_by_day: store.load(TASKS_DONE_BY_DAY_KEY, Default::default()),
            streak: store.load(STREAK_KEY, Streak::default()).sanitized(),
        };

        let mut app = Self {
            store,
            engine: SessionEngine::new(&settings),
            focus_input: settings.focus_minutes.to_string(),
            break_input: settings.break_minutes.to_string(),
            settings,
            tasks,
            progress,
            ticker: SecondTicker::new(),
            page: Page::Dashboard,
            ui_mode: UiMode::Normal,
            task_input: String::new(),
            selected_task: 0,
            dirty: DirtyKeys::default(),
            notifications_enabled: true,
        };

        // Today's snapshot reflects the loaded list from the start
        app.refresh_tasks_done();
        app
    }

    // ---- Timer controls ----

    pub fn start_timer(&mut self) {
        self.engine.start();
        self.sync_ticker(Instant::now());
    }

    pub fn pause_timer(&mut self) {
        self.engine.pause();
        self.sync_ticker(Instant::now());
    }

    pub fn toggle_timer(&mut self) {
        self.engine.toggle();
        self.sync_ticker(Instant::now());
    }

    pub fn reset_timer(&mut self) {
        self.engine.reset(&self.settings);
        self.sync_ticker(Instant::now());
    }

    pub fn set_focus_mode(&mut self) {
        self.engine.set_focus_mode(&self.settings);
        self.sync_ticker(Instant::now());
    }

    pub fn set_break_mode(&mut self) {
        self.engine.set_break_mode(&self.settings);
        self.sync_ticker(Instant::now());
    }

    /// Arm the ticker when the engine runs, release it when it doesn't
    fn sync_ticker(&mut self, now: Instant) {
        if self.engine.is_running() {
            if !self.ticker.is_armed() {
                self.ticker.start(now);
            }
        } else {
            self.ticker.stop();
        }
    }

    /// Drive the engine from the event loop; ticks at most once per call
    pub fn advance_timer(&mut self, now: Instant) {
        self.advance_timer_on(now, today());
    }

    /// Events and progress of one tick share the same `today`
    fn advance_timer_on(&mut self, now: Instant, today: NaiveDate) {
        self.sync_ticker(now);
        if !self.ticker.fire(now) {
            return;
        }

        let outcome = self.engine.tick(&self.settings, today);
        if !outcome.is_empty() {
            self.handle_session_events(&outcome.events, today);
        }
    }

    fn handle_session_events(&mut self, events: &[SessionEvent], today: NaiveDate) {
        for event in events {
            if let SessionEvent::SessionEnded { ended_mode, day_key } = event {
                log::info!("{} session ended on {}", ended_mode.name(), day_key);
                if self.notifications_enabled {
                    notifications::notify_session_ended(*ended_mode);
                }
            }
            if self.progress.apply(event, today) {
                self.dirty.progress = true;
            }
        }
    }

    // ---- Settings ----

    /// Put the cursor in the focus (or break) minutes field
    pub fn begin_edit_settings(&mut self, focus_field: bool) {
        self.ui_mode = if focus_field {
            UiMode::EditingFocus
        } else {
            UiMode::EditingBreak
        };
    }

    /// Commit the field being edited and leave edit mode
    pub fn commit_settings_input(&mut self) {
        self.commit_current_field();
        self.ui_mode = UiMode::Normal;
    }

    /// Commit the field being edited and move the cursor to the other one
    pub fn switch_settings_field(&mut self) {
        self.commit_current_field();
        self.ui_mode = match self.ui_mode {
            UiMode::EditingFocus => UiMode::EditingBreak,
            _ => UiMode::EditingFocus,
        };
    }

    /// Leave edit mode, discarding uncommitted text
    pub fn cancel_settings_input(&mut self) {
        self.focus_input = self.settings.focus_minutes.to_string();
        self.break_input = self.settings.break_minutes.to_string();
        self.ui_mode = UiMode::Normal;
    }

    fn commit_current_field(&mut self) {
        let before = self.settings;
        match self.ui_mode {
            UiMode::EditingFocus => self.settings.commit_focus(&self.focus_input),
            UiMode::EditingBreak => self.settings.commit_break(&self.break_input),
            _ => return,
        }
        // Inputs always show the committed values afterwards
        self.focus_input = self.settings.focus_minutes.to_string();
        self.break_input = self.settings.break_minutes.to_string();
        if self.settings != before {
            log::info!(
                "Settings committed: focus {}m, break {}m",
                self.settings.focus_minutes,
                self.settings.break_minutes
            );
            self.dirty.settings = true;
        }
    }

    fn settings_input_mut(&mut self) -> Option<&mut String> {
        match self.ui_mode {
            UiMode::EditingFocus => Some(&mut self.focus_input),
            UiMode::EditingBreak => Some(&mut self.break_input),
            _ => None,
        }
    }

    pub fn settings_input_add_char(&mut self, c: char) {
        if let Some(input) = self.settings_input_mut() {
            input.push(c);
        }
    }

    pub fn settings_input_backspace(&mut self) {
        if let Some(input) = self.settings_input_mut() {
            input.pop();
        }
    }

    // ---- Tasks ----

    pub fn start_add_task(&mut self) {
        self.page = Page::Tasks;
        self.task_input.clear();
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn cancel_add_task(&mut self) {
        self.task_input.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Add the typed task; the field stays open and is cleared on success
    pub fn submit_task_input(&mut self) {
        if self.tasks.add_task(&self.task_input).is_some() {
            self.task_input.clear();
            self.selected_task = 0;
            self.after_task_change();
        }
    }

    pub fn task_input_add_char(&mut self, c: char) {
        self.task_input.push(c);
    }

    pub fn task_input_backspace(&mut self) {
        self.task_input.pop();
    }

    pub fn move_selection_up(&mut self) {
        self.selected_task = self.selected_task.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_task + 1 < self.tasks.len() {
            self.selected_task += 1;
        }
    }

    pub fn toggle_selected_task(&mut self) {
        let Some(id) = self.tasks.get(self.selected_task).map(|t| t.id) else {
            return;
        };
        if self.tasks.toggle_task(id) {
            self.after_task_change();
        }
    }

    pub fn remove_selected_task(&mut self) {
        let Some(id) = self.tasks.get(self.selected_task).map(|t| t.id) else {
            return;
        };
        if self.tasks.remove_task(id) {
            if self.selected_task >= self.tasks.len() {
                self.selected_task = self.tasks.len().saturating_sub(1);
            }
            self.after_task_change();
        }
    }

    fn after_task_change(&mut self) {
        self.dirty.tasks = true;
        self.refresh_tasks_done();
    }

    /// Write the live completed count into today's tasks-done entry
    fn refresh_tasks_done(&mut self) {
        if self
            .progress
            .record_tasks_done(today(), self.tasks.completed_count())
        {
            self.dirty.progress = true;
        }
    }

    // ---- Navigation ----

    pub fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    pub fn next_page(&mut self) {
        self.page = self.page.next();
    }

    // ---- Persistence ----

    /// Write every dirty key. Keys are written independently: a failed key
    /// stays dirty and the others are still saved. Returns the first error.
    pub fn save(&mut self) -> Result<()> {
        let mut first_error = None;

        if self.dirty.settings {
            let result = self.store.save(SETTINGS_KEY, &self.settings);
            self.dirty.settings = !record_save(SETTINGS_KEY, result, &mut first_error);
        }
        if self.dirty.tasks {
            let result = self.store.save(TASKS_KEY, &self.tasks);
            self.dirty.tasks = !record_save(TASKS_KEY, result, &mut first_error);
        }
        if self.dirty.progress {
            let focus = self.store.save(FOCUS_BY_DAY_KEY, &self.progress.focus_by_day);
            let tasks_done = self
                .store
                .save(TASKS_DONE_BY_DAY_KEY, &self.progress.tasks_done_by_day);
            let streak = self.store.save(STREAK_KEY, &self.progress.streak);

            let saved = [
                record_save(FOCUS_BY_DAY_KEY, focus, &mut first_error),
                record_save(TASKS_DONE_BY_DAY_KEY, tasks_done, &mut first_error),
                record_save(STREAK_KEY, streak, &mut first_error),
            ];
            self.dirty.progress = !saved.iter().all(|ok| *ok);
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Log a failed write and keep the first error. Returns whether `key` was written.
fn record_save(key: &str, result: Result<()>, first_error: &mut Option<anyhow::Error>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to save {}: {:#}", key, e);
            first_error.get_or_insert(e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{today_key, SessionMode};
    use std::fs;
    use std::time::Duration;
    use tempfile::{tempdir, TempDir};

    fn test_app() -> (AppState, TempDir) {
        let temp_dir = tempdir().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        let mut app = AppState::new(store);
        app.notifications_enabled = false;
        (app, temp_dir)
    }

    fn quick_settings(app: &mut AppState) {
        app.settings = Settings {
            focus_minutes: 1,
            break_minutes: 1,
        };
        app.reset_timer();
    }

    /// Feed `seconds` one-second ticks through the ticker
    fn run_for(app: &mut AppState, start: Instant, seconds: u64) {
        for s in 1..=seconds {
            app.advance_timer(start + Duration::from_secs(s));
        }
    }

    #[test]
    fn test_new_app_defaults() {
        let (app, _dir) = test_app();
        assert_eq!(app.settings, Settings::default());
        assert_eq!(app.engine.seconds_remaining(), 1500);
        assert!(!app.engine.is_running());
        assert!(app.tasks.is_empty());
        assert_eq!(app.focus_input, "25");
    }

    #[test]
    fn test_paused_timer_does_not_tick() {
        let (mut app, _dir) = test_app();
        let start = Instant::now();
        run_for(&mut app, start, 10);
        assert_eq!(app.engine.seconds_remaining(), 1500);
        assert!(!app.ticker.is_armed());
    }

    #[test]
    fn test_focus_rollover_updates_progress() {
        let (mut app, _dir) = test_app();
        quick_settings(&mut app);
        app.start_timer();
        let start = Instant::now();

        run_for(&mut app, start, 60);

        let key = today_key();
        assert_eq!(app.engine.mode(), SessionMode::Break);
        assert!(app.engine.is_running());
        assert_eq!(app.progress.focus_minutes_on(&key), 1);
        assert_eq!(app.progress.streak.current, 1);
        assert_eq!(app.progress.streak.last_active_day.as_deref(), Some(key.as_str()));
        assert!(app.dirty.progress);
    }

    #[test]
    fn test_pause_releases_ticker() {
        let (mut app, _dir) = test_app();
        app.start_timer();
        assert!(app.ticker.is_armed());

        app.pause_timer();
        assert!(!app.ticker.is_armed());
        let remaining = app.engine.seconds_remaining();
        run_for(&mut app, Instant::now(), 5);
        assert_eq!(app.engine.seconds_remaining(), remaining);
    }

    #[test]
    fn test_settings_commit_flow() {
        let (mut app, _dir) = test_app();

        app.begin_edit_settings(true);
        app.focus_input = "9999".to_string();
        app.switch_settings_field();
        assert_eq!(app.settings.focus_minutes, 180);
        assert_eq!(app.ui_mode, UiMode::EditingBreak);

        app.break_input = "abc".to_string();
        app.commit_settings_input();
        assert_eq!(app.settings.break_minutes, 5);
        assert_eq!(app.break_input, "5");
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.dirty.settings);

        // Current countdown keeps its length until reset
        assert_eq!(app.engine.seconds_remaining(), 1500);
        app.reset_timer();
        assert_eq!(app.engine.seconds_remaining(), 180 * 60);
    }

    #[test]
    fn test_cancel_settings_discards_text() {
        let (mut app, _dir) = test_app();
        app.begin_edit_settings(false);
        app.settings_input_add_char('9');
        app.cancel_settings_input();
        assert_eq!(app.break_input, "5");
        assert_eq!(app.settings.break_minutes, 5);
        assert!(!app.dirty.settings);
    }

    #[test]
    fn test_task_changes_snapshot_today() {
        let (mut app, _dir) = test_app();
        let key = today_key();

        app.start_add_task();
        for c in "A".chars() {
            app.task_input_add_char(c);
        }
        app.submit_task_input();
        app.task_input = "B".to_string();
        app.submit_task_input();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.task_input.is_empty());

        // "B" is first; select "A"
        app.move_selection_down();
        app.toggle_selected_task();
        assert_eq!(app.tasks.completed_count(), 1);
        assert_eq!(app.tasks.completion_percent(), 50);
        assert_eq!(app.progress.tasks_done_on(&key), 1);

        app.toggle_selected_task();
        app.toggle_selected_task();
        assert_eq!(app.progress.tasks_done_on(&key), 1);

        app.remove_selected_task();
        assert_eq!(app.progress.tasks_done_on(&key), 0);
        assert_eq!(app.selected_task, 0);
    }

    #[test]
    fn test_blank_task_submission_ignored() {
        let (mut app, _dir) = test_app();
        app.start_add_task();
        app.task_input = "   ".to_string();
        app.submit_task_input();
        assert!(app.tasks.is_empty());
        assert!(!app.dirty.tasks);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = tempdir().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        let mut app = AppState::new(store.clone());
        app.notifications_enabled = false;

        app.tasks.add_task("Persist me");
        app.dirty.tasks = true;
        app.begin_edit_settings(true);
        app.focus_input = "50".to_string();
        app.commit_settings_input();
        quick_settings(&mut app);
        app.start_timer();
        run_for(&mut app, Instant::now(), 60);
        app.save().unwrap();
        assert!(!app.dirty.any());

        let reloaded = AppState::new(store);
        assert_eq!(reloaded.tasks.len(), 1);
        assert_eq!(reloaded.settings.focus_minutes, 1);
        assert_eq!(reloaded.progress.streak.current, 1);
        assert_eq!(reloaded.progress.focus_minutes_on(&today_key()), 1);
        assert!(!reloaded.engine.is_running());
    }

    #[test]
    fn test_rollover_credits_the_tick_day() {
        let (mut app, _dir) = test_app();
        quick_settings(&mut app);
        app.start_timer();
        let start = Instant::now();
        let day = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

        for s in 1..=60 {
            app.advance_timer_on(start + Duration::from_secs(s), day);
        }

        assert_eq!(app.progress.focus_minutes_on("2024-05-10"), 1);
        assert_eq!(
            app.progress.streak.last_active_day.as_deref(),
            Some("2024-05-10")
        );
    }

    #[test]
    fn test_failed_key_does_not_block_others() {
        let temp_dir = tempdir().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        let mut app = AppState::new(store);
        app.notifications_enabled = false;

        // A non-empty directory where settings.json should go cannot be replaced
        let blocked = temp_dir.path().join("settings.json");
        fs::create_dir(&blocked).unwrap();
        fs::write(blocked.join("keep"), "x").unwrap();

        app.settings.focus_minutes = 40;
        app.dirty.settings = true;
        app.tasks.add_task("Still saved");
        app.dirty.tasks = true;
        app.dirty.progress = true;

        assert!(app.save().is_err());
        assert!(app.dirty.settings);
        assert!(!app.dirty.tasks);
        assert!(!app.dirty.progress);
        assert!(temp_dir.path().join("tasks.json").is_file());
        assert!(temp_dir.path().join("streak.json").is_file());

        // Once the path is free the retry writes the remaining key
        fs::remove_dir_all(&blocked).unwrap();
        app.save().unwrap();
        assert!(!app.dirty.any());
        assert!(blocked.is_file());
    }
}
