use crate::domain::settings::Settings;
use serde::{Deserialize, Serialize};

/// Countdown mode of the session engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMode {
    Focus,
    Break,
}

impl SessionMode {
    /// Display name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Break => "Break",
        }
    }

    /// The mode a rollover switches to
    pub fn other(&self) -> Self {
        match self {
            Self::Focus => Self::Break,
            Self::Break => Self::Focus,
        }
    }

    /// Full countdown length of this mode in seconds, from the given settings
    pub fn duration_secs(&self, settings: &Settings) -> u32 {
        match self {
            Self::Focus => settings.focus_minutes * 60,
            Self::Break => settings.break_minutes * 60,
        }
    }
}

/// Top-level page shown in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Tasks,
    Progress,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Tasks => "Tasks",
            Self::Progress => "Progress",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Tasks => 1,
            Self::Progress => 2,
        }
    }

    /// Next page in tab order (wraps)
    pub fn next(&self) -> Self {
        match self {
            Self::Dashboard => Self::Tasks,
            Self::Tasks => Self::Progress,
            Self::Progress => Self::Dashboard,
        }
    }

    pub fn all() -> &'static [Page] {
        &[Page::Dashboard, Page::Tasks, Page::Progress]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    EditingFocus, // Focus minutes field has the cursor
    EditingBreak, // Break minutes field has the cursor
    AddingTask,
}

impl UiMode {
    /// Whether a text-entry field currently owns the keyboard
    pub fn is_text_entry(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}
