pub mod files;
pub mod store;

pub use files::{ensure_sprint_dir, init_local_sprint};
pub use store::{
    Store, FOCUS_BY_DAY_KEY, SETTINGS_KEY, STREAK_KEY, TASKS_DONE_BY_DAY_KEY, TASKS_KEY,
};
