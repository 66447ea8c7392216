pub mod dates;
pub mod enums;
pub mod progress;
pub mod series;
pub mod session;
pub mod settings;
pub mod task;

pub use dates::{today, today_key};
pub use enums::{Page, SessionMode, UiMode};
pub use progress::{DayCounts, Progress, Streak};
pub use series::{build_series, build_series_from, SeriesPoint};
pub use session::{format_clock, SessionEngine, SessionEvent};
pub use settings::Settings;
pub use task::{Task, TaskList};
