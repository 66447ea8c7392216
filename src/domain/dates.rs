use chrono::{DateTime, Days, Local, NaiveDate};

/// Day identifier for a calendar date, always `YYYY-MM-DD`
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Day identifier of a local timestamp (time of day is ignored)
pub fn day_key_at(moment: DateTime<Local>) -> String {
    day_key(moment.date_naive())
}

/// Today's local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today's day identifier
pub fn today_key() -> String {
    day_key_at(Local::now())
}

/// The trailing `n` day keys ending today, oldest first
pub fn trailing_day_keys(n: usize) -> Vec<String> {
    trailing_day_keys_from(today(), n)
}

/// The trailing `n` day keys ending at `end`, oldest first
pub fn trailing_day_keys_from(end: NaiveDate, n: usize) -> Vec<String> {
    (0..n as u64)
        .rev()
        .filter_map(|offset| end.checked_sub_days(Days::new(offset)))
        .map(day_key)
        .collect()
}
