pub mod daily_log;

pub use daily_log::{DEFAULT_LOG_FILE, DailyLog, TodayEntry};
