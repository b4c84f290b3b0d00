pub mod signal_log;
pub mod timestamp;
pub mod types;

pub use signal_log::SignalLog;
pub use timestamp::to_seconds;
pub use types::{LogRecord, ParsedLog};
