use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    fn format(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}] {}", timestamp, prefix, message)
        } else {
            format!("[{}] {}", timestamp, message)
        }
    }

    // stderr keeps log lines out of the board drawn on stdout
    pub fn log(&self, message: &str) {
        eprintln!("{}", self.format(message));
    }

    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.log(message);
        }
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

pub fn debug(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.debug(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::debug(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_prefix() {
        let logger = Logger::new(Some("Game".to_string()), false);
        let line = logger.format("hello");
        assert!(line.starts_with('['));
        assert!(line.ends_with("][Game] hello"));
    }

    #[test]
    fn test_format_without_prefix() {
        let logger = Logger::new(None, true);
        let line = logger.format("hello");
        assert!(line.ends_with("] hello"));
        assert!(!line.contains("]["));
    }
}
