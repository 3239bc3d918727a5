use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Debug,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level == LogLevel::Info || self.verbose
    }

    fn format_line(&self, timestamp: &str, level: LogLevel, file: &str, line: u32, message: &str) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}][{}:{}] {}", timestamp, prefix, level.tag(), file_name, line, message)
        } else {
            format!("[{}][{}][{}:{}] {}", timestamp, level.tag(), file_name, line, message)
        }
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        if !self.is_enabled(level) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        eprintln!("{}", self.format_line(&timestamp, level, file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

/// Debug lines are skipped without formatting when this is false.
pub fn debug_enabled() -> bool {
    LOGGER
        .get()
        .is_some_and(|logger| logger.is_enabled(LogLevel::Debug))
}

pub fn log(level: LogLevel, file: &str, line: u32, message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.log(level, file, line, message),
        None if level == LogLevel::Info => {
            eprintln!("Logger not initialized! Call init_logger() first.");
        }
        None => {}
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::log($crate::logger::LogLevel::Debug, file!(), line!(), &format!($($arg)*))
        }
    };
}
