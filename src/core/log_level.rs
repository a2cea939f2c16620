//! Built-in log level names

pub const ERROR: &str = "ERROR";
pub const WARN: &str = "WARN";
pub const INFO: &str = "INFO";
pub const DEBUG: &str = "DEBUG";
pub const TRACE: &str = "TRACE";

/// Threshold used when none is configured or the configured one is unknown.
///
/// This is a fixed name, not the ladder's positional equivalent: a custom ladder
/// still falls back to `"INFO"`.
pub const DEFAULT_THRESHOLD: &str = INFO;

/// Color used for levels added through ladder insertion
pub const CUSTOM_LEVEL_COLOR: colored::Color = colored::Color::Magenta;

/// Number of built-in levels
pub const BUILTIN_LEVELS: usize = 5;

/// The built-in levels, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Default ladder order, highest priority first
    pub const ALL: [LogLevel; BUILTIN_LEVELS] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Error => ERROR,
            LogLevel::Warn => WARN,
            LogLevel::Info => INFO,
            LogLevel::Debug => DEBUG,
            LogLevel::Trace => TRACE,
        }
    }

    /// Exact, case-sensitive lookup of a built-in level by its ladder name
    pub fn from_name(name: &str) -> Option<Self> {
        LogLevel::ALL.into_iter().find(|level| level.to_str() == name)
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Error => Red,
            LogLevel::Warn => Yellow,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
            LogLevel::Trace => BrightBlack,
        }
    }
}

/// Palette entry for any ladder name; custom levels share one color.
pub fn color_for(name: &str) -> colored::Color {
    LogLevel::from_name(name)
        .map(|level| level.color_code())
        .unwrap_or(CUSTOM_LEVEL_COLOR)
}

const COLOR_RESET: &str = "\x1b[0m";

/// Render the `LEVEL: ` tag, wrapping `LEVEL:` in `color` when one is given.
///
/// Escapes are written directly: `Colorize` consults colored's global terminal
/// detection and would drop them under [`ColorMode::Always`](crate::ColorMode::Always).
pub fn severity_tag(level: &str, color: Option<colored::Color>) -> String {
    match color {
        Some(color) => format!("\x1b[{}m{}:{} ", color.to_fg_str(), level, COLOR_RESET),
        None => format!("{}: ", level),
    }
}
