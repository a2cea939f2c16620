//! Line format configuration
//!
//! [`FormatOptions`] holds every toggle that shapes a rendered line. It can be
//! built in code through the builder or loaded from JSON.

use super::error::Result;
use super::timestamp::TimestampFormat;
use crate::sinks::ConsoleSink;
use serde::{Deserialize, Serialize};

/// When to emit ANSI color codes around the severity tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when writing solely to the default console, that console is
    /// a terminal, and colored's control allows it (`NO_COLOR`, `CLICOLOR`)
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Decide once, at assembly time. `default_console` is the console sink
    /// when it is still the only destination.
    pub fn resolve(self, default_console: Option<&ConsoleSink>) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                default_console.is_some_and(ConsoleSink::is_terminal)
                    && colored::control::SHOULD_COLORIZE.should_colorize()
            }
        }
    }
}

impl From<bool> for ColorMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            ColorMode::Always
        } else {
            ColorMode::Never
        }
    }
}

/// # Examples
///
/// ```
/// use tiered_logger::core::{ColorMode, FormatOptions, TimestampFormat};
///
/// let options = FormatOptions::from_json(
///     r#"{ "show_location": false, "color": "never", "timestamp_format": "UnixMillis" }"#,
/// ).unwrap();
///
/// assert!(!options.show_location);
/// assert!(options.show_timestamp);
/// assert_eq!(options.color, ColorMode::Never);
/// assert_eq!(options.timestamp_format, TimestampFormat::UnixMillis);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub timestamp_format: TimestampFormat,
    pub show_timestamp: bool,
    /// Source file base name and line of the logging call
    pub show_location: bool,
    /// Static `LEVEL: ` tag
    pub show_severity: bool,
    pub color: ColorMode,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            show_timestamp: true,
            show_location: true,
            show_severity: true,
            color: ColorMode::default(),
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert_eq!(options.timestamp_format, TimestampFormat::Iso8601);
        assert!(options.show_timestamp);
        assert!(options.show_location);
        assert!(options.show_severity);
        assert_eq!(options.color, ColorMode::Auto);
    }

    #[test]
    fn test_empty_json_is_default() {
        let options = FormatOptions::from_json("{}").unwrap();
        assert_eq!(options, FormatOptions::default());
    }

    #[test]
    fn test_custom_timestamp_from_json() {
        let options =
            FormatOptions::from_json(r#"{ "timestamp_format": { "Custom": "%H:%M" } }"#).unwrap();
        assert_eq!(
            options.timestamp_format,
            TimestampFormat::Custom("%H:%M".to_string())
        );
    }

    #[test]
    fn test_malformed_json() {
        let err = FormatOptions::from_json(r#"{ "color": "sometimes" }"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_color_mode_resolution() {
        let console = ConsoleSink::stdout();
        assert!(ColorMode::Always.resolve(None));
        assert!(!ColorMode::Never.resolve(Some(&console)));
        assert!(!ColorMode::Auto.resolve(None));
        assert_eq!(ColorMode::from(true), ColorMode::Always);
    }

    #[test]
    fn test_auto_color_needs_terminal() {
        let console = ConsoleSink::stdout();
        if !console.is_terminal() {
            assert!(!ColorMode::Auto.resolve(Some(&console)));
        }
    }
}
