//! Logging infrastructure for retroterm
//!
//! Structured logging through `tracing`, compiled in with the `logging`
//! feature.
//!
//! # Log Levels
//!
//! - **WARN**: A limit rejected a mutation
//! - **INFO**: Session built
//! - **DEBUG**: Command dispatch
//! - **TRACE**: Path resolution
//!
//! Everything that reaches a log line was typed by a visitor, so values are
//! escaped and truncated before logging.

use std::borrow::Cow;

/// Configuration for logging behavior
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Whether to include command arguments in logs (default: true)
    pub log_arguments: bool,

    /// Whether to include seeded file contents in logs (default: false)
    pub log_file_contents: bool,

    /// Maximum length of logged values before truncation (default: 200)
    pub max_value_length: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_arguments: true,
            log_file_contents: false,
            max_value_length: 200,
        }
    }
}

impl LogConfig {
    /// Create a new log configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Log only the argument count, never the arguments themselves
    pub fn hide_arguments(mut self) -> Self {
        self.log_arguments = false;
        self
    }

    /// Include file contents in logs
    pub fn log_file_contents(mut self) -> Self {
        self.log_file_contents = true;
        self
    }

    /// Set maximum length for logged values
    pub fn max_value_length(mut self, len: usize) -> Self {
        self.max_value_length = len;
        self
    }

    /// Format command arguments for a log line.
    pub fn format_args(&self, args: &[String]) -> String {
        if !self.log_arguments {
            return format!("[{} args]", args.len());
        }
        let joined = sanitize_for_log(&args.join(" "));
        self.truncate(&joined).into_owned()
    }

    /// Format file content for a log line.
    pub fn format_content(&self, content: &str) -> String {
        if !self.log_file_contents {
            return format!("[{} lines, {} bytes]", content.lines().count(), content.len());
        }
        let sanitized = sanitize_for_log(content);
        self.truncate(&sanitized).into_owned()
    }

    /// Truncate value if it exceeds max length
    ///
    /// Handles UTF-8 char boundaries properly to avoid panics on multi-byte chars.
    fn truncate<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if value.len() <= self.max_value_length {
            Cow::Borrowed(value)
        } else {
            let mut end = self.max_value_length;
            while end > 0 && !value.is_char_boundary(end) {
                end -= 1;
            }
            Cow::Owned(format!(
                "{}...[truncated {} bytes]",
                &value[..end],
                value.len() - end
            ))
        }
    }
}

/// Escape characters that could forge extra log lines.
pub fn sanitize_for_log(input: &str) -> String {
    input
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
        .chars()
        .filter(|c| !c.is_control() || *c == ' ')
        .collect()
}
