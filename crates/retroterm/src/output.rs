//! Command output handed to the renderer

use serde::Serialize;

/// Result of running one command.
///
/// The renderer receives plain text plus two rendering hints. A failed
/// command is still an `Output`: its message is the only observable effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Output {
    /// Text to print. May be empty.
    pub text: String,
    /// Render `text` as markdown instead of plain text.
    pub markdown: bool,
    /// Ask the renderer to clear its screen buffer.
    pub clear_screen: bool,
    /// The command failed and `text` is its error message.
    pub is_error: bool,
}

impl Output {
    /// Create a successful plain-text result.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Create a failed result carrying an error message.
    pub fn err(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            ..Self::default()
        }
    }

    /// Create a successful result to be rendered as markdown.
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: true,
            ..Self::default()
        }
    }

    /// Create a result that only clears the screen.
    pub fn clear() -> Self {
        Self {
            clear_screen: true,
            ..Self::default()
        }
    }

    /// Check if the result indicates success.
    pub fn is_success(&self) -> bool {
        !self.is_error
    }
}
