//! Resource limits for the virtual file tree.
//!
//! The tree lives for a whole terminal session and anything typed at the
//! prompt can grow it, so every mutation is checked against these bounds
//! before it touches the arena.

use std::fmt;

/// Default maximum node count (files + directories, root included): 10,000
pub const DEFAULT_MAX_NODE_COUNT: u64 = 10_000;

/// Default maximum single file size: 1MB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_000_000;

/// Default maximum directory nesting below root: 64
pub const DEFAULT_MAX_PATH_DEPTH: usize = 64;

/// Default maximum length of a single name: 255 bytes
pub const DEFAULT_MAX_FILENAME_LENGTH: usize = 255;

/// File tree resource limits.
///
/// # Example
///
/// ```rust
/// use retroterm::{FsLimits, Terminal};
///
/// let limits = FsLimits::new()
///     .max_node_count(500)
///     .max_file_size(64 * 1024);
///
/// let term = Terminal::builder().limits(limits).build().unwrap();
/// assert_eq!(term.fs().limits().max_node_count, 500);
/// ```
///
/// # Default Limits
///
/// | Limit | Default | Purpose |
/// |-------|---------|---------|
/// | `max_node_count` | 10,000 | Files plus directories |
/// | `max_file_size` | 1MB | Single file content |
/// | `max_path_depth` | 64 | Directory nesting |
/// | `max_filename_length` | 255 | Single path segment |
#[derive(Debug, Clone)]
pub struct FsLimits {
    /// Maximum number of nodes in the tree, root included.
    pub max_node_count: u64,

    /// Maximum size of a single file's content in bytes.
    pub max_file_size: u64,

    /// Maximum depth of any node below root (root is depth 0).
    pub max_path_depth: usize,

    /// Maximum length of a single name in bytes.
    pub max_filename_length: usize,
}

impl Default for FsLimits {
    fn default() -> Self {
        Self {
            max_node_count: DEFAULT_MAX_NODE_COUNT,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_path_depth: DEFAULT_MAX_PATH_DEPTH,
            max_filename_length: DEFAULT_MAX_FILENAME_LENGTH,
        }
    }
}

impl FsLimits {
    /// Create new limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create unlimited limits (no restrictions).
    pub fn unlimited() -> Self {
        Self {
            max_node_count: u64::MAX,
            max_file_size: u64::MAX,
            max_path_depth: usize::MAX,
            max_filename_length: usize::MAX,
        }
    }

    /// Set maximum node count.
    pub fn max_node_count(mut self, count: u64) -> Self {
        self.max_node_count = count;
        self
    }

    /// Set maximum single file size.
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Set maximum nesting depth.
    pub fn max_path_depth(mut self, depth: usize) -> Self {
        self.max_path_depth = depth;
        self
    }

    /// Set maximum name length.
    pub fn max_filename_length(mut self, len: usize) -> Self {
        self.max_filename_length = len;
        self
    }

    /// Validate a name about to be inserted into the tree.
    ///
    /// Rejects over-long names and names carrying control or bidi override
    /// characters, which would garble the rendered listing.
    pub fn validate_name(&self, name: &str) -> Result<(), FsLimitExceeded> {
        if name.len() > self.max_filename_length {
            return Err(FsLimitExceeded::FilenameTooLong {
                length: name.len(),
                limit: self.max_filename_length,
            });
        }

        if let Some(bad_char) = find_unsafe_name_char(name) {
            return Err(FsLimitExceeded::UnsafeNameChar {
                character: bad_char,
                name: name.to_string(),
            });
        }

        Ok(())
    }

    /// Check the depth a new node would sit at.
    pub fn check_depth(&self, depth: usize) -> Result<(), FsLimitExceeded> {
        if depth > self.max_path_depth {
            return Err(FsLimitExceeded::PathTooDeep {
                depth,
                limit: self.max_path_depth,
            });
        }
        Ok(())
    }

    /// Check if a file size exceeds the limit.
    pub fn check_file_size(&self, size: u64) -> Result<(), FsLimitExceeded> {
        if size > self.max_file_size {
            return Err(FsLimitExceeded::FileSize {
                size,
                limit: self.max_file_size,
            });
        }
        Ok(())
    }

    /// Check if adding one node would exceed the count limit.
    pub fn check_node_count(&self, current: u64) -> Result<(), FsLimitExceeded> {
        if current >= self.max_node_count {
            return Err(FsLimitExceeded::NodeCount {
                current,
                limit: self.max_node_count,
            });
        }
        Ok(())
    }
}

/// Returns a description of the first unsafe character in `name`.
///
/// Rejects ASCII control chars, C1 controls, and Unicode bidi overrides
/// (U+202A-U+202E, U+2066-U+2069).
fn find_unsafe_name_char(name: &str) -> Option<String> {
    for ch in name.chars() {
        if ch.is_ascii_control() || ('\u{0080}'..='\u{009F}').contains(&ch) {
            return Some(format!("U+{:04X}", ch as u32));
        }
        if ('\u{202A}'..='\u{202E}').contains(&ch) || ('\u{2066}'..='\u{2069}').contains(&ch) {
            return Some(format!("U+{:04X} (bidi override)", ch as u32));
        }
    }
    None
}

/// Error returned when a tree limit would be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsLimitExceeded {
    /// Node count would exceed limit.
    NodeCount { current: u64, limit: u64 },
    /// Single file size exceeds limit.
    FileSize { size: u64, limit: u64 },
    /// Nesting depth exceeds limit.
    PathTooDeep { depth: usize, limit: usize },
    /// Single name exceeds length limit.
    FilenameTooLong { length: usize, limit: usize },
    /// Name contains an unsafe character.
    UnsafeNameChar { character: String, name: String },
}

impl fmt::Display for FsLimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsLimitExceeded::NodeCount { current, limit } => {
                write!(f, "too many entries: {} at {} entry limit", current, limit)
            }
            FsLimitExceeded::FileSize { size, limit } => {
                write!(
                    f,
                    "file too large: {} bytes exceeds {} byte limit",
                    size, limit
                )
            }
            FsLimitExceeded::PathTooDeep { depth, limit } => {
                write!(
                    f,
                    "path too deep: {} levels exceeds {} level limit",
                    depth, limit
                )
            }
            FsLimitExceeded::FilenameTooLong { length, limit } => {
                write!(
                    f,
                    "filename too long: {} bytes exceeds {} byte limit",
                    length, limit
                )
            }
            FsLimitExceeded::UnsafeNameChar { character, name } => {
                write!(f, "unsafe character {} in name '{}'", character, name)
            }
        }
    }
}

impl std::error::Error for FsLimitExceeded {}

/// Current tree usage statistics.
///
/// Returned by [`VirtualFileSystem::usage`](crate::VirtualFileSystem::usage).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FsUsage {
    /// Total bytes of file content.
    pub total_bytes: u64,
    /// Number of files.
    pub file_count: u64,
    /// Number of directories, root included.
    pub dir_count: u64,
}

impl FsUsage {
    /// Files plus directories.
    pub fn node_count(&self) -> u64 {
        self.file_count + self.dir_count
    }
}
