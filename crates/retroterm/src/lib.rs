//! retroterm - virtual file system and command registry for a simulated terminal
//!
//! A [`Terminal`] owns an in-memory file tree with a working-directory cursor
//! and a registry of commands (`ls`, `cd`, `pwd`, `mkdir`, `touch`, `show`,
//! `echo`, `clear`, `help`, ...). Input arrives already split into a command
//! name, positional arguments and option flags; every command answers with an
//! [`Output`] for the renderer.
//!
//! # Example
//!
//! ```rust
//! use retroterm::Terminal;
//!
//! fn words(items: &[&str]) -> Vec<String> {
//!     items.iter().map(|s| s.to_string()).collect()
//! }
//!
//! let mut term = Terminal::new();
//! term.run("mkdir", &words(&["docs"]), &[]);
//! term.run("cd", &words(&["docs"]), &[]);
//!
//! let out = term.run("pwd", &[], &[]);
//! assert_eq!(out.text, "/docs");
//!
//! let out = term.run("vim", &[], &[]);
//! assert!(out.is_error);
//! assert_eq!(out.text, "command not found: vim");
//! ```

mod builtins;
mod error;
mod fs;
#[cfg(feature = "logging")]
mod logging_impl;
mod output;

pub use builtins::{
    Builtin, Cd, Clear, CommandRegistry, Context as BuiltinContext, DEFAULT_HELP_PREAMBLE, Docs,
    Echo, HELP_DOCS, HELP_OPTIONS, Hello, Ls, Mkdir, Pwd, Show, Touch, render_help,
};
pub use error::{Error, PathError, Result};
pub use fs::{
    DirEntry, FsLimitExceeded, FsLimits, FsUsage, Node, NodeId, NodeKind, SEPARATOR,
    VirtualFileSystem,
};
pub use output::Output;

/// Logging configuration and helpers (requires the `logging` feature).
#[cfg(feature = "logging")]
pub mod logging {
    pub use crate::logging_impl::{LogConfig, sanitize_for_log};
}

#[cfg(feature = "logging")]
pub use logging::LogConfig;

/// One terminal session.
///
/// Owns the file tree, the cursor and the command registry for as long as the
/// session lives. Commands run one at a time through `&mut self`.
pub struct Terminal {
    fs: VirtualFileSystem,
    registry: CommandRegistry,
    #[cfg(feature = "logging")]
    log_config: LogConfig,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    /// Create a session with an empty tree and the standard commands.
    pub fn new() -> Self {
        Self {
            fs: VirtualFileSystem::new(),
            registry: CommandRegistry::new(),
            #[cfg(feature = "logging")]
            log_config: LogConfig::default(),
        }
    }

    /// Create a new TerminalBuilder for customized configuration.
    pub fn builder() -> TerminalBuilder {
        TerminalBuilder::default()
    }

    /// Run one command and return what should be rendered.
    ///
    /// Never fails: unknown commands and command errors become error output.
    pub fn run(&mut self, name: &str, args: &[String], options: &[String]) -> Output {
        self.try_run(name, args, options)
            .unwrap_or_else(|e| Output::err(e.to_string()))
    }

    /// Run one command, reporting an unknown name as
    /// [`Error::CommandNotFound`].
    pub fn try_run(&mut self, name: &str, args: &[String], options: &[String]) -> Result<Output> {
        #[cfg(feature = "logging")]
        tracing::debug!(
            command = name,
            args = %self.log_config.format_args(args),
            options = %self.log_config.format_args(options),
            "dispatching command"
        );

        self.registry.dispatch(name, args, options, &mut self.fs)
    }

    /// The session's file system.
    pub fn fs(&self) -> &VirtualFileSystem {
        &self.fs
    }

    /// Mutable access to the session's file system.
    pub fn fs_mut(&mut self) -> &mut VirtualFileSystem {
        &mut self.fs
    }

    /// The session's command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}

/// Builder for customized Terminal configuration.
///
/// # Example
///
/// ```rust
/// use retroterm::{FsLimits, Terminal};
///
/// let mut term = Terminal::builder()
///     .home("/home/guest")
///     .start_in_home(true)
///     .file("~/about.md", "# About me")
///     .limits(FsLimits::new().max_node_count(1_000))
///     .build()
///     .unwrap();
///
/// assert_eq!(term.run("pwd", &[], &[]).text, "/home/guest");
/// assert_eq!(term.run("show", &["about.md".to_string()], &[]).text, "# About me");
/// ```
#[derive(Default)]
pub struct TerminalBuilder {
    limits: Option<FsLimits>,
    home: Option<String>,
    start_in_home: bool,
    dirs: Vec<String>,
    files: Vec<(String, String)>,
    commands: Vec<Box<dyn Builtin>>,
    help_preamble: Option<String>,
    #[cfg(feature = "logging")]
    log_config: Option<LogConfig>,
}

impl TerminalBuilder {
    /// Set file system limits.
    pub fn limits(mut self, limits: FsLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Set the home directory. Missing directories along the path are
    /// created.
    pub fn home(mut self, path: impl Into<String>) -> Self {
        self.home = Some(path.into());
        self
    }

    /// Start the cursor in the home directory instead of root.
    pub fn start_in_home(mut self, yes: bool) -> Self {
        self.start_in_home = yes;
        self
    }

    /// Seed a directory, creating missing parents.
    pub fn dir(mut self, path: impl Into<String>) -> Self {
        self.dirs.push(path.into());
        self
    }

    /// Seed a file with content, creating missing parent directories.
    pub fn file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push((path.into(), content.into()));
        self
    }

    /// Register an additional command.
    pub fn command(mut self, cmd: Box<dyn Builtin>) -> Self {
        self.commands.push(cmd);
        self
    }

    /// Replace the text `help` prints above the command list.
    pub fn help_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.help_preamble = Some(preamble.into());
        self
    }

    /// Configure logging (requires the `logging` feature).
    #[cfg(feature = "logging")]
    pub fn log_config(mut self, config: LogConfig) -> Self {
        self.log_config = Some(config);
        self
    }

    /// Build the Terminal.
    ///
    /// Fails if a seed entry or the home path conflicts with the tree or the
    /// limits.
    pub fn build(self) -> Result<Terminal> {
        #[cfg(feature = "logging")]
        let log_config = self.log_config.unwrap_or_default();

        let mut fs = VirtualFileSystem::with_limits(self.limits.unwrap_or_default());

        if let Some(home) = &self.home {
            fs.make_directory(home, true)?;
            fs.set_home(home)?;
        }

        for dir in &self.dirs {
            fs.make_directory(dir, true)?;
        }

        for (path, content) in self.files {
            if let Some(parent) = parent_of(&path) {
                fs.make_directory(parent, true)?;
            }

            #[cfg(feature = "logging")]
            tracing::debug!(
                path = %path,
                content = %log_config.format_content(&content),
                "seeding file"
            );

            fs.write_file(&path, content)?;
        }

        if self.start_in_home {
            fs.change_directory("~")?;
        }

        let mut registry = CommandRegistry::new();
        for cmd in self.commands {
            registry.register(cmd);
        }
        if let Some(preamble) = self.help_preamble {
            registry.set_help_preamble(preamble);
        }

        #[cfg(feature = "logging")]
        tracing::info!(
            nodes = fs.usage().node_count(),
            home = %fs.path_of(fs.home()),
            "terminal session ready"
        );

        Ok(Terminal {
            fs,
            registry,
            #[cfg(feature = "logging")]
            log_config,
        })
    }
}

/// Directory part of a path, if it has one beyond root.
fn parent_of(path: &str) -> Option<&str> {
    let trimmed = path.trim_end_matches(SEPARATOR);
    match trimmed.rfind(SEPARATOR) {
        Some(0) | None => None,
        Some(idx) => Some(&trimmed[..idx]),
    }
}
