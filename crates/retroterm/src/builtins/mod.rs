//! Built-in terminal commands
//!
//! This module provides the [`Builtin`] trait for implementing commands, the
//! [`Context`] each command runs in, and the [`CommandRegistry`] that maps a
//! typed command name to its handler.
//!
//! # Custom Builtins
//!
//! Implement the [`Builtin`] trait to create custom commands:
//!
//! ```rust
//! use retroterm::{Builtin, BuiltinContext, Docs, Output};
//!
//! struct Whoami;
//!
//! impl Builtin for Whoami {
//!     fn docs(&self) -> Docs {
//!         Docs::new("whoami", "print the current user")
//!     }
//!
//!     fn execute(&self, _ctx: BuiltinContext<'_>) -> retroterm::Result<Output> {
//!         Ok(Output::ok("guest"))
//!     }
//! }
//! ```
//!
//! Register via [`TerminalBuilder::command`](crate::TerminalBuilder::command).

mod echo;
mod fileops;
mod help;
mod inspect;
mod ls;
mod navigation;
mod screen;

pub use echo::{Echo, Hello};
pub use fileops::{Mkdir, Touch};
pub use help::{DEFAULT_HELP_PREAMBLE, HELP_DOCS, render_help};
pub use inspect::Show;
pub use ls::Ls;
pub use navigation::{Cd, Pwd};
pub use screen::Clear;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::fs::VirtualFileSystem;
use crate::output::Output;

/// Options that short-circuit any command to its one-line description.
pub const HELP_OPTIONS: [&str; 2] = ["-h", "-help"];

/// Self-description every command declares.
///
/// `short` feeds the `help` listing and the `-h` one-liner; `long` is shown by
/// `help <name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Docs {
    /// Command name, matched exactly and case-sensitively.
    pub name: &'static str,
    /// One-line description.
    pub short: &'static str,
    /// Longer description, may be empty.
    pub long: &'static str,
}

impl Docs {
    /// Docs with an empty long description.
    pub const fn new(name: &'static str, short: &'static str) -> Self {
        Self {
            name,
            short,
            long: "",
        }
    }

    /// Set the long description.
    pub const fn long(mut self, long: &'static str) -> Self {
        self.long = long;
        self
    }

    /// The `-h` one-liner: `"{name} – {short}"`.
    pub fn summary(&self) -> String {
        format!("{} – {}", self.name, self.short)
    }
}

/// Execution context for builtin commands.
///
/// The file system is passed in explicitly for the duration of one call; no
/// command holds on to it.
pub struct Context<'a> {
    /// Positional arguments, in order.
    ///
    /// For `mkdir -p a/b`, this contains `["a/b"]`.
    pub args: &'a [String],

    /// Option flags, in order, each starting with `-`.
    ///
    /// For `mkdir -p a/b`, this contains `["-p"]`.
    pub options: &'a [String],

    /// Virtual file system of the session.
    pub fs: &'a mut VirtualFileSystem,
}

impl<'a> Context<'a> {
    /// Check whether any of `names` was passed as an option.
    pub fn has_option(&self, names: &[&str]) -> bool {
        self.options.iter().any(|o| names.contains(&o.as_str()))
    }
}

/// Trait for implementing terminal commands.
///
/// # Return Values
///
/// Return `Ok(Output)` for anything the command wants printed. Return
/// `Err(Error)` for failures; the registry renders them as
/// `"{name}: {message}"` error output, so the terminal session always
/// continues.
pub trait Builtin: Send + Sync {
    /// Name and descriptions of the command.
    fn docs(&self) -> Docs;

    /// Execute the command.
    ///
    /// `-h`/`-help` never reach this method.
    fn execute(&self, ctx: Context<'_>) -> Result<Output>;
}

/// Registry of named commands, iterated in registration order.
///
/// `help` is not a regular entry: it is synthesised from the registered
/// commands' docs whenever no command named `help` has been registered.
pub struct CommandRegistry {
    commands: IndexMap<&'static str, Box<dyn Builtin>>,
    help_preamble: String,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(Ls));
        registry.register(Box::new(Cd));
        registry.register(Box::new(Show));
        registry.register(Box::new(Echo));
        registry.register(Box::new(Pwd));
        registry.register(Box::new(Mkdir));
        registry.register(Box::new(Touch));
        registry.register(Box::new(Hello));
        registry.register(Box::new(Clear));
        registry
    }
}

impl CommandRegistry {
    /// Registry with every standard command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with no commands; only the synthesised `help` answers.
    pub fn empty() -> Self {
        Self {
            commands: IndexMap::new(),
            help_preamble: DEFAULT_HELP_PREAMBLE.to_string(),
        }
    }

    /// Register a command.
    ///
    /// Replacing an existing name keeps that name's position in the listing.
    pub fn register(&mut self, cmd: Box<dyn Builtin>) {
        self.commands.insert(cmd.docs().name, cmd);
    }

    /// Replace the static text `help` prints before the command list.
    pub fn set_help_preamble(&mut self, preamble: impl Into<String>) {
        self.help_preamble = preamble.into();
    }

    /// Static text `help` prints before the command list.
    pub fn help_preamble(&self) -> &str {
        &self.help_preamble
    }

    /// Look up a registered command.
    pub fn get(&self, name: &str) -> Option<&dyn Builtin> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Check whether `name` dispatches to something, `help` included.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name) || name == HELP_DOCS.name
    }

    /// Registered commands' docs in registration order.
    pub fn docs(&self) -> impl Iterator<Item = Docs> + '_ {
        self.commands.values().map(|c| c.docs())
    }

    /// Run the command called `name`.
    ///
    /// Command failures come back as error [`Output`]; the only `Err` is
    /// [`Error::CommandNotFound`].
    pub fn dispatch(
        &self,
        name: &str,
        args: &[String],
        options: &[String],
        fs: &mut VirtualFileSystem,
    ) -> Result<Output> {
        if let Some(cmd) = self.commands.get(name) {
            let docs = cmd.docs();
            if wants_help(options) {
                return Ok(Output::ok(docs.summary()));
            }

            let ctx = Context { args, options, fs };
            let output = cmd
                .execute(ctx)
                .unwrap_or_else(|e| Output::err(format!("{}: {}", docs.name, e)));
            return Ok(output);
        }

        if name == HELP_DOCS.name {
            if wants_help(options) {
                return Ok(Output::ok(HELP_DOCS.summary()));
            }
            return Ok(render_help(self, args));
        }

        Err(Error::CommandNotFound(name.to_string()))
    }
}

fn wants_help(options: &[String]) -> bool {
    options.iter().any(|o| HELP_OPTIONS.contains(&o.as_str()))
}
