//! Navigation builtins (cd, pwd)

use super::{Builtin, Context, Docs};
use crate::error::Result;
use crate::output::Output;

/// The cd builtin - change directory.
///
/// Usage: cd [DIRECTORY]
///
/// Without an argument (or with an empty one) goes to the home directory.
pub struct Cd;

impl Builtin for Cd {
    fn docs(&self) -> Docs {
        Docs::new("cd", "change the working directory").long(
            "Usage: cd [DIRECTORY]\n\n\
             Accepts absolute paths, relative paths, `.`, `..` and `~`.\n\
             Without DIRECTORY, returns to the home directory.",
        )
    }

    fn execute(&self, ctx: Context<'_>) -> Result<Output> {
        let target = ctx
            .args
            .first()
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("~");

        ctx.fs.change_directory(target)?;
        Ok(Output::ok(""))
    }
}

/// The pwd builtin - print working directory.
pub struct Pwd;

impl Builtin for Pwd {
    fn docs(&self) -> Docs {
        Docs::new("pwd", "print the working directory")
    }

    fn execute(&self, ctx: Context<'_>) -> Result<Output> {
        Ok(Output::ok(ctx.fs.current_path()))
    }
}
