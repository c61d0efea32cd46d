//! File inspection builtin - show

use super::{Builtin, Context, Docs};
use crate::error::{Error, Result};
use crate::output::Output;

/// The show builtin - print a file's contents verbatim.
///
/// Usage: show FILE
pub struct Show;

impl Builtin for Show {
    fn docs(&self) -> Docs {
        Docs::new("show", "print the contents of a file")
            .long("Usage: show FILE\n\nPrints FILE exactly as stored.")
    }

    fn execute(&self, ctx: Context<'_>) -> Result<Output> {
        let file = ctx
            .args
            .first()
            .ok_or_else(|| Error::usage("missing file operand"))?;

        Ok(Output::ok(ctx.fs.read_file(file)?))
    }
}
