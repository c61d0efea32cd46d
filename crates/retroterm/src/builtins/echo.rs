//! Printing builtins - echo, hello

use super::{Builtin, Context, Docs};
use crate::error::Result;
use crate::output::Output;

/// The echo builtin command.
///
/// Prints its arguments joined by single spaces.
pub struct Echo;

impl Builtin for Echo {
    fn docs(&self) -> Docs {
        Docs::new("echo", "print the arguments")
    }

    fn execute(&self, ctx: Context<'_>) -> Result<Output> {
        Ok(Output::ok(ctx.args.join(" ")))
    }
}

/// The hello builtin - greet the visitor.
pub struct Hello;

impl Builtin for Hello {
    fn docs(&self) -> Docs {
        Docs::new("hello", "say hello").long("Usage: hello [NAME]\n\nGreets NAME, or the world.")
    }

    fn execute(&self, ctx: Context<'_>) -> Result<Output> {
        let name = if ctx.args.is_empty() {
            "world".to_string()
        } else {
            ctx.args.join(" ")
        };
        Ok(Output::ok(format!("Hello, {}!", name)))
    }
}
