//! Screen builtin - clear

use super::{Builtin, Context, Docs};
use crate::error::Result;
use crate::output::Output;

/// The clear builtin - ask the renderer to wipe its buffer.
///
/// Touches nothing in the file system.
pub struct Clear;

impl Builtin for Clear {
    fn docs(&self) -> Docs {
        Docs::new("clear", "clear the terminal screen")
    }

    fn execute(&self, _ctx: Context<'_>) -> Result<Output> {
        Ok(Output::clear())
    }
}
