//! Directory listing builtin - ls

use super::{Builtin, Context, Docs};
use crate::error::Result;
use crate::fs::{DirEntry, SEPARATOR};
use crate::output::Output;

/// The ls builtin - list directory contents.
///
/// Usage: ls [PATH]
///
/// Prints one name per line in creation order, directories suffixed with
/// `/`. An empty directory prints nothing. A file path prints that file.
pub struct Ls;

impl Builtin for Ls {
    fn docs(&self) -> Docs {
        Docs::new("ls", "list directory contents").long(
            "Usage: ls [PATH]\n\n\
             Lists PATH (default: the working directory), one entry per line.\n\
             Directories are shown with a trailing `/`.",
        )
    }

    fn execute(&self, ctx: Context<'_>) -> Result<Output> {
        let path = ctx.args.first().map(|s| s.as_str());
        let entries = ctx.fs.list_children(path)?;

        let lines: Vec<String> = entries.iter().map(format_entry).collect();
        Ok(Output::ok(lines.join("\n")))
    }
}

fn format_entry(entry: &DirEntry) -> String {
    if entry.kind.is_dir() {
        format!("{}{}", entry.name, SEPARATOR)
    } else {
        entry.name.clone()
    }
}
