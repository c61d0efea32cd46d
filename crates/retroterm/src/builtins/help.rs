//! help - synthesised command listing

use super::{CommandRegistry, Docs};
use crate::output::Output;

/// Docs of the synthesised `help` command.
pub const HELP_DOCS: Docs = Docs::new("help", "list available commands").long(
    "Usage: help [COMMAND]\n\n\
     Without arguments, lists every command with a one-line description.\n\
     With a command name, prints that command's full description.",
);

/// Text printed above the command list.
pub const DEFAULT_HELP_PREAMBLE: &str = "## Help\n\n\
Type a command and press enter. Add `-h` to any command for a one-line description.\n\n";

/// Render `help [COMMAND]` against the current registry.
///
/// The listing has one `### name - short` line per registered command, in
/// registration order, and is flagged as markdown.
pub fn render_help(registry: &CommandRegistry, args: &[String]) -> Output {
    if let Some(name) = args.first() {
        return describe(registry, name);
    }

    let mut text = registry.help_preamble().to_string();
    for docs in registry.docs() {
        text.push_str(&format!("### {} - {}\n", docs.name, docs.short));
    }
    Output::markdown(text)
}

fn describe(registry: &CommandRegistry, name: &str) -> Output {
    let docs = match registry.get(name) {
        Some(cmd) => cmd.docs(),
        None if name == HELP_DOCS.name => HELP_DOCS,
        None => return Output::err(format!("help: command not found: {}", name)),
    };

    if docs.long.is_empty() {
        Output::ok(docs.summary())
    } else {
        Output::ok(format!("{}\n\n{}", docs.summary(), docs.long))
    }
}
