//! Shared helpers for integration tests

use retroterm::{Output, Terminal};

/// Split a typed line the way the prompt does: first word is the command,
/// words starting with `-` are options, the rest are arguments.
pub fn exec(term: &mut Terminal, line: &str) -> Output {
    let mut words = line.split_whitespace();
    let name = words.next().unwrap_or("");
    let (options, args): (Vec<String>, Vec<String>) = words
        .map(str::to_string)
        .partition(|w| w.starts_with('-') && w.len() > 1);
    term.run(name, &args, &options)
}

/// Run a line that must succeed and return its text.
#[allow(dead_code)]
pub fn ok(term: &mut Terminal, line: &str) -> String {
    let out = exec(term, line);
    assert!(out.is_success(), "`{}` failed: {}", line, out.text);
    out.text
}

/// Run a line that must fail and return its message.
#[allow(dead_code)]
pub fn fails(term: &mut Terminal, line: &str) -> String {
    let out = exec(term, line);
    assert!(out.is_error, "`{}` unexpectedly succeeded: {}", line, out.text);
    out.text
}
