//! Interactive prompt
//!
//! - Prompt shows the working directory
//! - Line editing and history via rustyline
//! - `clear` clears the real screen

use anyhow::{Context, Result};
use retroterm::Terminal;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use crate::{exec_line, print_output};

pub fn run(term: &mut Terminal, json: bool) -> Result<()> {
    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("Failed to create editor")?;

    println!("retroterm {} - type `help` to list commands", env!("CARGO_PKG_VERSION"));

    loop {
        let prompt = format!("guest@retro:{}$ ", term.fs().current_path());
        match rl.readline(&prompt) {
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::warn!("Failed to add history entry: {}", e);
                }

                let Some(out) = exec_line(term, &line) else {
                    continue;
                };
                if out.clear_screen && !json {
                    rl.clear_screen().context("Failed to clear screen")?;
                    continue;
                }
                print_output(&out, json)?;
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(e) => anyhow::bail!("Failed to read line: {e}"),
        }
    }

    Ok(())
}
