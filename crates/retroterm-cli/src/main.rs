//! retroterm CLI - Command line interface for the virtual terminal
//!
//! Usage:
//!   retroterm -c 'mkdir docs; cd docs; pwd'   # Run a line of commands
//!   retroterm session.txt                     # Run one command per line
//!   retroterm                                 # Interactive prompt

#[cfg(feature = "interactive")]
mod interactive;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use retroterm::{Output, Terminal};
use tracing_subscriber::EnvFilter;

/// retroterm - simulated terminal over an in-memory file tree
#[derive(Parser, Debug)]
#[command(name = "retroterm")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run the given commands, separated by `;` or newlines
    #[arg(short = 'c')]
    command: Option<String>,

    /// File with one command per line
    #[arg()]
    script: Option<PathBuf>,

    /// Print each result as a JSON line
    #[arg(long)]
    json: bool,

    /// Home directory, created if missing
    #[arg(long, value_name = "PATH")]
    home: Option<String>,

    /// Seed a file before running, e.g. `--seed /motd.txt=hello`
    #[arg(long = "seed", value_name = "VPATH=TEXT", value_parser = parse_seed)]
    seeds: Vec<(String, String)>,

    /// Log to stderr (filter with RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        init_tracing();
    }

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("retroterm: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("retroterm=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let mut builder = Terminal::builder();
    if let Some(home) = &args.home {
        builder = builder.home(home.as_str()).start_in_home(true);
    }
    for (path, text) in &args.seeds {
        builder = builder.file(path.as_str(), text.as_str());
    }
    let mut term = builder.build().context("Failed to set up the session")?;

    if let Some(cmd) = &args.command {
        return run_batch(&mut term, cmd, args.json);
    }

    if let Some(script_path) = &args.script {
        let script = std::fs::read_to_string(script_path)
            .with_context(|| format!("Failed to read script: {}", script_path.display()))?;
        return run_batch(&mut term, &script, args.json);
    }

    #[cfg(feature = "interactive")]
    {
        interactive::run(&mut term, args.json)?;
        Ok(ExitCode::SUCCESS)
    }

    #[cfg(not(feature = "interactive"))]
    {
        use std::io::BufRead;

        let stdin = io::stdin();
        let mut failed = false;
        for line in stdin.lock().lines() {
            let line = line.context("Failed to read stdin")?;
            if let Some(out) = exec_line(&mut term, &line) {
                failed |= out.is_error;
                print_output(&out, args.json)?;
            }
        }
        Ok(exit_code(failed))
    }
}

/// Run every command in `source`; fails the process if any command failed.
fn run_batch(term: &mut Terminal, source: &str, json: bool) -> Result<ExitCode> {
    let mut failed = false;
    for line in split_commands(source) {
        if let Some(out) = exec_line(term, line) {
            failed |= out.is_error;
            print_output(&out, json)?;
        }
    }
    Ok(exit_code(failed))
}

fn exit_code(failed: bool) -> ExitCode {
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Tokenise and run one line. Blank lines and `#` comments run nothing.
pub(crate) fn exec_line(term: &mut Terminal, line: &str) -> Option<Output> {
    let (name, args, options) = tokenize(line)?;
    Some(term.run(&name, &args, &options))
}

pub(crate) fn print_output(out: &Output, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(out).context("Failed to encode output")?;
        println!("{line}");
        return Ok(());
    }

    if out.text.is_empty() {
        return Ok(());
    }
    if out.is_error {
        eprintln!("{}", out.text);
    } else {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", out.text.trim_end_matches('\n')).context("Failed to write output")?;
    }
    Ok(())
}

fn split_commands(source: &str) -> impl Iterator<Item = &str> {
    source.split(['\n', ';']).map(str::trim)
}

/// Split a line into command name, positional arguments and option flags.
///
/// Words are separated by whitespace; a word starting with `-` (other than a
/// lone `-`) is an option.
fn tokenize(line: &str) -> Option<(String, Vec<String>, Vec<String>)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut words = line.split_whitespace();
    let name = words.next()?.to_string();
    let (options, args): (Vec<String>, Vec<String>) = words
        .map(str::to_string)
        .partition(|w| w.starts_with('-') && w.len() > 1);
    Some((name, args, options))
}

fn parse_seed(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((path, _)) if path.is_empty() => Err("seed path is empty".to_string()),
        Some((path, text)) => Ok((path.to_string(), text.replace("\\n", "\n"))),
        None => Err(format!("expected VPATH=TEXT, got '{raw}'")),
    }
}
