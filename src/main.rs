use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use dentaku::{Environment, PRINT_BASE, get_result, register_builtins};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Setting that makes the REPL echo each parsed statement before its result.
const ECHO: &str = ".echo";

/// dentaku is a line-oriented integer calculator with lazily bound variables.
///
/// Without CONTENTS, lines are read from standard input until end of file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells dentaku to read CONTENTS as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Initial value of `.printBase` (2, 8, 10 or 16).
    #[arg(short = 'b', long, default_value_t = 10, value_parser = parse_print_base)]
    print_base: i64,

    /// Do not show the `>` prompt when reading standard input.
    #[arg(short, long)]
    quiet: bool,

    /// Lines to evaluate, or a path when `--file` is given.
    contents: Option<String>,
}

fn parse_print_base(s: &str) -> Result<i64, String> {
    match s.parse() {
        Ok(n @ (2 | 8 | 10 | 16)) => Ok(n),
        _ => Err(format!("'{s}' is not one of 2, 8, 10 or 16")),
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_writer(io::stderr)
                             .with_env_filter(filter)
                             .init();

    let args = Args::parse();

    let mut env = Environment::new();
    env.set(PRINT_BASE, args.print_base);
    register_builtins(&mut env);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match args.contents {
        Some(contents) if args.file => {
            let script = fs::read(&contents).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            repl(script.as_slice(), &mut env, &mut out, false)
        },
        Some(contents) => repl(contents.as_bytes(), &mut env, &mut out, false),
        None => repl(io::stdin().lock(), &mut env, &mut out, !args.quiet),
    };

    if let Err(e) = result {
        eprintln!("{e}");
    }
}

/// Reads lines until end of input, optionally printing a prompt before each.
///
/// Lines are read as bytes. A line that is not valid UTF-8 is reported like
/// any other failing line and reading continues.
fn repl(mut input: impl BufRead, env: &mut Environment, out: &mut impl Write, prompt: bool)
        -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            if prompt {
                writeln!(out)?;
            }
            return Ok(());
        }

        match std::str::from_utf8(&buf) {
            Ok(line) => process_line(line, env, out)?,
            Err(e) => {
                warn!(error = %e, "line is not valid UTF-8");
                writeln!(out, "error: {e}")?;
            },
        }
    }
}

/// Processes one line and writes its result, error or warning.
fn process_line(line: &str, env: &mut Environment, out: &mut impl Write) -> io::Result<()> {
    if line.trim().is_empty() {
        return Ok(());
    }

    match get_result(line, env) {
        Ok(evaluation) => {
            if env.is_defined(ECHO) {
                writeln!(out, "parsed: {}", evaluation.statement)?;
            }
            writeln!(out, "{}", evaluation.printed)?;
            if !evaluation.unparsed.is_empty() {
                writeln!(out, "warning: unparsed: {}", evaluation.unparsed)?;
            }
        },
        Err(e) => writeln!(out, "error: {e}")?,
    }
    Ok(())
}
