use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use stackcalc::evaluate;

/// Evaluates arithmetic expressions. Without an expression, reads one per line
/// from standard input until an empty line or end of input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate once instead of starting the prompt.
    expression: Option<String>,
}

fn prompt(stdout: &mut impl Write) -> io::Result<()> {
    print!("> ");
    stdout.flush()
}

fn repl() -> io::Result<()> {
    let mut stdout = io::stdout();
    prompt(&mut stdout)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }

        match evaluate(&line) {
            Ok(value) => println!("{value}"),
            Err(e) => println!("Error, {}: {e}", e.kind()),
        }

        prompt(&mut stdout)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.expression {
        Some(expression) => match evaluate(&expression) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Error, {}: {e}", e.kind());
                ExitCode::FAILURE
            },
        },
        None => match repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        },
    }
}
