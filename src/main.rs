//! Jimmy Script interpreter
//!
//! Evaluates a file or a single expression, or starts an interactive shell.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use jimmy_script::feedback::{ErrorReport, EvaluationFeedback};
use jimmy_script::{check, run, Environment, Error};

const PROMPT: &str = "jimmy-script > ";

/// Jimmy Script interpreter
#[derive(Parser, Debug)]
#[command(name = "jimmy")]
#[command(version = "0.1.0")]
#[command(about = "Jimmy Script - a tiny arithmetic expression language")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Source file to evaluate; the shell starts when omitted
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Source label shown in diagnostics
    #[arg(long, global = true, value_name = "NAME")]
    label: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one expression
    Eval {
        /// Expression source
        expr: String,
    },
    /// Tokenize and parse a source file without evaluating it
    Check {
        /// Input source file
        input: PathBuf,
    },
    /// Start the interactive shell
    Repl,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let outcome = match &cli.command {
        Some(Commands::Eval { expr }) => eval_source(expr, &label_or(&cli, "<arg>"), &cli),
        Some(Commands::Check { input }) => check_file(input, &cli),
        Some(Commands::Repl) => repl(&cli),
        None => match &cli.input {
            Some(input) => eval_file(input, &cli),
            None => repl(&cli),
        },
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}

fn label_or(cli: &Cli, default: &str) -> String {
    cli.label.clone().unwrap_or_else(|| default.to_string())
}

fn read_source(input: &Path) -> Result<String> {
    fs::read_to_string(input).with_context(|| format!("cannot read {}", input.display()))
}

fn print_error(error: &Error, json: bool) {
    if json {
        eprintln!("{}", ErrorReport::from_error(error).to_json());
    } else {
        eprint!("{}", error.report());
    }
}

/// Evaluate a source file in a fresh environment
fn eval_file(input: &Path, cli: &Cli) -> Result<bool> {
    let source = read_source(input)?;
    eval_source(&source, &label_or(cli, &input.display().to_string()), cli)
}

fn eval_source(source: &str, label: &str, cli: &Cli) -> Result<bool> {
    let mut env = Environment::new();
    let result = run(source, label, &mut env);

    if cli.json {
        println!("{}", EvaluationFeedback::from_result(source, &result).to_json());
        return Ok(result.is_ok());
    }

    match result {
        Ok(value) => {
            println!("{}", value);
            Ok(true)
        }
        Err(e) => {
            print_error(&e, false);
            Ok(false)
        }
    }
}

fn check_file(input: &Path, cli: &Cli) -> Result<bool> {
    let source = read_source(input)?;
    let label = label_or(cli, &input.display().to_string());

    match check(&source, &label) {
        Ok(ast) => {
            println!("{}: ok {}", label, ast);
            Ok(true)
        }
        Err(e) => {
            print_error(&e, cli.json);
            Ok(false)
        }
    }
}

/// Read-eval-print loop over stdin, sharing one environment across lines
fn repl(cli: &Cli) -> Result<bool> {
    let label = label_or(cli, "<stdin>");
    let mut env = Environment::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            println!();
            return Ok(true);
        }

        let line = line.trim_end_matches(&['\n', '\r'][..]);
        if line.trim().eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            return Ok(true);
        }
        if line.trim().is_empty() {
            continue;
        }

        match run(line, &label, &mut env) {
            Ok(value) => println!("{}", value),
            Err(e) => print_error(&e, cli.json),
        }
    }
}
