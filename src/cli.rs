use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};

use crate::{
    error::EvalError,
    interpreter::{DEFAULT_MAX_DEPTH, Limits},
    parse_with_limits,
};

const BANNER: &str = "safecalc: type 'quit' or 'exit' or Ctrl-D to exit";
const PROMPT: &str = "> ";

/// Log level for the application
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub const fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// safecalc evaluates arithmetic expressions: numbers, `+ - * / % **`,
/// parentheses and percent literals such as `50%`.
#[derive(Parser, Debug)]
#[command(name = "safecalc", version, about, long_about = None)]
pub struct Args {
    /// Expression to evaluate once. Starts an interactive session when
    /// omitted.
    pub expression: Option<String>,

    /// Deepest nesting of parentheses, signs and operators accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: LogLevel) {
    env_logger::Builder::from_default_env().filter_level(log_level.to_level_filter())
                                           .init();
}

/// Parses and evaluates one line, logging the tree that was built.
///
/// # Errors
/// Propagates any [`EvalError`] from parsing or evaluation.
pub fn evaluate_line(line: &str, limits: &Limits) -> Result<f64, EvalError> {
    let tree = parse_with_limits(line, limits)?;
    debug!("Parsed '{line}' as {tree}");
    tree.evaluate_with_limits(limits)
}

/// Renders the outcome of one line the way the interactive session prints
/// it: the number, or `Error: ` followed by the message.
///
/// # Example
/// ```
/// use safecalc::{cli::render_line, interpreter::Limits};
///
/// assert_eq!(render_line("2**3 + 50%", &Limits::default()), "8.5");
/// assert_eq!(render_line("1/0", &Limits::default()), "Error: Division by zero");
/// ```
#[must_use]
pub fn render_line(line: &str, limits: &Limits) -> String {
    match evaluate_line(line, limits) {
        Ok(value) => value.to_string(),
        Err(e) => format!("Error: {e}"),
    }
}

fn is_exit_command(line: &str) -> bool {
    line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit")
}

/// Runs the interactive loop until `quit`, `exit` or end of input.
///
/// Each line is trimmed, evaluated and answered with either the result or an
/// `Error: ...` line. Errors never end the session.
///
/// # Errors
/// Returns an error only if reading from `input` or writing to `output`
/// fails.
pub fn run_repl<R: BufRead, W: Write>(input: R, output: &mut W, limits: &Limits) -> Result<()> {
    writeln!(output, "{BANNER}")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("Failed to read a line of input")?;
        let line = line.trim();

        if is_exit_command(line) {
            break;
        }

        writeln!(output, "{}", render_line(line, limits))?;
    }

    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.log_level);

    let limits = Limits { max_depth: args.max_depth };

    if let Some(expression) = args.expression {
        info!("Evaluating a single expression");
        return match evaluate_line(&expression, &limits) {
            Ok(value) => {
                println!("{value}");
                Ok(ExitCode::SUCCESS)
            },
            Err(e) => {
                warn!("Evaluation failed: {e:?}");
                println!("Error: {e}");
                Ok(ExitCode::FAILURE)
            },
        };
    }

    info!("Starting interactive session");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_repl(stdin.lock(), &mut stdout, &limits)?;

    Ok(ExitCode::SUCCESS)
}
