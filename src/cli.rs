use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use stackcalc::checks::{builtin_cases, run_checks};
use stackcalc::parse;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Stackcalc - Evaluate integer arithmetic expressions left to right
#[derive(Parser, Debug)]
#[command(name = "stackcalc")]
#[command(
    about = "Evaluate integer arithmetic expressions, folding operators in the order they appear"
)]
#[command(version)]
pub struct CliArgs {
    /// Expressions to evaluate, e.g. "1 + ( 2 * 3 )"
    #[arg(required_unless_present = "self_test")]
    pub expressions: Vec<String>,

    /// Run the built-in self-check table
    #[arg(long)]
    pub self_test: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub expressions: Vec<String>,
    pub self_test: bool,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            expressions: args.expressions,
            self_test: args.self_test,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliArgs::parse().into()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Evaluate one expression into the line printed for it
pub fn evaluate_line(input: &str) -> Result<String> {
    let expr = parse(input).with_context(|| format!("Invalid expression '{}'", input))?;
    let value = expr
        .evaluate()
        .with_context(|| format!("Cannot evaluate '{}'", expr))?;
    Ok(format!("{} = {}", expr, value))
}

fn run_self_test() -> Result<()> {
    let report = run_checks(&builtin_cases());
    for failure in &report.failures {
        println!("*** ERROR *** {}", failure);
    }
    println!("{} passed, {} failed", report.passed(), report.failed());

    if !report.is_success() {
        bail!("Self test failed with {} errors", report.failed());
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    init_logging(&config.log_level)?;
    debug!("Evaluating {} expressions", config.expressions.len());

    if config.self_test {
        info!("Running built-in self test");
        run_self_test()?;
    }

    for input in &config.expressions {
        match evaluate_line(input) {
            Ok(line) => println!("{}", line),
            Err(err) => {
                warn!("Stopping at '{}'", input);
                return Err(err);
            }
        }
    }

    Ok(())
}
