use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use twentyfour::{DedupMode, Notation, Solutions, Solver, SolverConfig};

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

/// Twentyfour - RPN-based solver for twenty-four and similar puzzles
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Combine numbers with + - * / to reach a target value")]
#[command(version)]
pub struct CliArgs {
    /// Numbers to combine; each is used exactly once
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Target number
    #[arg(long, default_value_t = 24, allow_negative_numbers = true)]
    pub target: i64,

    /// Print solutions in infix notation
    #[arg(long)]
    pub infix: bool,

    /// Print the first solution and exit
    #[arg(long)]
    pub one: bool,

    /// Search operator combinations in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Treat equal numbers as interchangeable
    #[arg(long)]
    pub by_value: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Vec<i64>,
    pub target: i64,
    pub notation: Notation,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        let notation = if args.infix {
            Notation::Infix
        } else {
            Notation::Postfix
        };
        let dedup = if args.by_value {
            DedupMode::ByValue
        } else {
            DedupMode::BySlot
        };

        Self {
            numbers: args.numbers,
            target: args.target,
            notation,
            solver: SolverConfig {
                first_only: args.one,
                dedup,
                parallel: args.parallel,
            },
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
        .context("Failed to initialize logger")
}

/// Output lines for a finished search
pub fn format_solutions(solutions: &Solutions, notation: Notation) -> Result<Vec<String>> {
    if solutions.is_empty() {
        return Ok(vec!["No solutions found.".to_string()]);
    }

    let rendered = solutions
        .render(notation)
        .context("Failed to render solutions")?;

    let mut lines = Vec::with_capacity(rendered.len() + 1);
    lines.push("solutions:".to_string());
    lines.extend(
        rendered
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{:>3}: {}", i + 1, s)),
    );
    Ok(lines)
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    init_logging(&config.log_level)?;

    info!(
        "Searching for {} using numbers {:?}",
        config.target, config.numbers
    );

    let solver = Solver::new(config.solver);
    let solutions = solver
        .solve(&config.numbers, config.target)
        .context("Search failed")?;

    if solutions.is_empty() {
        warn!("No matching program found");
    }

    for line in format_solutions(&solutions, config.notation)? {
        println!("{}", line);
    }
    Ok(())
}
