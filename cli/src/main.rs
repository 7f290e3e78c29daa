//! drizzle-sort CLI - Main entry point

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use drizzle_sort::Direction;
use drizzle_sort_cli::config::Config;
use drizzle_sort_cli::error::CliError;
use drizzle_sort_cli::{commands, output};

/// drizzle-sort - resolve sort parameters into joins and ORDER BY clauses
#[derive(Parser, Debug)]
#[command(name = "drizzle-sort")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: drizzle-sort.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Direction for tokens without `,asc`/`,desc`
    #[arg(long, global = true, value_parser = parse_direction)]
    default_order: Option<Direction>,

    /// Skip dotted paths that match no join shape instead of failing
    #[arg(long, global = true)]
    ignore_unsupported: bool,

    /// Log resolution steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the SELECT statement produced by the sort tokens
    Explain {
        /// Base table to select from (overrides config)
        #[arg(short, long)]
        table: Option<String>,

        /// Sort tokens, applied in order
        #[arg(required = true, value_name = "SORT")]
        sorts: Vec<String>,
    },

    /// Show the join shape, joins and ordering of each sort token
    Plan {
        #[arg(required = true, value_name = "SORT")]
        sorts: Vec<String>,
    },
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    s.parse::<Direction>().map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", output::err_line(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<String, CliError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Explain { table, sorts } => {
            let config = config.with_overrides(table, cli.default_order, cli.ignore_unsupported);
            let mut sql = commands::explain::run(&config, &sorts)?;
            sql.push('\n');
            Ok(sql)
        }
        Command::Plan { sorts } => {
            let config = config.with_overrides(None, cli.default_order, cli.ignore_unsupported);
            commands::plan::run(&config, &sorts)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_default()?,
    };
    Ok(config)
}
