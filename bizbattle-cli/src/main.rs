//! bizbattle command-line interface
//!
//! One-shot comparisons and autocomplete queries, plus an interactive mode
//! with tab completion over company names.

mod commands;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use bizbattle::{BattleError, TieBreak};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Compare financial giants head-to-head.
#[derive(Parser, Debug)]
#[command(name = "bizbattle", version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Who wins a metric when both values are equal
    #[arg(long, global = true, env = "BIZBATTLE_TIE_BREAK", value_enum)]
    tie_break: Option<TieArg>,

    /// Width of the longest chart bar
    #[arg(long, global = true)]
    chart_width: Option<usize>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare two companies
    Compare {
        /// First company
        company_a: String,
        /// Second company
        company_b: String,
        /// Print the result as JSON instead of cards and chart
        #[arg(long)]
        json: bool,
    },
    /// List companies starting with the given text
    Suggest {
        /// Partial company name
        text: String,
    },
    /// List every known company
    List,
    /// Prompt for two companies with tab completion and compare them
    Interactive,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum TieArg {
    /// Ties go to the first company
    A,
    /// Ties go to the second company
    B,
}

impl From<TieArg> for TieBreak {
    fn from(t: TieArg) -> Self {
        match t {
            TieArg::A => Self::PreferA,
            TieArg::B => Self::PreferB,
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default = match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(be) = e.downcast_ref::<BattleError>()
                && be.is_validation()
            {
                eprintln!("{be}");
                return ExitCode::from(2);
            }
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
