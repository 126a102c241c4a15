//! `togglesolve` — Solves a file of toggle puzzles and sums the minimum presses.
//!
//! Each non-blank input line is one puzzle:
//! ```text
//! [.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
//! ```
//!
//! **Usage:**
//! ```text
//! togglesolve [INPUT] [--config <path>] [--strict-indices] [--max-free-variables <k>]
//!             [--fail-on-malformed] [--json] [-v...]
//! ```
//!
//! Unsolvable puzzles are left out of the total. Exits non-zero if the input
//! or configuration cannot be read.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use togglesolve_input::{load_manual, solve_all, Report, SolverConfig, Status};

/// Solve toggle puzzles with the fewest operations.
#[derive(Parser)]
#[command(
    name = "togglesolve",
    about = "Find the fewest toggle operations that light each target pattern"
)]
struct Args {
    /// Puzzle file, one instance per line (default: input_day_10).
    #[arg(default_value = "input_day_10")]
    input: PathBuf,

    /// TOML configuration file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject operation indices outside the pattern instead of ignoring them.
    #[arg(long)]
    strict_indices: bool,

    /// Refuse instances with more free variables than this.
    #[arg(long, value_name = "K")]
    max_free_variables: Option<usize>,

    /// Stop at the first malformed line instead of skipping it.
    #[arg(long)]
    fail_on_malformed: bool,

    /// Print the full report as JSON.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::load(path)?,
            None => SolverConfig::default(),
        };
        config.strict_indices |= self.strict_indices;
        config.fail_on_malformed |= self.fail_on_malformed;
        if self.max_free_variables.is_some() {
            config.max_free_variables = self.max_free_variables;
        }
        Ok(config)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.solver_config()?;
    tracing::debug!(?config, "configuration");

    let manual = load_manual(&args.input, &config)
        .with_context(|| format!("loading puzzles from {}", args.input.display()))?;
    let report = solve_all(&manual, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.verbose > 0);
    }
    Ok(())
}

fn print_report(report: &Report, detailed: bool) {
    if detailed {
        for inst in &report.instances {
            let status = match inst.status {
                Status::Solved => "SOLVED",
                Status::NoSolution => "NONE  ",
                Status::Rejected => "REJECT",
            };
            print!(
                "[{}] line {} ({} bits, {} ops)",
                status, inst.line, inst.bits, inst.operations
            );
            if let (Some(p), Some(w)) = (inst.presses, &inst.witness) {
                print!(" — {p} presses {w:?}");
            }
            if let Some(reason) = &inst.reason {
                print!(" — {reason}");
            }
            println!();
        }
        for bad in &report.malformed {
            println!("[SKIP  ] line {} — {}", bad.line, bad.message);
        }
        println!();
    }

    println!(
        "Summary: {} solved, {} unsolvable, {} rejected, {} malformed",
        report.count(Status::Solved),
        report.count(Status::NoSolution),
        report.count(Status::Rejected),
        report.malformed.len()
    );
    println!("Total presses: {}", report.total);
}
