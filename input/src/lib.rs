//! Puzzle input handling for togglesolve.
//!
//! Turns a text file of puzzle lines into solver inputs, solves every
//! instance in parallel, and aggregates the results.
//!
//! # Entry Point
//!
//! ```
//! use togglesolve_input::{parse_manual, solve_all, SolverConfig};
//!
//! let text = "[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}\n";
//! let config = SolverConfig::default();
//! let manual = parse_manual(text, &config).expect("valid input");
//! let report = solve_all(&manual, &config);
//! assert_eq!(report.total, 2);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod config;
pub mod parse;
pub mod report;

use std::path::Path;

use rayon::prelude::*;
use thiserror::Error;
use togglesolve::Solver;

pub use config::{ConfigError, SolverConfig};
pub use parse::{Instance, LineParser, ParseError, ParseErrorKind};
pub use report::{InstanceReport, MalformedLine, Report, Status};

/// A parsed input file.
#[derive(Debug, Clone, Default)]
pub struct Manual {
    /// Parsed instances with their one-based line numbers.
    pub entries: Vec<(usize, Instance)>,
    /// Lines skipped as malformed (empty when `fail_on_malformed` is set).
    pub malformed: Vec<ParseError>,
}

/// Failure to load an input file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The line grammar failed to compile.
    #[error("line grammar: {0}")]
    Grammar(#[from] regex::Error),
    /// A line is malformed and `fail_on_malformed` is set.
    #[error(transparent)]
    Malformed(#[from] ParseError),
}

/// Parse every non-blank line of `text`.
///
/// # Errors
///
/// Returns [`LoadError::Malformed`] for the first bad line when
/// `config.fail_on_malformed` is set; otherwise bad lines are collected in
/// [`Manual::malformed`].
pub fn parse_manual(text: &str, config: &SolverConfig) -> Result<Manual, LoadError> {
    let parser = LineParser::new()?;
    let mut manual = Manual::default();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parser.parse(i + 1, line) {
            Ok(instance) => manual.entries.push((i + 1, instance)),
            Err(e) if config.fail_on_malformed => return Err(e.into()),
            Err(e) => {
                tracing::warn!(line = e.line, error = %e.kind, "skipping malformed line");
                manual.malformed.push(e);
            }
        }
    }
    Ok(manual)
}

/// Read and parse an input file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, and otherwise the
/// errors of [`parse_manual`].
pub fn load_manual(path: &Path, config: &SolverConfig) -> Result<Manual, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_manual(&text, config)
}

/// Solve every instance of `manual` across the rayon pool.
///
/// Results are reported in input order regardless of completion order.
pub fn solve_all(manual: &Manual, config: &SolverConfig) -> Report {
    let solver = Solver::new(config.solve_options());

    let instances: Vec<InstanceReport> = manual
        .entries
        .par_iter()
        .map(|(line, inst)| {
            let result = solver.solve(inst.pattern_length(), &inst.target, &inst.operations);
            InstanceReport::new(*line, inst.pattern_length(), inst.operations.len(), result)
        })
        .collect();

    let malformed = manual
        .malformed
        .iter()
        .map(|e| MalformedLine {
            line: e.line,
            message: e.kind.to_string(),
        })
        .collect();

    let report = Report::new(instances, malformed);
    tracing::info!(
        instances = report.instances.len(),
        solved = report.count(Status::Solved),
        unsolved = report.count(Status::NoSolution),
        rejected = report.count(Status::Rejected),
        total = report.total,
        "batch solved"
    );
    report
}
