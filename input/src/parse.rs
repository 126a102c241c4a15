//! Puzzle line parser.
//!
//! One instance per line:
//!
//! ```text
//! [.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
//!  ^^^^   ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^  ^^^^^^^^^
//!  target operations (bit indices)        requirements
//! ```
//!
//! `#` marks a bit that must end up on. `()` is an operation that toggles
//! nothing. The trailing `{...}` block is optional and is carried through
//! unread by the solver.

use regex::Regex;
use thiserror::Error;
use togglesolve::{BitVector, ToggleOperation};

/// One parsed puzzle instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    /// Target pattern; its length is the pattern length.
    pub target: BitVector,
    /// Operations in column order.
    pub operations: Vec<ToggleOperation>,
    /// Values of the trailing `{...}` block, empty if absent.
    pub requirements: Vec<u64>,
}

impl Instance {
    /// Number of pattern bits.
    pub fn pattern_length(&self) -> usize {
        self.target.len()
    }
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The line is not `[pattern] (ops)... {reqs}`.
    #[error("expected `[pattern] (i,j,...)... {{a,b,...}}`")]
    Shape,
    /// The pattern holds something other than `.` and `#`.
    #[error("pattern `{0}` may only contain `.` and `#`")]
    Pattern(String),
    /// An operation index is not a non-negative integer.
    #[error("operation {operation}: `{token}` is not a bit index")]
    Index {
        /// Zero-based operation position.
        operation: usize,
        /// The offending token.
        token: String,
    },
    /// A requirement is not a non-negative integer.
    #[error("requirement `{0}` is not a non-negative integer")]
    Requirement(String),
}

/// A parse failure on a specific line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// One-based line number.
    pub line: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

/// Compiled grammar for puzzle lines.
#[derive(Debug, Clone)]
pub struct LineParser {
    line: Regex,
    group: Regex,
}

impl LineParser {
    /// Compile the line grammar.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the grammar fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            line: Regex::new(r"^\s*\[([^\]]*)\]\s*((?:\([^)]*\)\s*)*)(?:\{([^}]*)\})?\s*$")?,
            group: Regex::new(r"\(([^)]*)\)")?,
        })
    }

    /// Parse one non-blank line. `line_no` is used only for error reports.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] describing the first problem on the line.
    pub fn parse(&self, line_no: usize, text: &str) -> Result<Instance, ParseError> {
        let err = |kind| ParseError {
            line: line_no,
            kind,
        };

        let caps = self.line.captures(text).ok_or_else(|| err(ParseErrorKind::Shape))?;
        let pattern = caps.get(1).map_or("", |m| m.as_str());
        let target = BitVector::from_pattern(pattern)
            .ok_or_else(|| err(ParseErrorKind::Pattern(pattern.to_string())))?;

        let groups = caps.get(2).map_or("", |m| m.as_str());
        let mut operations = Vec::new();
        for (operation, g) in self.group.captures_iter(groups).enumerate() {
            let body = g.get(1).map_or("", |m| m.as_str());
            let indices = split_numbers::<usize>(body).map_err(|token| {
                err(ParseErrorKind::Index { operation, token })
            })?;
            operations.push(ToggleOperation::new(indices));
        }

        let requirements = match caps.get(3) {
            Some(m) => split_numbers::<u64>(m.as_str())
                .map_err(|token| err(ParseErrorKind::Requirement(token)))?,
            None => Vec::new(),
        };

        Ok(Instance {
            target,
            operations,
            requirements,
        })
    }
}

/// Comma-separated integers; blank input is an empty list.
fn split_numbers<T: std::str::FromStr>(body: &str) -> Result<Vec<T>, String> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    body.split(',')
        .map(str::trim)
        .map(|tok| tok.parse().map_err(|_| tok.to_string()))
        .collect()
}
