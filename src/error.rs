//! Planning error taxonomy.

use std::error::Error;
use std::fmt;

/// An error produced by the patrol-planning pipeline.
///
/// Both variants are fatal for the planning run they occur in; neither is
/// retryable with the same inputs.
///
/// # Examples
///
/// ```
/// use ugv_patrol::PlanError;
///
/// let err = PlanError::InvalidInput("no mission points".into());
/// assert!(err.to_string().contains("no mission points"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The caller supplied unusable input: neither mission points nor a
    /// seed at the entry point, an empty node list at the matrix builder,
    /// or degenerate clustering parameters.
    InvalidInput(String),
    /// The route solver could not produce a feasible path under the given
    /// start/end constraints.
    NoSolution,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InvalidInput(reason) => write!(f, "invalid input: {reason}"),
            PlanError::NoSolution => write!(f, "no feasible route exists"),
        }
    }
}

impl Error for PlanError {}
