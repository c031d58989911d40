//! Error types for puzzle configuration problems.
//!
//! Domain-level outcomes are not errors: an unsatisfiable puzzle or a piece
//! that fits nowhere surfaces as `success = false` in the solve report. Only
//! malformed input is rejected up front.

use std::fmt;

/// Configuration errors detected before the search starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// A piece was supplied with no cells at all.
    ///
    /// Rejected before orientation generation; an empty piece would otherwise
    /// silently produce a single empty orientation and nonsense placements.
    EmptyPiece {
        /// Position of the piece in the input list.
        index: usize,
        /// Display name of the offending piece.
        name: String,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPiece { index, name } => {
                write!(f, "piece '{name}' (index {index}) has no cells")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}
