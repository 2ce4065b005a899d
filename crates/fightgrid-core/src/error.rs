use std::fmt;
use thiserror::Error;

/// One of the six anchor positions of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorSlot {
    Column(usize),
    Row(usize),
}

impl fmt::Display for AnchorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnchorSlot::Column(i) => write!(f, "column {}", i + 1),
            AnchorSlot::Row(i) => write!(f, "row {}", i + 1),
        }
    }
}

/// Why a generation attempt produced no grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// No fighter meets the minimum degree
    EmptyPool { min_degree: usize },
    /// Every ranked candidate for a slot was already an anchor
    Exhausted { slot: AnchorSlot },
    /// Anchors were found but some cells have no connector
    Unsolvable { cells: usize },
    /// The retry budget ran out
    AttemptsExhausted { attempts: usize },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::EmptyPool { min_degree } => {
                write!(f, "no fighter has at least {} recorded fights", min_degree)
            }
            FailureReason::Exhausted { slot } => {
                write!(f, "ran out of candidates for {}", slot)
            }
            FailureReason::Unsolvable { cells } => {
                write!(f, "{} cells have no valid connector", cells)
            }
            FailureReason::AttemptsExhausted { attempts } => {
                write!(f, "no puzzle found after {} attempts", attempts)
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Unknown fighter: {id}")]
    UnknownFighter { id: String },

    #[error("Puzzle generation failed: {0}")]
    GenerationFailure(FailureReason),

    #[error("Invalid cell: ({row}, {col})")]
    InvalidCell { row: usize, col: usize },

    #[error("Duplicate anchor: {id}")]
    DuplicateAnchor { id: String },

    #[error("Invalid data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

impl GridError {
    pub(crate) fn unknown(id: &str) -> Self {
        GridError::UnknownFighter { id: id.to_string() }
    }

    /// Whether a fresh generation attempt (new first anchor) could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            GridError::GenerationFailure(reason) => matches!(
                reason,
                FailureReason::Exhausted { .. } | FailureReason::Unsolvable { .. }
            ),
            _ => false,
        }
    }
}

impl From<FailureReason> for GridError {
    fn from(reason: FailureReason) -> Self {
        GridError::GenerationFailure(reason)
    }
}

pub type GridResult<T> = Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_reasons() {
        assert!(GridError::from(FailureReason::Exhausted { slot: AnchorSlot::Row(1) }).is_retryable());
        assert!(GridError::from(FailureReason::Unsolvable { cells: 2 }).is_retryable());
        assert!(!GridError::from(FailureReason::EmptyPool { min_degree: 10 }).is_retryable());
        assert!(!GridError::from(FailureReason::AttemptsExhausted { attempts: 5 }).is_retryable());
        assert!(!GridError::unknown("nobody").is_retryable());
    }

    #[test]
    fn test_messages() {
        let err = GridError::from(FailureReason::Exhausted { slot: AnchorSlot::Column(2) });
        assert_eq!(err.to_string(), "Puzzle generation failed: ran out of candidates for column 3");
        assert_eq!(GridError::unknown("x").to_string(), "Unknown fighter: x");
    }
}
