//! Error types for square parsing and path queries.

use std::fmt;

use crate::board::types::Square;

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: i32 },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: i32 },
    /// Square index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Unparseable square notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Which end of a path query an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Error type for shortest-path queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// One of the endpoints is not a square on the board.
    InvalidInput {
        endpoint: Endpoint,
        source: SquareError,
    },
    /// The search ran out of squares without reaching `end`.
    ///
    /// The 8x8 knight graph is connected, so this only signals a broken graph.
    Unreachable { start: Square, end: Square },
}

impl PathError {
    pub(crate) fn invalid(endpoint: Endpoint) -> impl FnOnce(SquareError) -> Self {
        move |source| PathError::InvalidInput { endpoint, source }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidInput { endpoint, source } => {
                write!(f, "Invalid {endpoint} square: {source}")
            }
            PathError::Unreachable { start, end } => {
                write!(f, "No knight path from {start} to {end}")
            }
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathError::InvalidInput { source, .. } => Some(source),
            PathError::Unreachable { .. } => None,
        }
    }
}

impl From<(Endpoint, SquareError)> for PathError {
    fn from((endpoint, source): (Endpoint, SquareError)) -> Self {
        PathError::InvalidInput { endpoint, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_square_error_file_bounds() {
        let err = SquareError::FileOutOfBounds { file: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_square_error_rank_bounds() {
        let err = SquareError::RankOutOfBounds { rank: -1 };
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_invalid_input_names_endpoint() {
        let err = PathError::InvalidInput {
            endpoint: Endpoint::Start,
            source: SquareError::FileOutOfBounds { file: 8 },
        };
        let msg = err.to_string();
        assert!(msg.contains("start"));
        assert!(msg.contains('8'));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_unreachable_message() {
        let err = PathError::Unreachable {
            start: Square::new(0, 0).unwrap(),
            end: Square::new(7, 7).unwrap(),
        };
        assert!(err.to_string().contains("[7, 7]"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_clone() {
        let err = PathError::from((Endpoint::End, SquareError::RankOutOfBounds { rank: 9 }));
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
