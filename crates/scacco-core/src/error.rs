//! Error types for square and move-text parsing.

/// A square label that does not name one of the 64 board squares.
///
/// Valid labels are a file letter a-h followed by a rank digit 1-8,
/// in either case ("e4", "E4").
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square \"{label}\": expected a file a-h followed by a rank 1-8")]
pub struct InvalidSquare {
    /// The rejected label.
    pub label: String,
}

impl InvalidSquare {
    /// Record `label` as the rejected input.
    pub fn new(label: impl Into<String>) -> InvalidSquare {
        InvalidSquare {
            label: label.into(),
        }
    }
}

/// Errors from parsing move text such as "e2e4".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    /// The text is not an origin label directly followed by a destination label.
    #[error("invalid move \"{text}\": expected four characters, origin then destination")]
    WrongShape {
        /// The rejected text.
        text: String,
    },
    /// The origin or destination is not a valid square label.
    #[error(transparent)]
    InvalidSquare(#[from] InvalidSquare),
}
