use std::{error::Error as StdError, fmt, io::Error as IoError};

use serde_json::Error as JsonError;

/// `Result<_, ParseError>`
pub type ParseResult<T> = Result<T, ParseError>;

/// Anything that could go wrong while parsing a [`Chart`](crate::Chart).
#[derive(Debug)]
pub enum ParseError {
    /// Some IO operation failed.
    IoError(IoError),
    /// The content is not a valid chart document.
    Json(JsonError),
    /// The tempo is not a positive finite number.
    InvalidTempo,
    /// A note does not consist of five finite numbers.
    InvalidNote {
        /// Index of the note inside the chart's note list.
        idx: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(_) => f.write_str("IO error"),
            Self::Json(_) => f.write_str("failed to deserialize chart"),
            Self::InvalidTempo => f.write_str("tempo must be a positive number"),
            Self::InvalidNote { idx } => {
                write!(f, "note at index {} must consist of five numbers", idx)
            }
        }
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::IoError(inner) => Some(inner),
            Self::Json(inner) => Some(inner),
            Self::InvalidTempo | Self::InvalidNote { .. } => None,
        }
    }
}

impl From<IoError> for ParseError {
    fn from(other: IoError) -> Self {
        Self::IoError(other)
    }
}

impl From<JsonError> for ParseError {
    fn from(other: JsonError) -> Self {
        Self::Json(other)
    }
}
