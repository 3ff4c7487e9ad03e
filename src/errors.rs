use schema::Generation;
use std::path::PathBuf;

/// Errors raised while loading species patch data
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A data file could not be read
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file is not valid RON for the expected record type
    #[error("malformed data for generation {gen}: {source}")]
    Ron {
        gen: Generation,
        #[source]
        source: ron::error::SpannedError,
    },
}

impl DataError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Reasons a text, packed or structured payload could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing to parse after trimming
    #[error("input is empty")]
    Empty,

    /// A packed entry did not have the fixed number of fields
    #[error("expected {expected} packed fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A numeric field did not hold a number in range
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A field held a value outside its vocabulary
    #[error("invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    /// A stat label in an EVs/IVs line was not recognized
    #[error("unknown stat {0:?}")]
    UnknownStat(String),

    /// A set's first line did not name a species
    #[error("missing species in {0:?}")]
    MissingSpecies(String),

    /// The structured form lacked the required shape
    #[error("malformed structured team: {0}")]
    Structured(String),
}

impl ParseError {
    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }

    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Structured(err.to_string())
    }
}

/// Type alias for Results using DataError
pub type DataResult<T> = Result<T, DataError>;

/// Type alias for Results using ParseError
pub type ParseResult<T> = Result<T, ParseError>;
