use thiserror::Error;

/// Failure modes that can surface while reading an instance file.
///
/// Anything in here aborts the job; there is no partial-parse recovery.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("instance file is empty")]
    EmptyFile,

    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MissingFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: field {field:?} is not numeric: {value:?}")]
    NotNumeric {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("declared customer count {declared} does not match {found} node records found")]
    NodeCountMismatch { declared: usize, found: usize },

    #[error("instance declares zero sources")]
    NoSources,

    #[error("I/O error reading instance file")]
    Io(#[from] std::io::Error),
}
