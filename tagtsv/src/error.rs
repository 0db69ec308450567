use std::io;

use thiserror::Error;

/// Tagged corpus IO error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Error in file IO.
    #[error("error reading tagged corpus")]
    IO(#[from] io::Error),

    /// Tagged corpus parsing error.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Tagged corpus parsing errors.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// A token line does not consist of exactly a token, a universal tag
    /// and a PTB tag.
    #[error("line {line}: expected 3 tab-separated fields, found {fields}: {value:?}")]
    FieldCount {
        line: usize,
        fields: usize,
        value: String,
    },
}
