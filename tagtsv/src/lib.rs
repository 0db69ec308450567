mod error;
pub use crate::error::{Error, ParseError};

pub mod io;
pub use crate::io::read_file;

#[cfg(test)]
mod tests;
