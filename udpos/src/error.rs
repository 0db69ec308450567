use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::corpus::Split;

/// Corpus loading error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The corpus archive could not be made available in the cache.
    #[error("cannot fetch corpus")]
    Fetch(#[from] FetchError),

    /// A split file could not be read or parsed.
    #[error("cannot read {split} split from {path:?}")]
    Read {
        split: Split,
        path: PathBuf,
        #[source]
        source: tagtsv::Error,
    },
}

/// Errors in downloading and unpacking a corpus archive.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("error writing to the cache directory")]
    IO(#[from] io::Error),

    #[cfg(feature = "network")]
    #[error("error downloading corpus archive")]
    Http(#[from] reqwest::Error),

    #[cfg(feature = "network")]
    #[error("error extracting corpus archive")]
    Archive(#[from] zip::result::ZipError),

    /// The archive format cannot be derived from the URL or is not
    /// supported.
    #[error("unsupported archive: {url:?}")]
    UnsupportedArchive { url: String },

    /// The marker file is still absent after unpacking the archive.
    #[error("archive does not contain the check file {path:?}")]
    MissingCheckFile { path: PathBuf },
}
