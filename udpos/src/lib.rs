//! Loader for the English Universal Dependencies part-of-speech corpus.
//!
//! The corpus is downloaded as an archive into a cache directory the
//! first time it is needed. Its train, dev and test splits are files
//! in the three-column format read by [`tagtsv`].

mod error;
pub use error::{Error, FetchError};

mod corpus;
pub use corpus::{Corpus, Split};

pub mod fetch;
pub use fetch::{ensure_extracted, Fetch};
#[cfg(feature = "network")]
pub use fetch::HttpFetcher;

mod dataset;
#[cfg(feature = "network")]
pub use dataset::ud_pos_dataset;
pub use dataset::{SplitSelection, Splits, UdPos, DEFAULT_CACHE_DIR};

pub use tagged::{Sentence, TaggedToken};
