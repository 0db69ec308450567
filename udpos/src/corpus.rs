//! Corpus descriptions.

use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

/// Corpus split.
///
/// The variants are ordered as splits are returned by the loader:
/// train, dev, test.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Split {
    Train,
    Dev,
    Test,
}

impl Split {
    /// All splits, in loading order.
    pub const ALL: [Split; 3] = [Split::Train, Split::Dev, Split::Test];
}

impl Display for Split {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        let name = match self {
            Split::Train => "train",
            Split::Dev => "dev",
            Split::Test => "test",
        };

        fmt.write_str(name)
    }
}

/// Description of a remote corpus archive and of its layout in the
/// cache directory.
///
/// The default describes version 2 of the English Universal
/// Dependencies treebank with universal and Penn Treebank
/// part-of-speech tags:
///
/// ```
/// use std::path::Path;
///
/// use udpos::{Corpus, Split};
///
/// let corpus = Corpus::default().with_test_filename("test.txt");
/// assert_eq!(
///     corpus.split_path("data", Split::Test),
///     Path::new("data/en-ud-v2/test.txt")
/// );
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Corpus {
    name: String,
    check_file: PathBuf,
    url: String,
    train_filename: String,
    dev_filename: String,
    test_filename: String,
}

impl Default for Corpus {
    fn default() -> Self {
        Corpus {
            name: "en-ud-v2".to_owned(),
            check_file: PathBuf::from("en-ud-v2/en-ud-tag.v2.train.txt"),
            url: "https://bitbucket.org/sivareddyg/public/downloads/en-ud-v2.zip".to_owned(),
            train_filename: "en-ud-tag.v2.train.txt".to_owned(),
            dev_filename: "en-ud-tag.v2.dev.txt".to_owned(),
            test_filename: "en-ud-tag.v2.test.txt".to_owned(),
        }
    }
}

impl Corpus {
    /// Name of the directory that holds the splits, relative to the
    /// cache directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File whose presence in the cache directory indicates that the
    /// archive was already unpacked.
    pub fn check_file(&self) -> &Path {
        &self.check_file
    }

    /// URL of the corpus archive.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// File name of a split.
    pub fn filename(&self, split: Split) -> &str {
        match split {
            Split::Train => &self.train_filename,
            Split::Dev => &self.dev_filename,
            Split::Test => &self.test_filename,
        }
    }

    /// Path of a split: `<cache_dir>/<name>/<split filename>`.
    pub fn split_path(&self, cache_dir: impl AsRef<Path>, split: Split) -> PathBuf {
        cache_dir
            .as_ref()
            .join(&self.name)
            .join(self.filename(split))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_check_file(mut self, check_file: impl Into<PathBuf>) -> Self {
        self.check_file = check_file.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_train_filename(mut self, filename: impl Into<String>) -> Self {
        self.train_filename = filename.into();
        self
    }

    pub fn with_dev_filename(mut self, filename: impl Into<String>) -> Self {
        self.dev_filename = filename.into();
        self
    }

    pub fn with_test_filename(mut self, filename: impl Into<String>) -> Self {
        self.test_filename = filename.into();
        self
    }
}
