use std::path::{Path, PathBuf};

use log::debug;
use tagged::Sentence;

use crate::corpus::{Corpus, Split};
use crate::error::Error;
use crate::fetch::{ensure_extracted, Fetch};
#[cfg(feature = "network")]
use crate::fetch::HttpFetcher;

/// Default cache directory, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = "data";

/// Selection of corpus splits.
///
/// ```
/// use udpos::{Split, SplitSelection};
///
/// let selection = SplitSelection::only(Split::Test).with(Split::Train);
/// assert_eq!(
///     selection.selected().collect::<Vec<_>>(),
///     [Split::Train, Split::Test]
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SplitSelection {
    pub train: bool,
    pub dev: bool,
    pub test: bool,
}

impl SplitSelection {
    /// Select no split.
    pub fn none() -> Self {
        SplitSelection::default()
    }

    /// Select all splits.
    pub fn all() -> Self {
        SplitSelection {
            train: true,
            dev: true,
            test: true,
        }
    }

    /// Select a single split.
    pub fn only(split: Split) -> Self {
        SplitSelection::none().with(split)
    }

    /// Add a split to the selection.
    pub fn with(mut self, split: Split) -> Self {
        match split {
            Split::Train => self.train = true,
            Split::Dev => self.dev = true,
            Split::Test => self.test = true,
        }

        self
    }

    /// Returns `true` if `split` is selected.
    pub fn contains(&self, split: Split) -> bool {
        match split {
            Split::Train => self.train,
            Split::Dev => self.dev,
            Split::Test => self.test,
        }
    }

    /// Get the selected splits in train, dev, test order.
    pub fn selected(self) -> impl Iterator<Item = Split> {
        let all: &'static [Split] = &Split::ALL;
        all.iter()
            .copied()
            .filter(move |&split| self.contains(split))
    }

    /// Returns `true` if no split is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of selected splits.
    pub fn len(&self) -> usize {
        self.selected().count()
    }
}

impl From<Split> for SplitSelection {
    fn from(split: Split) -> Self {
        SplitSelection::only(split)
    }
}

/// Sentences of the loaded splits.
///
/// Splits that were not selected are `None`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Splits {
    pub train: Option<Vec<Sentence>>,
    pub dev: Option<Vec<Sentence>>,
    pub test: Option<Vec<Sentence>>,
}

impl Splits {
    /// Get the sentences of a split, if it was loaded.
    pub fn get(&self, split: Split) -> Option<&[Sentence]> {
        match split {
            Split::Train => self.train.as_deref(),
            Split::Dev => self.dev.as_deref(),
            Split::Test => self.test.as_deref(),
        }
    }

    fn get_mut(&mut self, split: Split) -> &mut Option<Vec<Sentence>> {
        match split {
            Split::Train => &mut self.train,
            Split::Dev => &mut self.dev,
            Split::Test => &mut self.test,
        }
    }

    /// Get the loaded splits in train, dev, test order.
    ///
    /// Splits that were not loaded are skipped, so loading train and
    /// test gives `[train, test]`.
    pub fn into_vec(self) -> Vec<Vec<Sentence>> {
        vec![self.train, self.dev, self.test]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Loader for a part-of-speech tagged corpus.
///
/// The corpus archive is fetched into the cache directory on first use.
/// Splits are read from `<cache_dir>/<corpus name>/<split filename>`.
pub struct UdPos<F> {
    cache_dir: PathBuf,
    corpus: Corpus,
    fetcher: F,
}

#[cfg(feature = "network")]
impl UdPos<HttpFetcher> {
    /// Construct a loader for the default corpus that downloads over
    /// HTTP.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        UdPos::with_fetcher(cache_dir, Corpus::default(), HttpFetcher::new())
    }
}

impl<F> UdPos<F>
where
    F: Fetch,
{
    /// Construct a loader for `corpus` that uses `fetcher` to obtain
    /// the corpus archive.
    pub fn with_fetcher(cache_dir: impl Into<PathBuf>, corpus: Corpus, fetcher: F) -> Self {
        UdPos {
            cache_dir: cache_dir.into(),
            corpus,
            fetcher,
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Load the sentences of a single split.
    pub fn load_split(&self, split: Split) -> Result<Vec<Sentence>, Error> {
        self.ensure_extracted()?;
        self.read_split(split)
    }

    /// Load the selected splits.
    ///
    /// The corpus is fetched even when no split is selected.
    pub fn load(&self, selection: SplitSelection) -> Result<Splits, Error> {
        self.ensure_extracted()?;

        let mut splits = Splits::default();
        for split in selection.selected() {
            *splits.get_mut(split) = Some(self.read_split(split)?);
        }

        Ok(splits)
    }

    fn ensure_extracted(&self) -> Result<(), Error> {
        ensure_extracted(
            &self.fetcher,
            self.corpus.url(),
            &self.cache_dir,
            self.corpus.check_file(),
        )?;

        Ok(())
    }

    fn read_split(&self, split: Split) -> Result<Vec<Sentence>, Error> {
        let path = self.corpus.split_path(&self.cache_dir, split);

        match tagtsv::read_file(&path) {
            Ok(sentences) => {
                debug!(
                    "Read {} sentences from {} split {}",
                    sentences.len(),
                    split,
                    path.display()
                );
                Ok(sentences)
            }
            Err(source) => Err(Error::Read {
                split,
                path,
                source,
            }),
        }
    }
}

/// Load splits of the default corpus, downloading it into `cache_dir`
/// when necessary.
#[cfg(feature = "network")]
pub fn ud_pos_dataset(
    cache_dir: impl Into<PathBuf>,
    selection: SplitSelection,
) -> Result<Splits, Error> {
    UdPos::new(cache_dir).load(selection)
}
