//! Fetching and unpacking of corpus archives.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::FetchError;

/// Corpus archive fetcher.
pub trait Fetch {
    /// Download the archive at `url` and unpack it into `directory`.
    ///
    /// The directory exists when this method is called.
    fn download_extract(&self, url: &str, directory: &Path) -> Result<(), FetchError>;
}

impl<F> Fetch for &F
where
    F: Fetch + ?Sized,
{
    fn download_extract(&self, url: &str, directory: &Path) -> Result<(), FetchError> {
        (**self).download_extract(url, directory)
    }
}

/// Make sure that the archive at `url` is unpacked in `directory`.
///
/// The archive is considered to be unpacked when `check_file`, relative
/// to `directory`, exists. Otherwise, the archive is downloaded and
/// unpacked using `fetcher`, after which `check_file` must exist.
pub fn ensure_extracted<F>(
    fetcher: &F,
    url: &str,
    directory: &Path,
    check_file: &Path,
) -> Result<(), FetchError>
where
    F: Fetch + ?Sized,
{
    let check_path = directory.join(check_file);
    if check_path.exists() {
        debug!("Using cached corpus: {}", check_path.display());
        return Ok(());
    }

    fs::create_dir_all(directory)?;

    info!("Fetching {} into {}", url, directory.display());
    fetcher.download_extract(url, directory)?;

    if !check_path.exists() {
        return Err(FetchError::MissingCheckFile { path: check_path });
    }

    Ok(())
}

#[cfg(feature = "network")]
pub use self::http::HttpFetcher;

#[cfg(feature = "network")]
mod http {
    use std::fs::{self, File};
    use std::io::{BufWriter, Write};
    use std::path::Path;

    use log::{debug, info, warn};
    use reqwest::blocking::Client;
    use zip::ZipArchive;

    use super::Fetch;
    use crate::error::FetchError;

    /// Fetcher for zip archives served over HTTP(S).
    ///
    /// The archive is stored in the target directory under the last
    /// segment of its URL. An archive that is already present there is
    /// unpacked without being downloaded again.
    #[derive(Clone, Debug, Default)]
    pub struct HttpFetcher {
        client: Client,
    }

    impl HttpFetcher {
        pub fn new() -> Self {
            HttpFetcher::default()
        }

        /// Construct a fetcher that uses the given HTTP client.
        pub fn with_client(client: Client) -> Self {
            HttpFetcher { client }
        }

        fn download(&self, url: &str, archive_path: &Path) -> Result<(), FetchError> {
            info!("Downloading {}", url);

            let mut response = self.client.get(url).send()?.error_for_status()?;
            let len = save_archive(archive_path, |writer| Ok(response.copy_to(writer)?))?;
            debug!("Downloaded {} bytes to {}", len, archive_path.display());

            Ok(())
        }
    }

    /// Write an archive through a partial file.
    ///
    /// The archive only appears under `archive_path` once it is complete.
    /// The partial file is removed when writing fails.
    pub(super) fn save_archive<F>(archive_path: &Path, write: F) -> Result<u64, FetchError>
    where
        F: FnOnce(&mut BufWriter<File>) -> Result<u64, FetchError>,
    {
        let partial_path = archive_path.with_extension("part");

        let result = File::create(&partial_path)
            .map_err(FetchError::from)
            .and_then(|f| {
                let mut writer = BufWriter::new(f);
                let len = write(&mut writer)?;
                writer.flush()?;
                Ok(len)
            })
            .and_then(|len| {
                fs::rename(&partial_path, archive_path)?;
                Ok(len)
            });

        if result.is_err() && partial_path.exists() {
            if let Err(err) = fs::remove_file(&partial_path) {
                warn!(
                    "Cannot remove partial download {}: {}",
                    partial_path.display(),
                    err
                );
            }
        }

        result
    }

    impl Fetch for HttpFetcher {
        fn download_extract(&self, url: &str, directory: &Path) -> Result<(), FetchError> {
            let filename = archive_filename(url).ok_or_else(|| FetchError::UnsupportedArchive {
                url: url.to_owned(),
            })?;

            let archive_path = directory.join(filename);
            if archive_path.exists() {
                debug!("Using downloaded archive {}", archive_path.display());
            } else {
                self.download(url, &archive_path)?;
            }

            info!(
                "Extracting {} into {}",
                archive_path.display(),
                directory.display()
            );
            let mut archive = ZipArchive::new(File::open(&archive_path)?)?;
            archive.extract(directory)?;

            Ok(())
        }
    }

    /// Get the file name of a zip archive from its URL.
    pub(super) fn archive_filename(url: &str) -> Option<&str> {
        let path = url.split(|c: char| c == '?' || c == '#').next()?;
        let filename = path.rsplit('/').next()?;

        if filename.len() > ".zip".len() && filename.ends_with(".zip") {
            Some(filename)
        } else {
            None
        }
    }

}
