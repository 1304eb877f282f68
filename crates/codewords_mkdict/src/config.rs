//! Configuration for a dictionary build.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::filter::WordFilter;

/// Where the WordNet 3.1 database tarball is published.
pub const WORDNET_URL: &str = "http://wordnetcode.princeton.edu/wn3.1.dict.tar.gz";

/// Where the generated lists go, relative to the workspace root.
pub const DEFAULT_OUT_DIR: &str = "crates/codewords_core/src/words";

/// Default HTTP timeout for the download.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for one `mkdict` run.
///
/// The defaults reproduce a plain `mkdict` invocation from the workspace root.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Download URL of the WordNet tarball. Its last path segment names the
    /// local cache file.
    pub url: String,

    /// Directory searched for a cached copy of the tarball.
    pub cache_dir: PathBuf,

    /// Directory receiving `adjectives.rs` and `nouns.rs`.
    pub out_dir: PathBuf,

    /// Length thresholds for candidate words.
    pub filter: WordFilter,

    /// Whole-request timeout for the download.
    pub timeout: Duration,

    /// Keep a downloaded tarball in `cache_dir` for later runs.
    pub save_archive: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            url: WORDNET_URL.to_string(),
            cache_dir: PathBuf::from("."),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            filter: WordFilter::default(),
            timeout: DEFAULT_TIMEOUT,
            save_archive: false,
        }
    }
}

impl BuildConfig {
    /// Sets the download URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the cache directory.
    #[must_use]
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Sets the word filter.
    #[must_use]
    pub fn with_filter(mut self, filter: WordFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the download timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets whether a downloaded tarball is saved to the cache directory.
    #[must_use]
    pub fn with_save_archive(mut self, save: bool) -> Self {
        self.save_archive = save;
        self
    }

    /// Path of the cached tarball: the URL's file name inside `cache_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfig`](crate::ErrorKind::InvalidConfig)
    /// if the URL has no file name.
    pub fn archive_path(&self) -> Result<PathBuf> {
        Ok(self.cache_dir.join(archive_file_name(&self.url)?))
    }

    /// Checks the configuration before any I/O happens.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfig`](crate::ErrorKind::InvalidConfig)
    /// for a URL without a file name or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        archive_file_name(&self.url)?;
        if self.timeout.is_zero() {
            return Err(Error::invalid_config("timeout must be greater than zero"));
        }
        Ok(())
    }

    /// Output path for a generated file.
    #[must_use]
    pub fn out_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.out_dir.join(file_name)
    }
}

/// Returns the last path segment of `url`, used as the local file name.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidConfig`](crate::ErrorKind::InvalidConfig)
/// if the URL has no `/` or ends with one.
pub fn archive_file_name(url: &str) -> Result<&str> {
    match url.rsplit_once('/') {
        None => Err(Error::invalid_config(format!(
            "cannot parse WordNet URL: {url}"
        ))),
        Some((_, "")) => Err(Error::invalid_config(format!(
            "cannot parse file name from WordNet URL: {url}"
        ))),
        Some((_, name)) => Ok(name),
    }
}
