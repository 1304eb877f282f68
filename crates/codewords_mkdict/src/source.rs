//! Acquiring the WordNet tarball.
//!
//! A cached copy in the cache directory wins; otherwise the tarball is
//! downloaded in full into memory.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::BuildConfig;
use crate::error::{Error, Result};

/// Fetches the bytes behind a URL.
pub trait Fetch {
    /// Downloads `url` completely.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::SourceUnavailable`](crate::ErrorKind::SourceUnavailable)
    /// if the request fails or the body cannot be read to the end.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP fetcher with a whole-request timeout.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfig`](crate::ErrorKind::InvalidConfig)
    /// if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("codewords-mkdict/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::invalid_config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::source_unavailable(url, format!("download failed: {e}")))?;

        let body = response
            .bytes()
            .map_err(|e| Error::source_unavailable(url, format!("failed to read body: {e}")))?;

        Ok(body.to_vec())
    }
}

/// Where an acquired archive came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArchiveOrigin {
    /// Read from a local file.
    Cache(PathBuf),
    /// Downloaded from a URL.
    Download(String),
}

/// The raw tarball bytes and their origin.
#[derive(Clone, Debug)]
pub struct AcquiredArchive {
    /// Compressed tarball contents.
    pub bytes: Vec<u8>,
    /// Where they came from.
    pub origin: ArchiveOrigin,
}

/// Reads the cached tarball if present, otherwise downloads it with `fetcher`.
///
/// With `save_archive` set, a downloaded tarball is written to the cache path.
///
/// # Errors
///
/// - [`ErrorKind::InvalidConfig`](crate::ErrorKind::InvalidConfig) if the URL has no file name
/// - [`ErrorKind::SourceUnavailable`](crate::ErrorKind::SourceUnavailable) if the download fails
/// - [`ErrorKind::Io`](crate::ErrorKind::Io) if saving the download fails
pub fn acquire(config: &BuildConfig, fetcher: &impl Fetch) -> Result<AcquiredArchive> {
    let path = config.archive_path()?;

    match fs::read(&path) {
        Ok(bytes) => {
            info!(path = %path.display(), bytes = bytes.len(), "using cached WordNet archive");
            return Ok(AcquiredArchive {
                bytes,
                origin: ArchiveOrigin::Cache(path),
            });
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no usable cached archive");
        }
    }

    info!(url = %config.url, timeout = ?config.timeout, "downloading WordNet archive");
    let bytes = fetcher.fetch(&config.url)?;
    info!(bytes = bytes.len(), "download complete");

    if config.save_archive {
        fs::write(&path, &bytes).map_err(|e| Error::io(&path, e))?;
        info!(path = %path.display(), "saved archive for later runs");
    }

    Ok(AcquiredArchive {
        bytes,
        origin: ArchiveOrigin::Download(config.url.clone()),
    })
}
