//! The full build pipeline: acquire, extract, filter, emit.

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::archive::extract_headwords;
use crate::config::BuildConfig;
use crate::emit::stage_list;
use crate::error::{Error, Result};
use crate::filter::WordFilter;
use crate::source::{Fetch, HttpFetcher, acquire};

/// File name of the generated adjective module.
pub const ADJECTIVES_FILE: &str = "adjectives.rs";
/// File name of the generated noun module.
pub const NOUNS_FILE: &str = "nouns.rs";
/// Static name inside the adjective module.
pub const ADJECTIVES_STATIC: &str = "ADJECTIVES";
/// Static name inside the noun module.
pub const NOUNS_STATIC: &str = "NOUNS";

/// Filtered adjective and noun lists, ready to be written.
///
/// Both lists are guaranteed non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dictionary {
    adjectives: Vec<String>,
    nouns: Vec<String>,
}

impl Dictionary {
    /// Acquires the tarball per `config` and builds the filtered lists.
    ///
    /// # Errors
    ///
    /// Propagates acquisition, archive and filtering errors.
    pub fn build(config: &BuildConfig, fetcher: &impl Fetch) -> Result<Self> {
        let archive = acquire(config, fetcher)?;
        Self::from_archive(&archive.bytes, &config.filter)
    }

    /// Builds the filtered lists from tarball bytes already in memory.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::CorruptArchive`](crate::ErrorKind::CorruptArchive) if the tarball is unusable
    /// - [`ErrorKind::EmptyWordList`](crate::ErrorKind::EmptyWordList) if filtering leaves a list empty
    pub fn from_archive(bytes: &[u8], filter: &WordFilter) -> Result<Self> {
        let headwords = extract_headwords(bytes)?;

        let adjectives = filter_list("adjectives", headwords.adjectives, filter)?;
        let nouns = filter_list("nouns", headwords.nouns, filter)?;

        Ok(Self { adjectives, nouns })
    }

    /// Filtered adjectives, in index order.
    #[must_use]
    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    /// Filtered nouns, in index order.
    #[must_use]
    pub fn nouns(&self) -> &[String] {
        &self.nouns
    }

    /// Writes `adjectives.rs` and `nouns.rs` into `config.out_dir`.
    ///
    /// Both lists are rendered into temporary files in `out_dir` first and
    /// only then renamed over their targets. If the second rename fails the
    /// first target is put back, so a failed write leaves the previous pair
    /// in place.
    ///
    /// Returns the written paths.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Io`](crate::ErrorKind::Io) if a file cannot be written.
    pub fn write(&self, config: &BuildConfig) -> Result<Vec<PathBuf>> {
        let outputs = [
            (ADJECTIVES_FILE, ADJECTIVES_STATIC, &self.adjectives),
            (NOUNS_FILE, NOUNS_STATIC, &self.nouns),
        ];

        let mut staged = Vec::with_capacity(outputs.len());
        for (file, name, words) in outputs {
            let temp = stage_list(&config.out_dir, name, words)?;
            staged.push((config.out_path(file), temp));
        }

        let mut replaced: Vec<(PathBuf, Option<Vec<u8>>)> = Vec::with_capacity(staged.len());
        for (path, temp) in staged {
            let previous = fs::read(&path).ok();
            if let Err(e) = temp.persist(&path) {
                restore(&replaced);
                return Err(Error::io(path, e.error));
            }
            replaced.push((path, previous));
        }

        let written: Vec<PathBuf> = replaced.into_iter().map(|(path, _)| path).collect();
        for (path, words) in written.iter().zip([self.adjectives.len(), self.nouns.len()]) {
            info!(path = %path.display(), words, "wrote word list");
        }
        Ok(written)
    }
}

/// Puts back the files a failed [`Dictionary::write`] already replaced.
fn restore(replaced: &[(PathBuf, Option<Vec<u8>>)]) {
    for (path, previous) in replaced {
        let outcome = match previous {
            Some(bytes) => fs::write(path, bytes),
            None => fs::remove_file(path),
        };
        if let Err(e) = outcome {
            warn!(path = %path.display(), error = %e, "cannot restore previous word list");
        }
    }
}

fn filter_list(name: &str, candidates: Vec<String>, filter: &WordFilter) -> Result<Vec<String>> {
    let raw = candidates.len();
    let kept = filter.apply(candidates);
    info!(
        list = name,
        raw,
        kept = kept.len(),
        min_len = filter.min_len(),
        max_len = filter.max_len(),
        "filtered candidates"
    );
    if kept.is_empty() {
        return Err(Error::empty_word_list(name));
    }
    Ok(kept)
}

/// Runs a complete build over HTTP: validate, acquire, filter, write.
///
/// # Errors
///
/// Returns the first error of any stage; nothing is written unless both
/// lists were built.
pub fn run(config: &BuildConfig) -> Result<Vec<PathBuf>> {
    config.validate()?;
    let fetcher = HttpFetcher::new(config.timeout)?;
    let dictionary = Dictionary::build(config, &fetcher)?;
    dictionary.write(config)
}
