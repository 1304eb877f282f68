//! Extracting index files from the gzipped WordNet tarball.

use std::io::BufReader;
use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::lexicon::{PartOfSpeech, read_headwords};

/// Raw headwords read from the adjective and noun index files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexHeadwords {
    /// Candidates from `dict/index.adj`, in file order.
    pub adjectives: Vec<String>,
    /// Candidates from `dict/index.noun`, in file order.
    pub nouns: Vec<String>,
}

/// Walks a `.tar.gz` and parses the adjective and noun index entries.
///
/// # Errors
///
/// Returns [`ErrorKind::CorruptArchive`](crate::ErrorKind::CorruptArchive) if
/// decompression or tar iteration fails, if an index file cannot be read as
/// text, or if either index entry is absent.
pub fn extract_headwords(bytes: &[u8]) -> Result<IndexHeadwords> {
    let mut archive = Archive::new(GzDecoder::new(bytes));
    let entries = archive
        .entries()
        .map_err(|e| Error::corrupt_archive(format!("cannot read tarball: {e}")))?;

    // One slot per index file we want, filled as the entries go by.
    let mut slots = [
        (PartOfSpeech::Adjective, None),
        (PartOfSpeech::Noun, None),
    ];

    for entry in entries {
        let entry = entry.map_err(|e| Error::corrupt_archive(format!("bad tar entry: {e}")))?;
        let path = entry
            .path()
            .map_err(|e| Error::corrupt_archive(format!("bad tar entry path: {e}")))?
            .into_owned();

        let Some((pos, slot)) = slots
            .iter_mut()
            .find(|(pos, _)| path == Path::new(pos.index_entry()))
        else {
            debug!(entry = %path.display(), "skipping");
            continue;
        };
        let pos = *pos;

        let words = read_headwords(BufReader::new(entry), pos).map_err(|e| {
            Error::corrupt_archive(format!("cannot read {}: {e}", pos.index_entry()))
        })?;
        info!(entry = pos.index_entry(), candidates = words.len(), "parsed index");
        *slot = Some(words);
    }

    let [(adj_pos, adjectives), (noun_pos, nouns)] = slots;
    Ok(IndexHeadwords {
        adjectives: adjectives.ok_or_else(|| Error::missing_entry(adj_pos.index_entry()))?,
        nouns: nouns.ok_or_else(|| Error::missing_entry(noun_pos.index_entry()))?,
    })
}
