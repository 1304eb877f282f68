//! Word list source generation.
//!
//! Each list becomes a Rust module holding one `pub static` slice literal,
//! ready to be committed under `codewords_core/src/words`.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// First line of every generated file.
pub const BANNER: &str = "// Code generated by mkdict. DO NOT EDIT.";

/// Second line of every generated file.
pub const ATTRIBUTION: &str = "// Derived from Princeton WordNet https://wordnet.princeton.edu";

/// Renders `words` as a `pub static NAME: &[&str]` source file.
///
/// Words are written verbatim; the filter has already limited them to
/// lowercase ASCII letters, so no escaping is needed.
#[must_use]
pub fn render_list(name: &str, words: &[String]) -> String {
    let mut out = String::with_capacity(64 + words.iter().map(|w| w.len() + 8).sum::<usize>());
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(ATTRIBUTION);
    out.push_str("\n\n");
    // Writing to a String cannot fail.
    let _ = writeln!(out, "pub static {name}: &[&str] = &[");
    for word in words {
        let _ = writeln!(out, "    \"{word}\",");
    }
    out.push_str("];\n");
    out
}

/// Renders one list into a temporary file inside `dir`.
///
/// The file is removed when dropped; persist it onto its final name once
/// every list has been staged.
///
/// # Errors
///
/// Returns [`ErrorKind::Io`](crate::ErrorKind::Io) if the file cannot be
/// created or written.
pub fn stage_list(dir: &Path, name: &str, words: &[String]) -> Result<NamedTempFile> {
    let mut staged = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    staged
        .write_all(render_list(name, words).as_bytes())
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| Error::io(staged.path(), e))?;
    Ok(staged)
}
