//! Shared fixtures: in-memory WordNet-shaped tarballs and an offline fetcher.

use std::cell::Cell;

use codewords::mkdict::{Error, Fetch, Result};
use flate2::Compression;
use flate2::write::GzEncoder;

pub const ADJ_INDEX: &str = "  1 This software and database is being provided to you, the LICENSEE, by
  2 Princeton University under the following license.
happy a 4 3 ! & + 4 2 01148283 01048406 02565583 01050088
ice-cold a 1 1 & 1 0 01254654
cat a 1 1 & 1 0 00000001
well_known a 1 1 & 1 0 00000002
blue a 7 5 ! @ & ; + 7 1 00370869
serene a 2 2 & + 2 1 00529657 01791705
internationalistic a 1 1 & 1 0 00000003
";

pub const NOUN_INDEX: &str = "  1 This software and database is being provided to you, the LICENSEE, by
cat n 8 4 @ ~ %p + 8 1 02121620 10153414 03608870 02985606
lantern n 1 2 @ ~ 1 0 03646809
ice_cream n 1 2 @ ~ 1 0 07614198
lantern n 1 2 @ ~ 1 0 03646809
o'clock n 1 1 @ 1 0 00000004
4wd n 1 1 @ 1 0 00000005
harbor n 2 3 @ ~ + 2 1 08553280 03483823
";

pub const ARCHIVE_NAME: &str = "wn-test.dict.tar.gz";
pub const ARCHIVE_URL: &str = "http://wordnet.invalid/download/wn-test.dict.tar.gz";

/// Builds a gzipped tarball holding `files`.
pub fn tarball(files: &[(&str, &str)]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (path, contents) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        builder
            .append_data(&mut header, path, contents.as_bytes())
            .unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

/// A tarball laid out like the WordNet 3.1 distribution.
pub fn wordnet_tarball() -> Vec<u8> {
    tarball(&[
        ("dict/index.adj", ADJ_INDEX),
        ("dict/index.noun", NOUN_INDEX),
        ("dict/index.verb", "run v 41 5 @ ~ * > + 41 24 01926311\n"),
    ])
}

/// Serves a fixed body, or fails as if offline. Counts calls.
pub struct StubFetcher {
    body: Option<Vec<u8>>,
    pub calls: Cell<usize>,
}

impl StubFetcher {
    pub fn serving(body: Vec<u8>) -> Self {
        Self {
            body: Some(body),
            calls: Cell::new(0),
        }
    }

    pub fn offline() -> Self {
        Self {
            body: None,
            calls: Cell::new(0),
        }
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.set(self.calls.get() + 1);
        self.body
            .clone()
            .ok_or_else(|| Error::source_unavailable(url, "offline"))
    }
}
