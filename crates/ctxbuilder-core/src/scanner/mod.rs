/// Scanner module: lists one directory and pairs its component files.
///
/// Only the immediate children of the directory are inspected. The scan is
/// read-only and cheap enough to run on the UI thread.
pub mod matcher;

use crate::error::ScanError;
use crate::model::FileSet;
use matcher::{match_sets, Candidate};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of scanning one directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanSummary {
    pub directory: PathBuf,
    /// Complete sets, in directory enumeration order of their `.xml` files.
    pub sets: Vec<FileSet>,
    pub xml_count: usize,
    pub txt_count: usize,
    pub dat_count: usize,
    /// `.xml` files left without a complete set.
    pub incomplete: usize,
}

impl ScanSummary {
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Scan `directory` for complete `.xml`/`.txt`/`.dat` sets.
///
/// Entries that cannot be inspected are skipped; only a failure to list the
/// directory itself is reported.
pub fn scan_directory(directory: &Path) -> Result<ScanSummary, ScanError> {
    let read_dir = std::fs::read_dir(directory).map_err(|source| ScanError::ReadDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {}", directory.display(), e);
                continue;
            }
        };
        let path = entry.path();
        // Follows symlinks, so a link to a regular file counts.
        if !path.is_file() {
            continue;
        }
        match Candidate::from_path(path) {
            Some(c) => candidates.push(c),
            None => debug!("Ignoring {}", entry.file_name().to_string_lossy()),
        }
    }

    let matched = match_sets(&candidates);
    info!(
        "Scanned {}: {} complete set(s), {} incomplete ({} xml, {} txt, {} dat)",
        directory.display(),
        matched.sets.len(),
        matched.incomplete,
        matched.xml_count,
        matched.txt_count,
        matched.dat_count
    );

    Ok(ScanSummary {
        directory: directory.to_path_buf(),
        sets: matched.sets,
        xml_count: matched.xml_count,
        txt_count: matched.txt_count,
        dat_count: matched.dat_count,
        incomplete: matched.incomplete,
    })
}
