use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;

/// Regular files directly inside `dir`, in the order the filesystem yields them.
///
/// Sub-directories and other entry kinds are skipped; nothing is recursed into.
pub fn regular_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else {
            debug!("Skipping non-file: {:?}", path);
        }
    }
    Ok(files)
}
