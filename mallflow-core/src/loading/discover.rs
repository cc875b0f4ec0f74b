use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::debug;

use crate::Error;

/// Enumerates `*.gpx` files (extension matched case-insensitively) in a
/// directory, sorted by path so sequential runs process trajectories in a
/// deterministic order.
pub fn gpx_files_in_dir(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to read directory '{}': {}", dir.display(), e),
        )
    })?;

    let files = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("gpx"))
        })
        .sorted()
        .collect::<Vec<_>>();

    debug!("Found {} trajectory files in {}", files.len(), dir.display());
    Ok(files)
}
