//! Filtered directory copy built on the forward walker.

use crate::error::{WalkError, WalkResult};
use crate::search;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use stencil_types::{SearchDirection, SearchOptions};
use tracing::debug;

/// Copy every file matched under `source_root` to the same relative
/// location under `dest_root`, creating missing destination directories.
///
/// Forward traversal is implied; a reverse direction in `options` is
/// overridden. Existing destination files are silently skipped unless
/// `overwrite` is set, which makes the call idempotent for
/// `overwrite = false`. Returns the destination paths actually written.
pub fn copy_tree(
    source_root: &Utf8Path,
    dest_root: &Utf8Path,
    overwrite: bool,
    options: &SearchOptions,
) -> WalkResult<Vec<Utf8PathBuf>> {
    let options = SearchOptions {
        direction: SearchDirection::Forward,
        ..options.clone()
    };
    let sources = search(source_root, &options)?;

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let rel = source
            .strip_prefix(source_root)
            .map_err(|_| WalkError::OutsideRoot {
                path: source.clone(),
                root: source_root.to_path_buf(),
            })?;
        let dest = dest_root.join(rel);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent.as_std_path())?;
        }
        if dest.exists() && !overwrite {
            debug!(%dest, "destination exists, skipping");
            continue;
        }

        fs::copy(source.as_std_path(), dest.as_std_path())?;
        written.push(dest);
    }

    Ok(written)
}
