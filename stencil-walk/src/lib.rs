//! Filesystem engine for stencil.
//!
//! Responsibilities:
//! - [`search`]: recursive, filterable directory traversal in two
//!   directions (forward into subdirectories, reverse up through parents).
//! - [`copy_tree`]: materialize a filtered file set under a new root,
//!   preserving relative structure.
//! - [`rewrite`]: literal `{{TOKEN}}` substitution over a file set.
//!
//! All returned sequences are fully materialized and deterministically
//! ordered: directory entries are visited in name order, subdirectories
//! expanded inline (depth-first).

mod copy;
mod error;
mod rewrite;

pub use copy::copy_tree;
pub use error::{WalkError, WalkResult};
pub use rewrite::rewrite;

use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use stencil_types::{SearchDirection, SearchOptions};

/// Search for files reachable from `start` under the given options.
///
/// Fails with [`WalkError::NotADirectory`] when `start` is not a directory.
/// Empty include-sets impose no restriction; exclusion always wins over
/// inclusion. `depth` counts remaining hops: `Some(0)` limits the search to
/// the start directory's own files in both directions.
pub fn search(start: &Utf8Path, options: &SearchOptions) -> WalkResult<Vec<Utf8PathBuf>> {
    if !start.is_dir() {
        return Err(WalkError::NotADirectory {
            path: start.to_path_buf(),
        });
    }

    let mut found = Vec::new();
    match options.direction {
        SearchDirection::Forward => walk_forward(start, options.depth, options, &mut found)?,
        SearchDirection::Reverse => walk_reverse(start, options.depth, options, &mut found)?,
    }
    Ok(found)
}

fn walk_forward(
    dir: &Utf8Path,
    depth: Option<u32>,
    options: &SearchOptions,
    found: &mut Vec<Utf8PathBuf>,
) -> WalkResult<()> {
    for (name, path) in sorted_entries(dir)? {
        if path.is_dir() {
            // A directory consumes one hop; children are gated on its bare name.
            if depth == Some(0) || !directory_allowed(&name, options) {
                continue;
            }
            walk_forward(&path, depth.map(|d| d - 1), options, found)?;
        } else if path.is_file() && file_allowed(&name, options) {
            found.push(path);
        }
    }
    Ok(())
}

fn walk_reverse(
    dir: &Utf8Path,
    depth: Option<u32>,
    options: &SearchOptions,
    found: &mut Vec<Utf8PathBuf>,
) -> WalkResult<()> {
    for (name, path) in sorted_entries(dir)? {
        if path.is_file() && file_allowed(&name, options) {
            found.push(path);
        }
    }

    // Hop to the parent scope unless depth is spent or the walk has
    // reached the filesystem root.
    if depth == Some(0) {
        return Ok(());
    }
    let Some(parent) = dir.parent() else {
        return Ok(());
    };
    let Some(parent_name) = parent.file_name() else {
        return Ok(());
    };
    if !directory_allowed(parent_name, options) {
        return Ok(());
    }
    walk_reverse(parent, depth.map(|d| d - 1), options, found)
}

/// Directory entries of `dir` as `(bare name, full path)`, name-sorted.
fn sorted_entries(dir: &Utf8Path) -> WalkResult<Vec<(String, Utf8PathBuf)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir.as_std_path())? {
        let entry = entry?;
        let path = Utf8PathBuf::from_path_buf(entry.path())
            .map_err(|path| WalkError::NonUtf8Path { path })?;
        let Some(name) = path.file_name() else {
            continue;
        };
        entries.push((name.to_string(), path));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

fn directory_allowed(name: &str, options: &SearchOptions) -> bool {
    if !options.include_directories.is_empty() && !options.include_directories.contains(name) {
        return false;
    }
    !options.exclude_directories.contains(name)
}

fn file_allowed(name: &str, options: &SearchOptions) -> bool {
    let ext = extension_of(name);

    if !options.include_file_names.is_empty() && !options.include_file_names.contains(name) {
        return false;
    }
    if !options.include_extensions.is_empty() && !options.include_extensions.contains(ext) {
        return false;
    }
    if options.exclude_file_names.contains(name) {
        return false;
    }
    !options.exclude_extensions.contains(ext)
}

/// Substring after the last `.`, or empty when the name carries no dot.
fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => "",
    }
}
