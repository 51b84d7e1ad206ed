//! In-place placeholder substitution over a file set.

use crate::error::WalkResult;
use camino::Utf8PathBuf;
use fs_err as fs;
use stencil_types::FileTokens;
use tracing::debug;

/// Replace every `{{TOKEN}}` marker in each listed file, writing the
/// result back over the same file.
///
/// Files whose bytes are not valid UTF-8 are skipped untouched. The batch
/// is not transactional: a failure partway through leaves earlier files
/// rewritten and later files untouched. Applying the same token map twice
/// is idempotent only when replacement values contain no token markers.
pub fn rewrite(files: &[Utf8PathBuf], tokens: &FileTokens) -> WalkResult<()> {
    for path in files {
        let bytes = fs::read(path.as_std_path())?;
        let Ok(text) = String::from_utf8(bytes) else {
            debug!(%path, "skipping non-UTF-8 file");
            continue;
        };

        let mut resolved = text.clone();
        for (marker, replacement) in tokens.pairs() {
            resolved = resolved.replace(marker, replacement);
        }

        // Token-free files stay byte-for-byte identical; skip the write.
        if resolved != text {
            fs::write(path.as_std_path(), resolved)?;
        }
    }
    Ok(())
}
