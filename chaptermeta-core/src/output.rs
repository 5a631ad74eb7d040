//! Writing the metadata document to disk.
//!
//! The document is written to a temporary file next to the target and then
//! renamed over it, so readers never observe a half-written file and a failed
//! run leaves any previous document untouched. The replacement keeps the
//! previous document's permissions; a new document gets the same
//! umask-governed mode a plain `std::fs::write` would give it.

use crate::error::{CoreError, CoreResult};

use std::io::Write;
use std::path::Path;

use tempfile::Builder;

/// Writes `contents` to `path`, creating parent directories as needed and
/// replacing any existing file.
pub fn write_metadata_file(path: &Path, contents: &str) -> CoreResult<()> {
    let write_error = |source: std::io::Error| CoreError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(parent).map_err(write_error)?;

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Subject to the umask, like File::create.
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut temp = builder.tempfile_in(parent).map_err(write_error)?;
    temp.write_all(contents.as_bytes()).map_err(write_error)?;
    if let Ok(existing) = std::fs::metadata(path) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_error)?;
    }
    temp.as_file().sync_all().map_err(write_error)?;
    temp.persist(path).map_err(|e| write_error(e.error))?;

    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
