//! Zip archive extraction
//!
//! Kaggle serves every dataset as a single zip. Entries are written below
//! the destination with their relative paths intact; entries whose names
//! would land outside it are skipped.

use crate::error::SourceError;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::{debug, warn};
use zip::ZipArchive;

/// rwx for user, group and other; setuid, setgid and sticky are dropped
#[cfg(unix)]
const PERMISSION_BITS: u32 = 0o777;

#[cfg(unix)]
const OWNER_WRITE: u32 = 0o200;

/// Extract every entry of `archive` into `destination`
///
/// Returns the number of files written. Existing files with the same name
/// are overwritten. On unix only the entry's permission bits are applied,
/// with owner write always set, so a later run can overwrite the file.
pub fn extract_zip(archive: &Path, destination: &Path) -> Result<usize, SourceError> {
    let mut zip = ZipArchive::new(File::open(archive)?)?;
    let mut written = 0;

    for index in 0..zip.len() {
        let mut entry = zip.by_index(index)?;

        let relative = match entry.enclosed_name() {
            Some(path) => path.to_path_buf(),
            None => {
                warn!(entry = entry.name(), "Skipping archive entry outside destination");
                continue;
            },
        };
        let target = destination.join(&relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut out = File::create(&target)?;
        let bytes = io::copy(&mut entry, &mut out)?;
        debug!(file = %relative.display(), bytes, "Extracted");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                let mode = (mode & PERMISSION_BITS) | OWNER_WRITE;
                std::fs::set_permissions(&target, std::fs::Permissions::from_mode(mode))?;
            }
        }

        written += 1;
    }

    Ok(written)
}
