//! Saving downloaded bodies to disk.
//!
//! The body is written to `<name>.part` next to the destination and then
//! renamed over the final name, so a failed write never leaves a truncated
//! file under the real name and an existing file is replaced in one step.

use crate::error::GrabError;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `file.iso` → `file.iso.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<(), GrabError> {
    fs::create_dir_all(dir).map_err(|e| GrabError::filesystem(dir, e))
}

/// Writes `bytes` to `dir/filename`, replacing any existing file.
/// Creates `dir` first. Returns the final path.
pub fn save_file(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, GrabError> {
    ensure_dir(dir)?;
    let final_path = dir.join(filename);
    let tp = temp_path(&final_path);

    let written = File::create(&tp)
        .and_then(|mut f| {
            f.write_all(bytes)?;
            f.sync_all()
        })
        .map_err(|e| GrabError::filesystem(&tp, e));
    if let Err(e) = written {
        let _ = fs::remove_file(&tp);
        return Err(e);
    }

    if let Err(e) = fs::rename(&tp, &final_path) {
        let _ = fs::remove_file(&tp);
        return Err(GrabError::filesystem(&final_path, e));
    }
    Ok(final_path)
}
