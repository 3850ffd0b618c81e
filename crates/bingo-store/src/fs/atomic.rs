//! Atomic write primitive
//!
//! Temp file + rename, so readers never observe a half-written snapshot

use crate::errors::{io_error, Result};
use std::fs;
use std::path::Path;

/// Atomically write bytes to a file, creating parent directories
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_snapshot_dir", e))?;
    }

    // Appending keeps `name.json` and `name.v2.json` from sharing a temp file
    let mut temp_name = target_path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    fs::write(temp_path, content).map_err(|e| io_error("write_snapshot_temp", e))?;
    fs::rename(temp_path, target_path).map_err(|e| io_error("rename_snapshot_temp", e))?;

    Ok(())
}
