// src/fs/mod.rs

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::errors::Result;

/// Create every directory in `dirs` (with ancestors) if missing.
///
/// Idempotent: existing directories and duplicates are fine.
pub fn initialize_directories<P: AsRef<Path>>(dirs: &[P]) -> Result<()> {
    for dir in dirs {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).with_context(|| format!("creating dir {:?}", dir))?;
        debug!(path = %dir.display(), "directory ready");
    }
    Ok(())
}

/// Make sure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            fs::create_dir_all(parent).with_context(|| format!("creating dir {:?}", parent))?;
            debug!(path = %parent.display(), "created output directory");
            Ok(())
        }
        _ => Ok(()),
    }
}
