//! Source file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use epilog_model::{Error, Result};

/// Recursively collects `.java` files under the given root.
///
/// Results are sorted so a run visits files in a deterministic order
/// regardless of filesystem iteration order.
///
/// # Errors
/// Returns an error if a directory cannot be read.
pub fn discover_sources(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir.to_path_buf(), e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir.to_path_buf(), e))?;
        let path = entry.path();
        if path.is_dir() {
            walk(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "java") {
            files.push(path);
        }
    }
    Ok(())
}
