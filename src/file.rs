// src/file.rs

use std::{fs, path::Path};

use crate::error::PoolError;

/// Create `dir` (and parents) if missing. A non-directory in the way is an
/// error.
pub fn ensure_directory(dir: &Path) -> Result<(), PoolError> {
    if dir.exists() && !dir.is_dir() {
        return Err(PoolError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Whole-file overwrite, creating parent directories as needed.
/// Not atomic; a crash mid-write can leave a partial file.
pub fn write_text(path: &Path, contents: &str) -> Result<(), PoolError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}
