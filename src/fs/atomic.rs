//! Atomic file replacement.
//!
//! All writes follow the same pattern:
//! 1. Write content to a temporary file next to the target
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! `std::fs::rename` replaces an existing destination on both POSIX and
//! Windows, and is atomic as long as both paths are on the same filesystem.
//! On crash, a temporary file named `.{filename}.fix-tmp` may remain.
//! Symlinks are resolved first and the target's permissions are carried
//! over to the replacement.

use crate::error::{FixError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// The target either keeps its previous content or holds all of `content`;
/// it is never observed partially written.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    // Write through symlinks so the link itself survives the rename.
    let path = path.as_ref();
    let path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let temp_path = temp_path_for(&path)?;

    write_and_sync(&temp_path, content)?;
    copy_permissions(&path, &temp_path)?;
    replace(&temp_path, &path)?;

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary sibling path for `target`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            FixError::UserError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.fix-tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        FixError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(FixError::UserError(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

/// Give the temp file the mode of the file it is about to replace.
fn copy_permissions(target: &Path, temp: &Path) -> Result<()> {
    let Ok(metadata) = fs::metadata(target) else {
        // New file: keep the default permissions.
        return Ok(());
    };

    fs::set_permissions(temp, metadata.permissions()).map_err(|e| {
        let _ = fs::remove_file(temp);
        FixError::UserError(format!(
            "failed to copy permissions of '{}': {}",
            target.display(),
            e
        ))
    })
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        FixError::UserError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })?;

    sync_parent(target);
    Ok(())
}

/// Persist the directory entry of a freshly renamed file.
#[cfg(unix)]
fn sync_parent(target: &Path) {
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent(_target: &Path) {}
