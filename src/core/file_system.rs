//! Vault scanning

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::HostError;

/// Check whether a walk entry is hidden (dot-prefixed)
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|s| s.starts_with('.'))
            .unwrap_or(false)
}

/// Convert an absolute path under `root` into a `/`-separated vault path
pub fn vault_relative(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Get all files in the vault recursively, as sorted vault-relative paths
///
/// Hidden files and directories are skipped.
pub fn list_vault_files(root: &Path) -> Result<Vec<String>, HostError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(|e| !is_hidden(e)) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            HostError::io(path, source)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(rel) = vault_relative(root, entry.path()) {
            files.push(rel);
        }
    }

    files.sort();
    Ok(files)
}
