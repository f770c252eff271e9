//! Image discovery: walk a folder tree and keep the files we can show.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ScanError;

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Whether the file extension (any case) is one we display.
pub fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Collect every image below `root`, sorted by path.
///
/// Symlinks are followed; walkdir reports link loops as errors, which are
/// skipped like any other unreadable entry. An empty result is an error so
/// callers never start a slideshow with nothing to show.
pub fn scan(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if root.as_os_str().is_empty() {
        return Err(ScanError::NoDirectory);
    }
    let meta = std::fs::metadata(root).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ScanError::NotFound(root.to_path_buf()),
        _ => ScanError::Unreadable {
            path: root.to_path_buf(),
            source,
        },
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut images = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!("Skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if is_image(entry.path()) {
            tracing::trace!("Found {}", entry.path().display());
            images.push(entry.into_path());
        }
    }

    tracing::debug!("Scanned {}: {} images", root.display(), images.len());

    if images.is_empty() {
        return Err(ScanError::NoImages(root.to_path_buf()));
    }
    Ok(images)
}
