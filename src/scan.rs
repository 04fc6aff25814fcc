//! Gallery discovery.
//!
//! The gallery root's immediate subfolders are categories; the image files
//! directly inside each folder are its photos. Nothing deeper is visited and
//! no file is opened.
//!
//! ```text
//! gallery/
//! ├── weddings/            # "Weddings"
//! │   ├── 010-vows.jpg
//! │   └── 020-rings.png
//! ├── pre-wedding/         # "Pre-Wedding"
//! │   └── beach.jpg
//! ├── notes.txt            # ignored (not a folder)
//! ├── empty/               # dropped (no images)
//! └── .drafts/             # ".Drafts", unless `skip_hidden` is set
//! ```
//!
//! Names starting with `.` are treated like any other name. With
//! `gallery.skip_hidden = true` such folders and files are left out.
//!
//! ## Ordering
//!
//! Images within a category are sorted ascending by path. Categories are
//! sorted by folder name, so the result does not depend on the order the
//! filesystem happens to list directories in.
//!
//! ## Missing directories
//!
//! A gallery root that does not exist yields an empty [`Gallery`]. Only I/O
//! failures while reading a directory that does exist are errors.

use crate::config::GalleryConfig;
use crate::naming::title_case;
use crate::types::{Category, ImageRef};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// All image-bearing categories under the gallery root.
#[derive(Debug, Default, Serialize)]
pub struct Gallery {
    pub categories: Vec<Category>,
}

impl Gallery {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Look a category up by its display title.
    pub fn get(&self, title: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.title == title)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.title.as_str()).collect()
    }

    /// First image of the first category.
    pub fn first_image(&self) -> Option<&ImageRef> {
        self.categories.first().and_then(|c| c.images.first())
    }

    pub fn image_count(&self) -> usize {
        self.categories.iter().map(|c| c.images.len()).sum()
    }

    /// Insert a category, replacing any earlier one with the same title in place.
    fn insert(&mut self, category: Category) {
        match self
            .categories
            .iter_mut()
            .find(|c| c.title == category.title)
        {
            Some(existing) => {
                tracing::warn!(
                    title = %category.title,
                    replaced = %existing.folder,
                    by = %category.folder,
                    "two gallery folders share a title; keeping the later one"
                );
                *existing = category;
            }
            None => self.categories.push(category),
        }
    }
}

/// Scan the gallery root into categories.
pub fn scan_gallery(root: &Path, config: &GalleryConfig) -> Result<Gallery, ScanError> {
    let mut gallery = Gallery::default();
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "gallery root missing, no categories");
        return Ok(gallery);
    }

    let folders = collect_entries(root, config)?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect::<Vec<_>>();

    for folder in folders {
        let images = list_images(&folder, config)?;
        let folder_name = file_name(&folder);
        if images.is_empty() {
            tracing::debug!(folder = %folder_name, "no images, category dropped");
            continue;
        }
        tracing::debug!(folder = %folder_name, images = images.len(), "category found");
        gallery.insert(Category {
            title: title_case(&folder_name),
            folder: folder_name,
            images,
        });
    }

    Ok(gallery)
}

/// Allow-listed image files directly inside `dir`, sorted by path.
///
/// A missing `dir` yields an empty list.
pub fn list_images(dir: &Path, config: &GalleryConfig) -> Result<Vec<ImageRef>, ScanError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let folder = file_name(dir);
    let images = collect_entries(dir, config)?
        .into_iter()
        .filter(|p| p.is_file() && config.matches_extension(p))
        .map(|path| ImageRef {
            filename: file_name(&path),
            folder: folder.clone(),
            path,
        })
        .collect();
    Ok(images)
}

/// Entries of a directory, sorted by path. Dot-prefixed names are dropped
/// only when `skip_hidden` is set.
fn collect_entries(path: &Path, config: &GalleryConfig) -> Result<Vec<PathBuf>, ScanError> {
    let read_err = |source| ScanError::ReadDir {
        path: path.to_path_buf(),
        source,
    };
    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if config.skip_hidden && entry.file_name().to_string_lossy().starts_with('.') {
            tracing::debug!(entry = %entry.path().display(), "hidden entry skipped");
            continue;
        }
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
