//! Hero image selection.
//!
//! The hero is the single photo shown at the top of the page. Resolution order:
//!
//! 1. First image (by sort order) in the hero folder, `weddings` by default.
//! 2. First image of the first category in the scanned gallery. Categories are
//!    sorted by folder name, so this pick is stable across runs and platforms.
//! 3. No hero. The page renders without one.

use crate::config::GalleryConfig;
use crate::scan::{self, ScanError};
use crate::types::ImageRef;
use std::path::Path;

/// Pick the hero image under a gallery root, if any image exists at all.
pub fn select_hero(root: &Path, config: &GalleryConfig) -> Result<Option<ImageRef>, ScanError> {
    let hero_dir = root.join(&config.hero_folder);
    if let Some(first) = scan::list_images(&hero_dir, config)?.into_iter().next() {
        tracing::debug!(hero = %first.path.display(), "hero from hero folder");
        return Ok(Some(first));
    }

    let gallery = scan::scan_gallery(root, config)?;
    let hero = gallery.first_image().cloned();
    match &hero {
        Some(image) => tracing::debug!(hero = %image.path.display(), "hero from first category"),
        None => tracing::debug!(root = %root.display(), "no images anywhere, no hero"),
    }
    Ok(hero)
}
