//! Shared test utilities.
//!
//! Builds throwaway gallery trees, copies the on-disk fixtures, and hands out
//! canned booking data with a fixed clock.
//!
//! ```rust
//! let tmp = gallery_tree(&[("weddings", &["b.jpg", "a.png"]), ("empty", &[])]);
//! let gallery = scan_gallery(&gallery_root(&tmp), &GalleryConfig::default()).unwrap();
//! assert_eq!(filenames(find_category(&gallery, "Weddings")), vec!["a.png", "b.jpg"]);
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::booking::{BookingRecord, BookingRequest, Package};
use crate::scan::Gallery;
use crate::types::Category;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Create `<tmp>/gallery/<folder>/<file>` for each entry. Folders with no
/// files are created empty. File contents are placeholder text.
pub fn gallery_tree(layout: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = gallery_root(&tmp);
    std::fs::create_dir_all(&root).unwrap();
    for (folder, files) in layout {
        let dir = root.join(folder);
        std::fs::create_dir_all(&dir).unwrap();
        for file in *files {
            std::fs::write(dir.join(file), "fake image").unwrap();
        }
    }
    tmp
}

pub fn gallery_root(tmp: &TempDir) -> PathBuf {
    tmp.path().join("gallery")
}

// =========================================================================
// Gallery lookups — panics with a clear message on miss
// =========================================================================

pub fn category_titles(gallery: &Gallery) -> Vec<&str> {
    gallery.titles()
}

/// Find a category by title. Panics if not found.
pub fn find_category<'a>(gallery: &'a Gallery, title: &str) -> &'a Category {
    gallery.get(title).unwrap_or_else(|| {
        panic!(
            "category '{title}' not found. Available: {:?}",
            gallery.titles()
        )
    })
}

/// File names of a category's images, in order.
pub fn filenames(category: &Category) -> Vec<&str> {
    category
        .images
        .iter()
        .map(|i| i.filename.as_str())
        .collect()
}

// =========================================================================
// Booking data
// =========================================================================

/// 2025-01-04 18:22:05, whole seconds.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 4)
        .unwrap()
        .and_hms_opt(18, 22, 5)
        .unwrap()
}

/// A complete, valid form submission.
pub fn sample_request() -> BookingRequest {
    BookingRequest {
        name: "Asha Rao".to_string(),
        email: "asha.rao@example.com".to_string(),
        phone: "98480 00000".to_string(),
        wedding_date: NaiveDate::from_ymd_opt(2025, 3, 14),
        location: "Jubilee Hills, Hyderabad".to_string(),
        package: Package::Premium,
        message: "Two-day coverage please".to_string(),
    }
}

/// A stored record for `name`, otherwise identical to [`sample_request`].
pub fn sample_record(name: &str) -> BookingRecord {
    let mut record = sample_request().validate(fixed_now()).unwrap();
    record.email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    record.name = name.to_string();
    record
}
