//! Shared types handed from the data layer to the page renderer and CLI output.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use std::path::PathBuf;

/// Bytes left as-is inside one URL path segment; everything else is escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// An image file on disk. Never opened or decoded by this crate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ImageRef {
    /// Full path, as discovered under the gallery root.
    pub path: PathBuf,
    /// Name of the category folder the file sits in.
    pub folder: String,
    /// File name including extension.
    pub filename: String,
}

impl ImageRef {
    /// Site-relative URL the generator copies this file to.
    pub fn site_path(&self) -> String {
        format!("gallery/{}/{}", self.folder, self.filename)
    }

    /// [`site_path`](Self::site_path) as a relative URL, for `src` attributes.
    pub fn url(&self) -> String {
        format!(
            "gallery/{}/{}",
            utf8_percent_encode(&self.folder, PATH_SEGMENT),
            utf8_percent_encode(&self.filename, PATH_SEGMENT)
        )
    }
}

/// One gallery tab: a folder with at least one image.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    /// Title-cased folder name shown to visitors.
    pub title: String,
    /// Folder name on disk.
    pub folder: String,
    /// Images sorted ascending by path. Never empty.
    pub images: Vec<ImageRef>,
}
