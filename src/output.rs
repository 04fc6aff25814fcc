//! CLI output formatting for every command.
//!
//! Each entity prints as a header line (positional index + name, optional
//! count) followed by indented context lines, so the gallery listing, the
//! bookings listing and the build summary read the same way.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Gallery (gallery/)
//! 001 Pre-Wedding (1 photos)
//!     Source: pre-wedding/
//!     001 beach.jpg
//! 002 Weddings (2 photos)
//!     Source: weddings/
//!     001 010-vows.jpg
//!     002 020-rings.png
//!
//! 2 categories, 3 images
//! ```
//!
//! ## Bookings
//!
//! ```text
//! Bookings (1)
//! 001 Asha Rao (Premium)
//!     Submitted: 2025-01-04 18:22:05
//!     Wedding: 2025-03-14 at Jubilee Hills, Hyderabad
//!     Contact: asha.rao@example.com, 98480 00000
//!     Message: Two-day coverage please
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//!     Hero: gallery/weddings/010-vows.jpg
//! 001 Pre-Wedding → gallery/pre-wedding/ (1 photos)
//! 002 Weddings → gallery/weddings/ (2 photos)
//!
//! Generated 2 categories, copied 3 images
//! ```
//!
//! Format functions return `Vec<String>` and do no I/O; the `print_*`
//! wrappers write them to stdout.

use crate::booking::BookingRecord;
use crate::booking::form::SUCCESS_MESSAGE;
use crate::generate::GenerateReport;
use crate::scan::Gallery;
use crate::types::ImageRef;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Weddings (5 photos)
/// 001 Asha Rao
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

fn photo_count(n: usize) -> String {
    format!("{} photos", n)
}

/// Collapse newlines and truncate to `max` characters, appending `...`.
fn truncate_desc(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        flat
    } else {
        let head: String = flat.chars().take(max).collect();
        format!("{}...", head)
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

// ============================================================================
// scan
// ============================================================================

/// Categories and their images, in display order.
pub fn format_gallery_output(gallery: &Gallery, gallery_dir: &str) -> Vec<String> {
    let mut lines = vec![format!("Gallery ({}/)", gallery_dir)];

    if gallery.is_empty() {
        lines.push(format!(
            "    No categories. Add images into {}/ folders.",
            gallery_dir
        ));
        return lines;
    }

    for (i, category) in gallery.categories.iter().enumerate() {
        let count = photo_count(category.images.len());
        lines.push(entity_header(i + 1, &category.title, Some(&count)));
        lines.push(format!("    Source: {}/", category.folder));
        for (j, image) in category.images.iter().enumerate() {
            lines.push(format!("    {} {}", format_index(j + 1), image.filename));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} categories, {} images",
        gallery.categories.len(),
        gallery.image_count()
    ));
    lines
}

pub fn print_gallery_output(gallery: &Gallery, gallery_dir: &str) {
    print_lines(format_gallery_output(gallery, gallery_dir));
}

// ============================================================================
// hero
// ============================================================================

pub fn format_hero_output(hero: Option<&ImageRef>) -> Vec<String> {
    match hero {
        Some(image) => vec![
            format!("Hero: {}", image.site_path()),
            format!("    Source: {}", image.path.display()),
        ],
        None => vec!["No hero image".to_string()],
    }
}

pub fn print_hero_output(hero: Option<&ImageRef>) {
    print_lines(format_hero_output(hero));
}

// ============================================================================
// book / bookings
// ============================================================================

pub fn format_booking_saved(record: &BookingRecord, rows: usize, table: &Path) -> Vec<String> {
    vec![
        SUCCESS_MESSAGE.to_string(),
        format!(
            "    {} ({}) saved as row {} of {}",
            record.name,
            record.package,
            rows,
            table.display()
        ),
    ]
}

pub fn print_booking_saved(record: &BookingRecord, rows: usize, table: &Path) {
    print_lines(format_booking_saved(record, rows, table));
}

/// Every booking, oldest first. Long messages are cut to one line.
pub fn format_bookings_output(records: &[BookingRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec!["No bookings yet".to_string()];
    }

    let mut lines = vec![format!("Bookings ({})", records.len())];
    for (i, record) in records.iter().enumerate() {
        let package = record.package.to_string();
        lines.push(entity_header(i + 1, &record.name, Some(&package)));
        lines.push(format!(
            "    Submitted: {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S")
        ));
        lines.push(format!(
            "    Wedding: {} at {}",
            record.wedding_date.format("%Y-%m-%d"),
            record.location
        ));
        lines.push(format!("    Contact: {}, {}", record.email, record.phone));
        let message = truncate_desc(&record.message, 60);
        if !message.is_empty() {
            lines.push(format!("    Message: {}", message));
        }
    }
    lines
}

pub fn print_bookings_output(records: &[BookingRecord]) {
    print_lines(format_bookings_output(records));
}

// ============================================================================
// build
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let index_name = report
        .index
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index.html".to_string());

    let mut lines = vec![format!("Home \u{2192} {}", index_name)];
    match &report.hero {
        Some(hero) => lines.push(format!("    Hero: {}", hero.site_path())),
        None => lines.push("    Hero: none".to_string()),
    }

    for (i, category) in report.gallery.categories.iter().enumerate() {
        lines.push(format!(
            "{} \u{2192} gallery/{}/ ({})",
            entity_header(i + 1, &category.title, None),
            category.folder,
            photo_count(category.images.len())
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} categories, copied {} images",
        report.gallery.categories.len(),
        report.images_copied
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    print_lines(format_generate_output(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Package;
    use crate::test_helpers::*;
    use crate::types::Category;
    use std::path::PathBuf;

    fn image(folder: &str, filename: &str) -> ImageRef {
        ImageRef {
            path: PathBuf::from("content/gallery").join(folder).join(filename),
            folder: folder.to_string(),
            filename: filename.to_string(),
        }
    }

    fn sample_gallery() -> Gallery {
        Gallery {
            categories: vec![
                Category {
                    title: "Pre-Wedding".to_string(),
                    folder: "pre-wedding".to_string(),
                    images: vec![image("pre-wedding", "beach.jpg")],
                },
                Category {
                    title: "Weddings".to_string(),
                    folder: "weddings".to_string(),
                    images: vec![
                        image("weddings", "010-vows.jpg"),
                        image("weddings", "020-rings.png"),
                    ],
                },
            ],
        }
    }

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn entity_header_with_and_without_detail() {
        assert_eq!(entity_header(1, "Weddings", Some("5 photos")), "001 Weddings (5 photos)");
        assert_eq!(entity_header(2, "Asha", None), "002 Asha");
    }

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_desc_long() {
        let text = "a".repeat(50);
        assert_eq!(truncate_desc(&text, 40), format!("{}...", "a".repeat(40)));
    }

    #[test]
    fn truncate_desc_flattens_newlines() {
        assert_eq!(truncate_desc("line one\nline two", 40), "line one line two");
    }

    #[test]
    fn truncate_desc_counts_chars_not_bytes() {
        assert_eq!(truncate_desc("ééé", 2), "éé...");
    }

    // =========================================================================
    // scan
    // =========================================================================

    #[test]
    fn gallery_output_lists_categories_and_images() {
        let lines = format_gallery_output(&sample_gallery(), "gallery");
        assert_eq!(
            lines,
            vec![
                "Gallery (gallery/)",
                "001 Pre-Wedding (1 photos)",
                "    Source: pre-wedding/",
                "    001 beach.jpg",
                "002 Weddings (2 photos)",
                "    Source: weddings/",
                "    001 010-vows.jpg",
                "    002 020-rings.png",
                "",
                "2 categories, 3 images",
            ]
        );
    }

    #[test]
    fn gallery_output_empty() {
        let lines = format_gallery_output(&Gallery::default(), "gallery");
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("No categories"));
    }

    // =========================================================================
    // hero
    // =========================================================================

    #[test]
    fn hero_output_some() {
        let hero = image("weddings", "010-vows.jpg");
        let lines = format_hero_output(Some(&hero));
        assert_eq!(lines[0], "Hero: gallery/weddings/010-vows.jpg");
        assert!(lines[1].starts_with("    Source: "));
    }

    #[test]
    fn hero_output_none() {
        assert_eq!(format_hero_output(None), vec!["No hero image"]);
    }

    // =========================================================================
    // bookings
    // =========================================================================

    #[test]
    fn booking_saved_lines() {
        let record = sample_record("Asha Rao");
        let lines = format_booking_saved(&record, 3, Path::new("content/bookings.csv"));
        assert_eq!(lines[0], "Thank you! We will contact you shortly.");
        assert_eq!(
            lines[1],
            "    Asha Rao (Premium) saved as row 3 of content/bookings.csv"
        );
    }

    #[test]
    fn bookings_output_empty() {
        assert_eq!(format_bookings_output(&[]), vec!["No bookings yet"]);
    }

    #[test]
    fn bookings_output_lists_records() {
        let mut second = sample_record("Ravi Kumar");
        second.package = Package::NotDecided;
        second.message.clear();
        let lines = format_bookings_output(&[sample_record("Asha Rao"), second]);

        assert_eq!(lines[0], "Bookings (2)");
        assert_eq!(lines[1], "001 Asha Rao (Premium)");
        assert_eq!(lines[2], "    Submitted: 2025-01-04 18:22:05");
        assert_eq!(lines[3], "    Wedding: 2025-03-14 at Jubilee Hills, Hyderabad");
        assert_eq!(lines[4], "    Contact: asha.rao@example.com, 98480 00000");
        assert_eq!(lines[5], "    Message: Two-day coverage please");
        assert_eq!(lines[6], "002 Ravi Kumar (Not Decided)");
        // Empty message line is omitted.
        assert_eq!(lines.len(), 10);
    }

    // =========================================================================
    // build
    // =========================================================================

    #[test]
    fn generate_output_summary() {
        let report = GenerateReport {
            index: PathBuf::from("dist/index.html"),
            gallery: sample_gallery(),
            hero: Some(image("weddings", "010-vows.jpg")),
            images_copied: 3,
        };
        assert_eq!(
            format_generate_output(&report),
            vec![
                "Home \u{2192} index.html",
                "    Hero: gallery/weddings/010-vows.jpg",
                "001 Pre-Wedding \u{2192} gallery/pre-wedding/ (1 photos)",
                "002 Weddings \u{2192} gallery/weddings/ (2 photos)",
                "",
                "Generated 2 categories, copied 3 images",
            ]
        );
    }

    #[test]
    fn generate_output_without_hero() {
        let report = GenerateReport {
            index: PathBuf::from("dist/index.html"),
            gallery: Gallery::default(),
            hero: None,
            images_copied: 0,
        };
        let lines = format_generate_output(&report);
        assert_eq!(lines[1], "    Hero: none");
        assert_eq!(lines.last().unwrap(), "Generated 0 categories, copied 0 images");
    }
}
