//! # weddingfolio
//!
//! The data layer and static renderer behind a wedding photography studio's
//! one-page website. The filesystem holds the portfolio: every folder under
//! `gallery/` is a category, and every image in it is shown in name order.
//! Visitors' booking inquiries land in a single CSV table.
//!
//! # Architecture
//!
//! ```text
//! content/gallery/  →  scan_gallery  →  Gallery ─┬─→  generate  →  dist/index.html
//!                   →  select_hero   →  hero ────┘                 dist/gallery/…
//! booking form      →  validate      →  BookingRecord  →  BookingStore::append  →  bookings.csv
//! ```
//!
//! The pieces are independent. Scanning and hero selection only read the
//! gallery; the booking store only touches its table; the generator consumes
//! the first two and never looks at bookings.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the gallery root into title-cased categories of sorted images |
//! | [`hero`] | Picks the home page image, preferring the hero folder |
//! | [`booking`] | Booking record, form validation, and the CSV table on disk |
//! | [`generate`] | Renders the single page with Maud and copies the images |
//! | [`config`] | `config.toml` loading over stock defaults, validation, CSS variables |
//! | [`types`] | `ImageRef` and `Category`, shared by scan, hero and generate |
//! | [`naming`] | Folder name to category title |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Deterministic Category Order
//!
//! Categories are ordered by folder name, not by whatever order the
//! filesystem returns entries in. The hero fallback ("first image of the
//! first category") depends on that order, so it has to be stable across
//! machines.
//!
//! ## Whole-Table Rewrite Through a Temp File
//!
//! The booking table is small and append-only, so every append reads the
//! whole table and writes it back. The write goes to a sibling temp file that
//! is synced and renamed over the table; an interrupted write never truncates
//! earlier bookings. There is no locking.
//!
//! ## Images Are Opaque
//!
//! Images are never decoded or resized. The allow-list is by extension only,
//! and the generator copies files byte for byte.

pub mod booking;
pub mod config;
pub mod generate;
pub mod hero;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
