//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by an optional `config.toml` in the content root. Every component
//! (gallery scan, hero selection, booking store, site generator) receives the
//! resolved [`SiteConfig`] explicitly, so tests can point it at isolated
//! temporary roots.
//!
//! ## Config File Location
//!
//! ```text
//! site/
//! ├── config.toml              # Optional, overrides stock defaults
//! ├── bookings.csv             # Booking table (created on first submission)
//! └── gallery/
//!     ├── weddings/            # Hero images come from here first
//!     └── receptions/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [gallery]
//! dir = "gallery"                  # Gallery root, relative to the content root
//! hero_folder = "weddings"         # Category searched first for the hero image
//! extensions = ["jpg", "jpeg", "png", "webp"]
//! ignore_extension_case = false    # true also accepts .JPG, .Png, ...
//! skip_hidden = false              # true leaves out .drafts/, .outtake.jpg, ...
//!
//! [bookings]
//! file = "bookings.csv"            # Booking table, relative to the content root
//! # form_action = "https://..."    # Form POST target (omitted by default)
//!
//! [media]
//! video_url = "https://youtu.be/..."
//!
//! [studio]
//! name = "We Love Films"
//! monogram = "WLF"
//! # tagline, about (markdown), philosophy, phone, email, location, copyright_year
//!
//! [colors]
//! background = "#ffffff"
//! text = "#000000"
//! text_muted = "#444444"
//! border = "#eeeeee"
//! accent = "#000000"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults matching the studio's original site. User config
/// files need only specify the values they want to override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Where gallery images live and how they are matched.
    pub gallery: GalleryConfig,
    /// Where booking submissions are persisted.
    pub bookings: BookingsConfig,
    /// Externally hosted media.
    pub media: MediaConfig,
    /// Studio copy shown on the page.
    pub studio: StudioConfig,
    /// Page color scheme.
    pub colors: ColorScheme,
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "gallery.dir must not be empty".into(),
            ));
        }
        let hero_folder = self.gallery.hero_folder.trim();
        if hero_folder.is_empty()
            || hero_folder == "."
            || hero_folder == ".."
            || hero_folder.contains(['/', '\\'])
        {
            return Err(ConfigError::Validation(
                "gallery.hero_folder must be a single folder name".into(),
            ));
        }
        if self.gallery.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "gallery.extensions must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .gallery
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(ConfigError::Validation(format!(
                "gallery.extensions entries must be bare extensions like \"jpg\", got {bad:?}"
            )));
        }
        if self.bookings.file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "bookings.file must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Absolute-or-relative gallery root for a given content root.
    pub fn gallery_root(&self, source: &Path) -> PathBuf {
        source.join(&self.gallery.dir)
    }

    /// Location of the booking table for a given content root.
    pub fn bookings_path(&self, source: &Path) -> PathBuf {
        source.join(&self.bookings.file)
    }
}

/// Gallery discovery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Gallery root directory, relative to the content root.
    pub dir: String,
    /// Category folder searched first when picking the hero image.
    pub hero_folder: String,
    /// Allowed image extensions, without the leading dot.
    pub extensions: Vec<String>,
    /// Match extensions regardless of case (`.JPG` counts as `jpg`).
    /// Off by default: only the exact spellings in `extensions` match.
    pub ignore_extension_case: bool,
    /// Leave out folders and files whose names start with `.`.
    pub skip_hidden: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            dir: "gallery".to_string(),
            hero_folder: "weddings".to_string(),
            extensions: ["jpg", "jpeg", "png", "webp"]
                .into_iter()
                .map(String::from)
                .collect(),
            ignore_extension_case: false,
            skip_hidden: false,
        }
    }
}

impl GalleryConfig {
    /// Whether a file name carries one of the allowed extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        if self.ignore_extension_case {
            self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
        } else {
            self.extensions.iter().any(|e| e == ext)
        }
    }
}

/// Booking table settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookingsConfig {
    /// Booking table file, relative to the content root.
    pub file: String,
    /// Where the rendered form posts to. Without it the form has no action
    /// and submissions go through `weddingfolio book`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_action: Option<String>,
}

impl Default for BookingsConfig {
    fn default() -> Self {
        Self {
            file: "bookings.csv".to_string(),
            form_action: None,
        }
    }
}

/// Externally hosted media referenced by the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MediaConfig {
    /// Showreel URL. Treated as opaque; only YouTube links are turned into embeds.
    pub video_url: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            video_url: "https://youtu.be/CwuWjFJU_YQ?si=1iWnnoaRZOiBNY66".to_string(),
        }
    }
}

/// Studio identity and page copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioConfig {
    pub name: String,
    /// Short mark shown in the logo box.
    pub monogram: String,
    /// Caption under the hero image.
    pub tagline: String,
    /// About section body, markdown.
    pub about: String,
    pub philosophy: Vec<String>,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub copyright_year: u16,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            name: "We Love Films".to_string(),
            monogram: "WLF".to_string(),
            tagline: "Your wedding is one of the most meaningful chapters of your life. \
                Our team at We Love Films is dedicated to capturing it with precision, beauty, \
                and emotion so you can relive every moment exactly as it was. From intimate \
                ceremonies to grand celebrations, we create photographs and films that are \
                timeless, heartfelt, and uniquely yours. Book your wedding story with us today."
                .to_string(),
            about: "**We Love Films** is a wedding photography and films studio based in \
                Jubilee Hills, Hyderabad.\nWe focus on honest storytelling, elegant \
                compositions, and timeless color tones.\n"
                .to_string(),
            philosophy: [
                "People over poses",
                "Light & emotion come first",
                "Minimal, elegant, timeless edits",
                "Respectful, unobtrusive coverage",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            phone: "9553484443".to_string(),
            email: "welovefilms54@gmail.com".to_string(),
            location: "Jubilee Hills, Hyderabad".to_string(),
            copyright_year: 2025,
        }
    }
}

/// Page color scheme. The site is a single light theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Muted text (footer, captions).
    pub text_muted: String,
    /// Border and divider color.
    pub border: String,
    /// Buttons and active tabs.
    pub accent: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#000000".to_string(),
            text_muted: "#444444".to_string(),
            border: "#eeeeee".to_string(),
            accent: "#000000".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the content root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    let config = resolve_config(base, overlay)?;
    tracing::debug!(root = %root.display(), gallery = %config.gallery.dir, "config loaded");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Weddingfolio Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Gallery
# ---------------------------------------------------------------------------
[gallery]
# Gallery root, relative to the content root. Each subfolder is a category;
# its title-cased name becomes the tab label ("pre-wedding" -> "Pre-Wedding").
dir = "gallery"

# Category folder searched first for the hero image.
hero_folder = "weddings"

# Allowed image extensions, without the dot.
extensions = ["jpg", "jpeg", "png", "webp"]

# Extensions match exactly by default, so "photo.JPG" is skipped.
# Set to true to accept any capitalisation.
ignore_extension_case = false

# Folders and files whose names start with "." are listed like any other
# (".drafts/" becomes a ".Drafts" tab). Set to true to leave them out.
skip_hidden = false

# ---------------------------------------------------------------------------
# Bookings
# ---------------------------------------------------------------------------
[bookings]
# Booking table (CSV), relative to the content root.
file = "bookings.csv"

# Where the rendered "Book Us" form posts to. Field names match the booking
# table columns. Leave unset to render the form without an action.
# form_action = "https://example.com/book"

# ---------------------------------------------------------------------------
# Media
# ---------------------------------------------------------------------------
[media]
# Showreel. YouTube links are embedded; leave YOUR_VIDEO_ID in place to
# show a placeholder instead.
video_url = "https://youtu.be/CwuWjFJU_YQ?si=1iWnnoaRZOiBNY66"

# ---------------------------------------------------------------------------
# Studio
# ---------------------------------------------------------------------------
[studio]
name = "We Love Films"
monogram = "WLF"
tagline = "Your wedding is one of the most meaningful chapters of your life. Our team at We Love Films is dedicated to capturing it with precision, beauty, and emotion so you can relive every moment exactly as it was. From intimate ceremonies to grand celebrations, we create photographs and films that are timeless, heartfelt, and uniquely yours. Book your wedding story with us today."

# About section, markdown.
about = """
**We Love Films** is a wedding photography and films studio based in Jubilee Hills, Hyderabad.
We focus on honest storytelling, elegant compositions, and timeless color tones.
"""

philosophy = [
    "People over poses",
    "Light & emotion come first",
    "Minimal, elegant, timeless edits",
    "Respectful, unobtrusive coverage",
]
phone = "9553484443"
email = "welovefilms54@gmail.com"
location = "Jubilee Hills, Hyderabad"
copyright_year = 2025

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#ffffff"
text = "#000000"
text_muted = "#444444"    # Footer, captions
border = "#eeeeee"
accent = "#000000"        # Buttons, active tab
"##
}

/// Generate CSS custom properties from the color scheme.
pub fn generate_color_css(colors: &ColorScheme) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-border: {border};
    --color-accent: {accent};
}}"#,
        background = colors.background,
        text = colors.text,
        text_muted = colors.text_muted,
        border = colors.border,
        accent = colors.accent,
    )
}
