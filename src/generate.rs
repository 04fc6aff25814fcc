//! Single-page site generation.
//!
//! Scans the gallery, picks the hero, copies every referenced image into the
//! output directory unchanged, and renders one `index.html`.
//!
//! ## Page Sections
//!
//! Header with anchor navigation, then in order: home (hero + caption),
//! gallery (one tab per category), films (embedded showreel), about, book us
//! (the inquiry form), contact, footer.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! └── gallery/
//!     ├── weddings/
//!     │   ├── 010-vows.jpg        # byte-for-byte copies
//!     │   └── 020-rings.png
//!     └── receptions/
//!         └── dance.webp
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating, so
//! every interpolated value (studio copy, folder names, file names) is escaped.
//! The stylesheet is embedded at compile time from `static/style.css`, with
//! color variables from config prepended. Gallery tabs are plain radio inputs;
//! the page ships no JavaScript.

use crate::booking::Package;
use crate::config::{self, SiteConfig, StudioConfig};
use crate::hero::select_hero;
use crate::scan::{Gallery, ScanError, scan_gallery};
use crate::types::ImageRef;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// What a build produced.
#[derive(Debug)]
pub struct GenerateReport {
    pub index: PathBuf,
    pub gallery: Gallery,
    pub hero: Option<ImageRef>,
    pub images_copied: usize,
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Placeholder left in the stock video URL by studios that have no showreel yet.
const VIDEO_PLACEHOLDER: &str = "YOUR_VIDEO_ID";

pub fn generate(
    source: &Path,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let gallery_root = config.gallery_root(source);
    let gallery = scan_gallery(&gallery_root, &config.gallery)?;
    let hero = select_hero(&gallery_root, &config.gallery)?;

    fs::create_dir_all(output_dir)?;

    let images = gallery
        .categories
        .iter()
        .flat_map(|c| c.images.iter())
        .chain(hero.iter());
    let mut copied = BTreeSet::new();
    for image in images {
        let site_path = image.site_path();
        if !copied.insert(site_path.clone()) {
            continue;
        }
        let dest = output_dir.join(&site_path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&image.path, &dest)?;
        tracing::debug!(src = %image.path.display(), dest = %dest.display(), "image copied");
    }

    let css = format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC);
    let page = render_page(config, &gallery, hero.as_ref(), &css);
    let index = output_dir.join("index.html");
    fs::write(&index, page.into_string())?;
    tracing::info!(index = %index.display(), images = copied.len(), "site generated");

    Ok(GenerateReport {
        index,
        gallery,
        hero,
        images_copied: copied.len(),
    })
}

// ============================================================================
// Video links
// ============================================================================

/// How the films section shows the configured video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Video {
    /// YouTube link, rewritten to its embed URL.
    Embed(String),
    /// Any other URL, played with a `<video>` element.
    File(String),
    /// Nothing configured yet.
    Missing,
}

pub fn classify_video(url: &str) -> Video {
    let url = url.trim();
    if url.is_empty() || url.contains(VIDEO_PLACEHOLDER) {
        return Video::Missing;
    }
    match youtube_id(url) {
        Some(id) => Video::Embed(format!("https://www.youtube.com/embed/{id}")),
        None => Video::File(url.to_string()),
    }
}

/// Video id from `youtu.be/<id>`, `youtube.com/watch?v=<id>`,
/// `youtube.com/embed/<id>` and `youtube.com/shorts/<id>` links.
fn youtube_id(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest
        .strip_prefix("www.")
        .or_else(|| rest.strip_prefix("m."))
        .unwrap_or(rest);

    let id = if let Some(path) = rest.strip_prefix("youtu.be/") {
        path.split(['?', '&', '#', '/']).next()
    } else if let Some(query) = rest.strip_prefix("youtube.com/watch?") {
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("v="))
            .and_then(|v| v.split('#').next())
    } else if let Some(path) = rest
        .strip_prefix("youtube.com/embed/")
        .or_else(|| rest.strip_prefix("youtube.com/shorts/"))
    {
        path.split(['?', '&', '#', '/']).next()
    } else {
        None
    };

    id.filter(|id| {
        !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}

// ============================================================================
// HTML Components
// ============================================================================

fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Anchor targets and labels, in page order.
const NAV_LINKS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("gallery", "Gallery"),
    ("films", "Films"),
    ("about", "About Us"),
    ("book", "Book Us"),
    ("contact", "Contact"),
];

fn site_header(studio: &StudioConfig) -> Markup {
    html! {
        header.site-header {
            div.site-header-inner {
                div.brand {
                    div.logo-box { (studio.monogram) }
                    div.logo-text { (studio.name) }
                }
                input.menu-toggle type="checkbox" id="menu-toggle";
                label.menu-icon for="menu-toggle" {
                    span {}
                    span {}
                    span {}
                }
                nav.site-nav {
                    @for (anchor, label) in NAV_LINKS {
                        a href={ "#" (anchor) } { (label) }
                    }
                }
            }
        }
    }
}

fn section_home(studio: &StudioConfig, hero: Option<&ImageRef>) -> Markup {
    html! {
        section #home {
            @if let Some(image) = hero {
                figure.hero-frame {
                    img src=(image.url()) alt=(studio.name);
                }
            }
            p.hero-caption { (studio.tagline) }
        }
    }
}

/// Per-tab rules: show the panel and underline the label of the checked tab.
fn tab_css(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                "#gallery-tab-{i}:checked ~ #gallery-panel-{i} {{ display: block; }}\n\
                 #gallery-tab-{i}:checked + .tab-label {{ border-bottom-color: var(--color-accent); }}\n"
            )
        })
        .collect()
}

fn section_gallery(gallery: &Gallery) -> Markup {
    html! {
        section.section #gallery {
            h2 { "Gallery" }
            p.section-lead { "A curated selection of weddings and celebrations we’ve documented." }
            @if gallery.is_empty() {
                p.info { "Add images into /gallery folders to display your portfolio." }
            } @else {
                style { (PreEscaped(tab_css(gallery.categories.len()))) }
                div.tabs {
                    @for (i, category) in gallery.categories.iter().enumerate() {
                        @let tab_id = format!("gallery-tab-{i}");
                        input.tab-toggle type="radio" name="gallery-tab" id=(tab_id) checked[i == 0];
                        label.tab-label for=(tab_id) { (category.title) }
                    }
                    @for (i, category) in gallery.categories.iter().enumerate() {
                        div.tab-panel id={ "gallery-panel-" (i) } {
                            div.gallery-grid {
                                @for image in &category.images {
                                    div.gallery-img-wrap {
                                        img src=(image.url()) alt=(category.title) loading="lazy";
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn section_films(video_url: &str) -> Markup {
    html! {
        section.section #films {
            h2 { "Wedding Films" }
            p.section-lead { "A glimpse into our cinematic storytelling style." }
            @match classify_video(video_url) {
                Video::Embed(src) => {
                    div.video-frame {
                        iframe src=(src) title="Wedding film"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen {}
                    }
                }
                Video::File(src) => {
                    div.video-frame {
                        video src=(src) controls preload="metadata" {}
                    }
                }
                Video::Missing => {
                    p.info { "Add your YouTube link in the media.video_url setting to show your film here." }
                }
            }
        }
    }
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut body = String::new();
    md_html::push_html(&mut body, parser);
    body
}

fn contact_lines(studio: &StudioConfig) -> Markup {
    html! {
        p {
            strong { "Phone:" } " "
            a href={ "tel:" (studio.phone.replace(' ', "")) } { (studio.phone) }
            br;
            strong { "Email:" } " "
            a href={ "mailto:" (studio.email) } { (studio.email) }
        }
    }
}

fn section_about(studio: &StudioConfig) -> Markup {
    html! {
        section.section #about {
            h2 { "About Us" }
            div.about-body { (PreEscaped(markdown_to_html(&studio.about))) }
            div.about-columns {
                div.philosophy {
                    h3 { "Our Philosophy" }
                    ul {
                        @for line in &studio.philosophy {
                            li { (line) }
                        }
                    }
                }
                div.contact-card {
                    h3 { "Contact" }
                    (contact_lines(studio))
                    p { strong { "Location:" } " " (studio.location) }
                }
            }
        }
    }
}

/// The inquiry form. Field names match the booking table columns.
fn section_book(form_action: Option<&str>) -> Markup {
    html! {
        section.section #book {
            h2 { "Book Us" }
            form.book-form method="post" action=[form_action] {
                label { "Full Name *" input type="text" name="name" required; }
                label { "Wedding Date *" input type="date" name="wedding_date" required; }
                label { "Email *" input type="email" name="email" required; }
                label { "Wedding Location *" input type="text" name="location" required; }
                label { "Phone Number *" input type="tel" name="phone" required; }
                label {
                    "Package Type"
                    select name="package" {
                        @for package in Package::ALL {
                            option value=(package.label()) { (package.label()) }
                        }
                    }
                }
                label.full-width {
                    "Tell us about your events"
                    textarea name="message" rows="4" {}
                }
                button type="submit" { "Submit" }
            }
        }
    }
}

fn section_contact(studio: &StudioConfig) -> Markup {
    html! {
        section.section #contact {
            h2 { "Contact" }
            p {
                strong { (studio.name) }
                br;
                (studio.location)
            }
            (contact_lines(studio))
        }
    }
}

fn footer(studio: &StudioConfig) -> Markup {
    html! {
        footer.footer {
            "© " (studio.copyright_year) " " (studio.name) " · All Rights Reserved"
        }
    }
}

/// Render the whole page.
pub fn render_page(
    config: &SiteConfig,
    gallery: &Gallery,
    hero: Option<&ImageRef>,
    css: &str,
) -> Markup {
    let studio = &config.studio;
    let content = html! {
        (site_header(studio))
        main {
            (section_home(studio, hero))
            (section_gallery(gallery))
            (section_films(&config.media.video_url))
            (section_about(studio))
            (section_book(config.bookings.form_action.as_deref()))
            (section_contact(studio))
        }
        (footer(studio))
    };
    base_document(&studio.name, css, content)
}

// ============================================================================
// Tests
// ============================================================================
