//! Display names for gallery folders.
//!
//! Category folders are named however the photographer likes on disk
//! (`weddings`, `pre-wedding`, `candid_moments`). The page shows them
//! title-cased: every run of letters starts upper-case and continues
//! lower-case. Anything that is not a letter (digits, dashes, underscores,
//! apostrophes, spaces) starts a new word.
//!
//! - `weddings` → "Weddings"
//! - `pre-wedding` → "Pre-Wedding"
//! - `candid_moments` → "Candid_Moments"
//! - `2024weddings` → "2024Weddings"
//! - `HALDI night` → "Haldi Night"

/// Title-case a folder name.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_cased = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(c);
            prev_cased = false;
        }
    }
    out
}
