//! Slug derivation shared by both generation passes.
//!
//! Pages and the sitemap are produced by independent runs; the only thing
//! keeping their URLs in agreement is that both derive item identifiers
//! through this one function. The transform is intentionally lossy:
//! distinct names may collapse to the same slug (see
//! [`crate::catalog::slug_collisions`]).
//!
//! ## Examples
//!
//! - `"Scrap Metal"` → `"scrap-metal"`
//! - `"Pulse Rifle Mk.II"` → `"pulse-rifle-mk-ii"`
//! - `"---"` → `""` (valid output, not an error)

/// Derive a lowercase, hyphen-delimited, URL-and-filesystem-safe identifier
/// from an item's display name.
///
/// Every maximal run of characters outside `[a-z0-9]` (after lowercasing)
/// becomes a single `-`; leading and trailing hyphens are stripped. Total
/// over all inputs: empty and all-symbol names yield the empty string, which
/// callers must treat as a valid path component.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }
    slug
}
