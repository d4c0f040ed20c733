//! Item page generation.
//!
//! The main pass of the build: one self-contained HTML document per catalog
//! item, written to `{output}/items/{slug}/index.html`. Each page carries the
//! full head metadata a crawler needs (title, description, keywords,
//! canonical link, Open Graph tags, a JSON-LD Product block) and a visible
//! body: breadcrumb, heading, description, and a table with one row per
//! item field in catalog field order.
//!
//! ## Output Structure
//!
//! ```text
//! public/
//! └── items/
//!     ├── scrap-metal/
//!     │   └── index.html
//!     └── pulse-rifle-mk-ii/
//!         └── index.html
//! ```
//!
//! Every run recreates every page in full: directory creation and file
//! writes are idempotent overwrites, so re-running after a failure is always
//! safe. Stale directories from items removed from the catalog are left in
//! place unless the caller asks for [`clean_items_dir`] first.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping, so every
//! item-derived string (name, field keys, field values) is escaped at the
//! interpolation site. The JSON-LD block is the one `PreEscaped` exception:
//! it is JSON produced by `serde_json`, which does its own escaping.

use crate::catalog::{Item, SlugCollision, display_value, slug_collisions};
use crate::config::SiteConfig;
use crate::slug::slugify;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde_json::json;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Page styles, inlined into every document so item pages have no styling
/// dependency on the rest of the site.
const CSS: &str = include_str!("../static/page.css");

/// Result of a pages run, consumed by [`crate::output`].
#[derive(Debug)]
pub struct PageReport {
    /// Pages written, one per catalog item (collisions overwrite in place
    /// and still count).
    pub pages_written: usize,
    /// Slug groups where distinct items landed on the same output path.
    pub collisions: Vec<SlugCollision>,
}

/// Generate one page per item under `output_root/items/`.
///
/// Items are processed in catalog order; a later item whose name slugs the
/// same overwrites an earlier one, which the report surfaces as a collision
/// warning. Any filesystem error aborts the run; there is no per-item
/// recovery.
pub fn generate_pages(
    catalog: &[Item],
    config: &SiteConfig,
    output_root: &Path,
) -> Result<PageReport, PagesError> {
    let items_root = output_root.join("items");
    fs::create_dir_all(&items_root)?;

    for item in catalog {
        let name = item.name();
        let slug = slugify(&name);
        let page_dir = items_root.join(&slug);
        fs::create_dir_all(&page_dir)?;

        let page = render_item_page(item, &name, &slug, config)?;
        fs::write(page_dir.join("index.html"), page.into_string())?;
    }

    Ok(PageReport {
        pages_written: catalog.len(),
        collisions: slug_collisions(catalog),
    })
}

/// Remove `output_root/items` entirely, so the next pages run starts from a
/// blank slate. Missing directory is fine: there is nothing to clean.
pub fn clean_items_dir(output_root: &Path) -> Result<(), PagesError> {
    match fs::remove_dir_all(output_root.join("items")) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

// ============================================================================
// Text templates
// ============================================================================

fn page_title(name: &str, site_name: &str) -> String {
    format!("{name} - {site_name}")
}

fn page_description(name: &str, site_name: &str) -> String {
    format!(
        "{name}: complete item details including every recorded attribute. \
         Part of the {site_name}."
    )
}

fn page_keywords(name: &str, slug: &str, site_name: &str) -> String {
    let site = site_name.to_lowercase();
    format!("{site} {}, {site} items, {slug}, {site}", name.to_lowercase())
}

// ============================================================================
// Structured data
// ============================================================================

/// Build the JSON-LD Product value for an item.
///
/// `additionalProperty` carries every field as a `PropertyValue` pair, in
/// catalog field order, with the raw JSON value (not its display rendering).
fn build_json_ld(
    item: &Item,
    name: &str,
    slug: &str,
    description: &str,
    site_name: &str,
) -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": name,
        "description": description,
        "identifier": slug,
        "brand": {
            "@type": "Brand",
            "name": site_name,
        },
        "additionalProperty": item
            .fields
            .iter()
            .map(|(key, value)| {
                json!({
                    "@type": "PropertyValue",
                    "name": key,
                    "value": value,
                })
            })
            .collect::<Vec<_>>(),
    })
}

// ============================================================================
// Page renderer
// ============================================================================

/// Render the complete HTML document for one item.
///
/// Pure apart from JSON-LD serialization; the only error source is
/// `serde_json`, which makes this directly testable without a filesystem.
pub fn render_item_page(
    item: &Item,
    name: &str,
    slug: &str,
    config: &SiteConfig,
) -> Result<Markup, serde_json::Error> {
    let site_name = &config.site.name;
    let title = page_title(name, site_name);
    let description = page_description(name, site_name);
    let keywords = page_keywords(name, slug, site_name);
    let canonical = config.item_url(slug);
    let og_image = config.route_url(&config.assets.icon);
    let json_ld = serde_json::to_string(&build_json_ld(
        item,
        name,
        slug,
        &description,
        site_name,
    ))?;

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width,initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                meta name="keywords" content=(keywords);
                link rel="canonical" href=(canonical);
                meta property="og:type" content="website";
                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                meta property="og:url" content=(canonical);
                meta property="og:image" content=(og_image);
                script type="application/ld+json" { (PreEscaped(&json_ld)) }
                link rel="icon" href=(config.assets.icon);
                link rel="manifest" href=(config.assets.manifest);
                link rel="stylesheet" href=(config.assets.stylesheet);
                script defer src=(config.assets.script) {}
                style { (PreEscaped(CSS)) }
            }
            body {
                div.breadcrumb {
                    a href=(config.site.base_path) { (site_name) }
                    " › "
                    a href=(config.site.base_path) { "Items" }
                    " › "
                    span { (name) }
                }
                h1 { (name) }
                p { (description) }
                table {
                    tbody {
                        @for (key, value) in &item.fields {
                            tr {
                                th { (key) }
                                td { (display_value(value)) }
                            }
                        }
                    }
                }
                div.item-nav {
                    a href=(config.site.base_path) { "← Back to " (site_name) }
                    @for route in config.routes.iter().filter(|r| r.path != "/") {
                        a href=(route.path) { (route.title) }
                    }
                }
            }
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticRoute;
    use crate::test_helpers::item;
    use tempfile::TempDir;

    fn render(it: &Item, config: &SiteConfig) -> String {
        let name = it.name();
        let slug = slugify(&name);
        render_item_page(it, &name, &slug, config)
            .unwrap()
            .into_string()
    }

    #[test]
    fn page_has_doctype_and_title() {
        let it = item(&[("Name", "Scrap Metal")]);
        let html = render(&it, &SiteConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Scrap Metal - Item Database</title>"));
    }

    #[test]
    fn page_heading_and_table_row() {
        let it = item(&[("Name", "Scrap Metal"), ("Rarity", "Common")]);
        let html = render(&it, &SiteConfig::default());
        assert!(html.contains("<h1>Scrap Metal</h1>"));
        assert!(html.contains("<th>Rarity</th><td>Common</td>"));
    }

    #[test]
    fn table_rows_follow_field_order() {
        let it: Item = serde_json::from_str(
            r#"{"Name": "X", "Zeta": "1", "Alpha": "2"}"#,
        )
        .unwrap();
        let html = render(&it, &SiteConfig::default());
        let zeta = html.find("<th>Zeta</th>").unwrap();
        let alpha = html.find("<th>Alpha</th>").unwrap();
        assert!(zeta < alpha, "field order must match the catalog");
    }

    #[test]
    fn canonical_and_og_urls_use_item_url() {
        let it = item(&[("Name", "Scrap Metal")]);
        let html = render(&it, &SiteConfig::default());
        assert!(html.contains(
            r#"<link rel="canonical" href="https://example.com/items/scrap-metal/">"#
        ));
        assert!(html.contains(
            r#"<meta property="og:url" content="https://example.com/items/scrap-metal/">"#
        ));
        assert!(html.contains(r#"<meta property="og:type" content="website">"#));
        assert!(html.contains(
            r#"<meta property="og:image" content="https://example.com/icon.svg">"#
        ));
    }

    #[test]
    fn head_links_and_deferred_script() {
        let it = item(&[("Name", "Wires")]);
        let html = render(&it, &SiteConfig::default());
        assert!(html.contains(r#"<link rel="icon" href="/icon.svg">"#));
        assert!(html.contains(r#"<link rel="manifest" href="/manifest.webmanifest">"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="/theme.css">"#));
        assert!(html.contains(r#"defer src="/theme.js""#));
        assert!(html.contains("<style>"));
    }

    #[test]
    fn keywords_derive_from_name_and_slug() {
        let it = item(&[("Name", "Pulse Rifle Mk.II")]);
        let html = render(&it, &SiteConfig::default());
        assert!(html.contains("item database pulse rifle mk.ii"));
        assert!(html.contains("pulse-rifle-mk-ii"));
    }

    #[test]
    fn json_ld_block_is_product_with_properties() {
        let it = item(&[("Name", "Scrap Metal"), ("Rarity", "Common")]);
        let html = render(&it, &SiteConfig::default());

        let start = html.find(r#"<script type="application/ld+json">"#).unwrap();
        let block = &html[start + r#"<script type="application/ld+json">"#.len()..];
        let end = block.find("</script>").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&block[..end]).unwrap();

        assert_eq!(parsed["@type"], "Product");
        assert_eq!(parsed["name"], "Scrap Metal");
        assert_eq!(parsed["identifier"], "scrap-metal");
        assert_eq!(parsed["brand"]["name"], "Item Database");
        let props = parsed["additionalProperty"].as_array().unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props[0]["name"], "Name");
        assert_eq!(props[1]["name"], "Rarity");
        assert_eq!(props[1]["value"], "Common");
    }

    #[test]
    fn item_text_is_escaped() {
        let it = item(&[
            ("Name", "<script>alert('xss')</script>"),
            ("Note & Co", "a < b"),
        ]);
        let html = render(&it, &SiteConfig::default());
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<th>Note &amp; Co</th>"));
        assert!(html.contains("<td>a &lt; b</td>"));
    }

    #[test]
    fn footer_nav_lists_non_root_routes() {
        let mut config = SiteConfig::default();
        config.routes.push(StaticRoute {
            path: "/loot-guide.html".to_string(),
            title: "Loot Farming Guide".to_string(),
            priority: 0.8,
            changefreq: "weekly".to_string(),
        });
        let it = item(&[("Name", "Wires")]);
        let html = render(&it, &config);
        assert!(html.contains(r#"<a href="/loot-guide.html">Loot Farming Guide</a>"#));
        assert!(html.contains("← Back to Item Database"));
        // The root route is the back link, not a duplicate footer entry.
        assert!(!html.contains(r#"<a href="/">Home</a>"#));
    }

    #[test]
    fn generate_writes_one_page_per_item() {
        let tmp = TempDir::new().unwrap();
        let catalog = vec![
            item(&[("Name", "Scrap Metal"), ("Rarity", "Common")]),
            item(&[("Name", "Pulse Rifle Mk.II")]),
        ];
        let report = generate_pages(&catalog, &SiteConfig::default(), tmp.path()).unwrap();

        assert_eq!(report.pages_written, 2);
        assert!(report.collisions.is_empty());
        assert!(tmp.path().join("items/scrap-metal/index.html").is_file());
        assert!(
            tmp.path()
                .join("items/pulse-rifle-mk-ii/index.html")
                .is_file()
        );
    }

    #[test]
    fn generate_is_idempotent_byte_for_byte() {
        let tmp = TempDir::new().unwrap();
        let catalog = vec![item(&[("Name", "Scrap Metal"), ("Rarity", "Common")])];
        let config = SiteConfig::default();

        generate_pages(&catalog, &config, tmp.path()).unwrap();
        let first = fs::read(tmp.path().join("items/scrap-metal/index.html")).unwrap();
        generate_pages(&catalog, &config, tmp.path()).unwrap();
        let second = fs::read(tmp.path().join("items/scrap-metal/index.html")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_name_writes_fallback_page() {
        let tmp = TempDir::new().unwrap();
        let catalog = vec![item(&[("Rarity", "Common")])];
        let report = generate_pages(&catalog, &SiteConfig::default(), tmp.path()).unwrap();

        assert_eq!(report.pages_written, 1);
        let html = fs::read_to_string(tmp.path().join("items/item/index.html")).unwrap();
        assert!(html.contains("<h1>item</h1>"));
    }

    #[test]
    fn all_symbol_name_lands_in_items_root() {
        // Empty slug is valid: the page goes to items/index.html.
        let tmp = TempDir::new().unwrap();
        let catalog = vec![item(&[("Name", "!!!")])];
        generate_pages(&catalog, &SiteConfig::default(), tmp.path()).unwrap();
        assert!(tmp.path().join("items/index.html").is_file());
    }

    #[test]
    fn colliding_items_are_reported_and_last_wins() {
        let tmp = TempDir::new().unwrap();
        let catalog = vec![
            item(&[("Name", "Scrap Metal"), ("Rarity", "Common")]),
            item(&[("Name", "scrap.metal"), ("Rarity", "Rare")]),
        ];
        let report = generate_pages(&catalog, &SiteConfig::default(), tmp.path()).unwrap();

        assert_eq!(report.collisions.len(), 1);
        assert_eq!(report.collisions[0].slug, "scrap-metal");

        let html = fs::read_to_string(tmp.path().join("items/scrap-metal/index.html")).unwrap();
        assert!(html.contains("<td>Rare</td>"), "later item overwrites");
    }

    #[test]
    fn clean_items_dir_removes_stale_output() {
        let tmp = TempDir::new().unwrap();
        let stale = tmp.path().join("items/removed-item");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("index.html"), "stale").unwrap();

        clean_items_dir(tmp.path()).unwrap();
        assert!(!tmp.path().join("items").exists());

        // Cleaning an already-clean root is a no-op.
        clean_items_dir(tmp.path()).unwrap();
    }
}
