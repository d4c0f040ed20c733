//! Sitemap generation.
//!
//! The second, independent pass of the build: one `sitemap.xml` listing the
//! configured static routes followed by one entry per catalog item. Item
//! URLs come from the same slug derivation and the same URL joiner as the
//! pages pass, so every generated page has a sitemap entry and vice versa.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <priority>1.00</priority>
//!     <changefreq>weekly</changefreq>
//!   </url>
//! </urlset>
//! ```

use crate::catalog::Item;
use crate::config::SiteConfig;
use crate::escape::escape_html;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// XML namespace for the sitemap protocol.
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Fixed priority and changefreq for item entries: below every static
/// route, refreshed when the catalog changes.
const ITEM_PRIORITY: f64 = 0.60;
const ITEM_CHANGEFREQ: &str = "monthly";

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a sitemap run, consumed by [`crate::output`].
#[derive(Debug)]
pub struct SitemapReport {
    pub static_routes: usize,
    pub item_entries: usize,
}

/// Sitemap document: static routes first, then item entries, in order.
pub struct Sitemap {
    urls: Vec<UrlEntry>,
    static_routes: usize,
}

/// Single `<url>` entry.
struct UrlEntry {
    loc: String,
    priority: f64,
    changefreq: String,
}

impl Sitemap {
    /// Build the sitemap from the catalog and static-route configuration.
    pub fn from_catalog(catalog: &[Item], config: &SiteConfig) -> Self {
        let mut urls: Vec<UrlEntry> = config
            .routes
            .iter()
            .map(|route| UrlEntry {
                loc: config.route_url(&route.path),
                priority: route.priority,
                changefreq: route.changefreq.clone(),
            })
            .collect();
        let static_routes = urls.len();

        urls.extend(catalog.iter().map(|item| UrlEntry {
            loc: config.item_url(&item.slug()),
            priority: ITEM_PRIORITY,
            changefreq: ITEM_CHANGEFREQ.to_string(),
        }));

        Self {
            urls,
            static_routes,
        }
    }

    /// Generate the sitemap XML string.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 128);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!("<urlset xmlns=\"{SITEMAP_NS}\">\n"));

        for entry in &self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_html(&entry.loc)));
            xml.push_str(&format!(
                "    <priority>{:.2}</priority>\n",
                entry.priority
            ));
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                entry.changefreq
            ));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Build the sitemap and write it to `output_path`, replacing any prior
/// file. The parent directory is created if needed.
pub fn generate_sitemap(
    catalog: &[Item],
    config: &SiteConfig,
    output_path: &Path,
) -> Result<SitemapReport, SitemapError> {
    let sitemap = Sitemap::from_catalog(catalog, config);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, sitemap.to_xml())?;

    Ok(SitemapReport {
        static_routes: sitemap.static_routes,
        item_entries: sitemap.urls.len() - sitemap.static_routes,
    })
}
