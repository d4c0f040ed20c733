//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. All settings are optional:
//! a missing file yields the stock defaults, and user files need only
//! specify the values they override. Unknown keys are rejected to catch
//! typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! [site]
//! base_url = "https://example.com"  # Canonical origin, no trailing slash
//! base_path = "/"                   # Deploy prefix (e.g. "/myrepo/")
//! name = "Item Database"            # Site name used in titles and metadata
//!
//! [assets]
//! icon = "/icon.svg"                # Also the og:image
//! manifest = "/manifest.webmanifest"
//! stylesheet = "/theme.css"
//! script = "/theme.js"              # Loaded deferred on every item page
//!
//! [[routes]]                        # Static routes listed in the sitemap,
//! path = "/"                        # in order; non-root routes also appear
//! title = "Home"                    # in each item page's footer nav
//! priority = 1.0
//! changefreq = "weekly"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Valid sitemap-protocol changefreq values.
const CHANGEFREQS: &[&str] = &[
    "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
];

/// Site configuration loaded from `config.toml`.
///
/// Both generation passes receive this by reference; together with the
/// catalog and the output root it is the entire generation context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity: canonical origin, deploy prefix, display name.
    pub site: SiteSection,
    /// Link paths for static assets referenced from every item page.
    pub assets: AssetsConfig,
    /// Fixed routes listed at the top of the sitemap, in order.
    pub routes: Vec<StaticRoute>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteSection::default(),
            assets: AssetsConfig::default(),
            routes: default_routes(),
        }
    }
}

/// Site identity settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Canonical origin for absolute URLs, without a trailing slash.
    pub base_url: String,
    /// Path prefix the site is served under. `/` for a root deploy.
    pub base_path: String,
    /// Display name, substituted into titles, descriptions, and JSON-LD.
    pub name: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: "https://example.com".to_string(),
            base_path: "/".to_string(),
            name: "Item Database".to_string(),
        }
    }
}

/// Static asset link paths, root-absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    pub icon: String,
    pub manifest: String,
    pub stylesheet: String,
    pub script: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            icon: "/icon.svg".to_string(),
            manifest: "/manifest.webmanifest".to_string(),
            stylesheet: "/theme.css".to_string(),
            script: "/theme.js".to_string(),
        }
    }
}

/// A fixed top-level route: sitemap entry plus footer-nav link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticRoute {
    /// Root-absolute path, e.g. `/` or `/loot-guide.html`.
    pub path: String,
    /// Link text in the item-page footer nav.
    pub title: String,
    /// Sitemap priority, 0.0 to 1.0.
    pub priority: f64,
    /// Sitemap change frequency (`weekly`, `monthly`, ...).
    pub changefreq: String,
}

fn default_routes() -> Vec<StaticRoute> {
    vec![StaticRoute {
        path: "/".to_string(),
        title: "Home".to_string(),
        priority: 1.0,
        changefreq: "weekly".to_string(),
    }]
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "site.base_url must not be empty".into(),
            ));
        }
        if self.site.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must not end with '/' (base_path supplies the slash)".into(),
            ));
        }
        if !self.site.base_path.starts_with('/') || !self.site.base_path.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_path must start and end with '/'".into(),
            ));
        }
        for route in &self.routes {
            if !route.path.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "route path '{}' must start with '/'",
                    route.path
                )));
            }
            if !(0.0..=1.0).contains(&route.priority) {
                return Err(ConfigError::Validation(format!(
                    "route '{}' priority {} must be between 0.0 and 1.0",
                    route.path, route.priority
                )));
            }
            if !CHANGEFREQS.contains(&route.changefreq.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "route '{}' changefreq '{}' is not a sitemap changefreq value",
                    route.path, route.changefreq
                )));
            }
        }
        Ok(())
    }

    /// Absolute URL of a static route: origin + route path.
    pub fn route_url(&self, path: &str) -> String {
        format!("{}{}", self.site.base_url, path)
    }

    /// Absolute URL of an item page: origin + base path + `items/{slug}/`.
    ///
    /// Both passes build item URLs through this one joiner so the canonical
    /// link, og:url, and sitemap loc can never drift apart.
    pub fn item_url(&self, slug: &str) -> String {
        format!(
            "{}{}items/{}/",
            self.site.base_url, self.site.base_path, slug
        )
    }
}

/// Load config from `path`, or stock defaults when no file exists there.
///
/// Rejects unknown keys and validates the result.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and
/// explanations. Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# itemdex Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

[site]
# Canonical origin for absolute URLs (canonical link, Open Graph, sitemap).
# No trailing slash.
base_url = "https://example.com"

# Path prefix the site is served under. Use "/" for a root deploy, or
# e.g. "/myrepo/" for project pages. Must start and end with "/".
base_path = "/"

# Site name, substituted into page titles, descriptions, keywords, and the
# JSON-LD brand.
name = "Item Database"

# ---------------------------------------------------------------------------
# Static asset links (root-absolute paths, emitted into every item page)
# ---------------------------------------------------------------------------
[assets]
icon = "/icon.svg"                  # favicon; also used as og:image
manifest = "/manifest.webmanifest"
stylesheet = "/theme.css"
script = "/theme.js"                # loaded with `defer`

# ---------------------------------------------------------------------------
# Static routes
# ---------------------------------------------------------------------------
# Listed at the top of the sitemap in this order. Routes other than "/" are
# also linked from the footer nav of every item page. Item pages themselves
# are appended automatically (priority 0.60, changefreq "monthly").
[[routes]]
path = "/"
title = "Home"
priority = 1.0
changefreq = "weekly"

# [[routes]]
# path = "/what-to-keep.html"
# title = "What to Keep Guide"
# priority = 0.8
# changefreq = "weekly"
"##
}
