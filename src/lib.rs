//! # itemdex
//!
//! A minimal static page generator for item-database sites. Your catalog is
//! the data source: one JSON file of item records, each an arbitrary set of
//! named fields, becomes one crawler-ready HTML page per item plus a
//! sitemap covering every page.
//!
//! # Architecture: Two Independent Passes
//!
//! ```text
//! 1. Pages     data.json  →  public/items/{slug}/index.html   (one per item)
//! 2. Sitemap   data.json  →  public/sitemap.xml               (routes + items)
//! ```
//!
//! The passes never read each other's output. They stay consistent because
//! both derive item identifiers through the same [`slug::slugify`] function
//! and build URLs through the same [`config::SiteConfig::item_url`] joiner:
//! for every page written there is exactly one sitemap entry, and vice
//! versa. Each pass fully regenerates its output on every run, so a failed
//! run is repaired by simply re-running.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Catalog loading, the `Item` record type, slug-collision detection |
//! | [`slug`] | Name → URL-safe identifier, shared by both passes |
//! | [`escape`] | Explicit entity escaping for text assembled outside maud |
//! | [`pages`] | Pass 1 — renders and writes one HTML document per item |
//! | [`sitemap`] | Pass 2 — assembles and writes `sitemap.xml` |
//! | [`config`] | `config.toml` loading, validation, URL joining |
//! | [`output`] | CLI output formatting for run summaries and warnings |
//!
//! # Design Decisions
//!
//! ## Schemaless Items
//!
//! Items are ordered string-keyed maps, not structs. The only field the
//! generator interprets is `Name` (with a fixed fallback when absent);
//! everything else flows verbatim into the attribute table and the JSON-LD
//! `additionalProperty` list, in catalog order. Adding a column to the data
//! file changes the output without touching the generator.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped, which is
//! what makes rendering untrusted catalog fields safe by default.
//!
//! ## Deterministic Output
//!
//! Generation embeds no timestamps and iterates fields in source order
//! (serde_json's `preserve_order`), so two runs over the same catalog are
//! byte-identical. That makes output diffs meaningful and deploys cheap.

pub mod catalog;
pub mod config;
pub mod escape;
pub mod output;
pub mod pages;
pub mod sitemap;
pub mod slug;

#[cfg(test)]
pub(crate) mod test_helpers;
