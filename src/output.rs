//! CLI output formatting for generator runs.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! Slug-collision warnings precede the summary line so they are visible
//! even when the summary scrolls past:
//!
//! ```text
//! warning: 2 items share slug 'scrap-metal': Scrap Metal, scrap.metal
//! Generated 128 item pages under public/items
//! ```

use crate::catalog::SlugCollision;
use crate::pages::PageReport;
use crate::sitemap::SitemapReport;
use std::path::Path;

/// One warning line per colliding slug group, naming every item involved.
pub fn format_collisions(collisions: &[SlugCollision]) -> Vec<String> {
    collisions
        .iter()
        .map(|c| {
            format!(
                "warning: {} items share slug '{}': {}",
                c.names.len(),
                c.slug,
                c.names.join(", ")
            )
        })
        .collect()
}

/// Format pages-run output: collision warnings, then the summary count.
pub fn format_pages_output(report: &PageReport, output_root: &Path) -> Vec<String> {
    let mut lines = format_collisions(&report.collisions);
    lines.push(format!(
        "Generated {} item pages under {}",
        report.pages_written,
        output_root.join("items").display()
    ));
    lines
}

/// Format sitemap-run output.
pub fn format_sitemap_output(report: &SitemapReport, output_path: &Path) -> Vec<String> {
    vec![format!(
        "Generated sitemap with {} static routes and {} item entries at {}",
        report.static_routes,
        report.item_entries,
        output_path.display()
    )]
}

/// Format check output: catalog size, collision warnings, verdict.
pub fn format_check_output(item_count: usize, collisions: &[SlugCollision]) -> Vec<String> {
    let mut lines = vec![format!("Catalog: {} items", item_count)];
    lines.extend(format_collisions(collisions));
    lines.push("Catalog is valid".to_string());
    lines
}

pub fn print_pages_output(report: &PageReport, output_root: &Path) {
    for line in format_pages_output(report, output_root) {
        println!("{}", line);
    }
}

pub fn print_sitemap_output(report: &SitemapReport, output_path: &Path) {
    for line in format_sitemap_output(report, output_path) {
        println!("{}", line);
    }
}

pub fn print_check_output(item_count: usize, collisions: &[SlugCollision]) {
    for line in format_check_output(item_count, collisions) {
        println!("{}", line);
    }
}
