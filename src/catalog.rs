//! Catalog loading and the item data model.
//!
//! The catalog is a single JSON file (`data.json`): an ordered array of
//! records with arbitrary string-keyed fields. There is no schema beyond the
//! optional `Name` field; everything else is rendered verbatim as key/value
//! rows, so items are kept as ordered maps rather than fixed structs.
//!
//! Both generation passes read the catalog once, up front. A read or parse
//! failure aborts the whole run before any output is written.

use crate::slug::slugify;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Substituted when an item has no usable `Name` field, so generation never
/// fails solely because a record is nameless.
pub const FALLBACK_NAME: &str = "item";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One catalog record: an ordered mapping from field name to field value.
///
/// Field iteration order is the order in `data.json` (serde_json's
/// `preserve_order` feature) and flows unchanged into the attribute table
/// and the JSON-LD `additionalProperty` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Item {
    pub fields: Map<String, Value>,
}

impl Item {
    /// The item's display name: the `Name` field rendered as a string, or
    /// [`FALLBACK_NAME`] when the field is absent, null, or renders empty.
    pub fn name(&self) -> String {
        match self.fields.get("Name").map(display_value) {
            Some(name) if !name.is_empty() => name,
            _ => FALLBACK_NAME.to_string(),
        }
    }

    /// Slug of this item's resolved name. Identical derivation in both
    /// passes; see [`crate::slug::slugify`].
    pub fn slug(&self) -> String {
        slugify(&self.name())
    }
}

/// Render a JSON field value for display: strings verbatim, numbers and
/// booleans as their JSON text, null as empty. Nested arrays/objects keep
/// their compact JSON form (the catalog is not expected to contain them,
/// but the table renderer must not fail if it does).
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Load the catalog from `path`. Single read, single parse, no recovery:
/// this is the fatal-on-failure entry gate for every generator run.
pub fn load_catalog(path: &Path) -> Result<Vec<Item>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// A group of two or more items whose names derive the same slug.
#[derive(Debug, Clone, PartialEq)]
pub struct SlugCollision {
    pub slug: String,
    pub names: Vec<String>,
}

/// Find slug collisions across the catalog, preserving first-seen slug
/// order. Colliding items silently overwrite one another's page output, so
/// the generators surface these as warnings rather than disambiguating.
pub fn slug_collisions(items: &[Item]) -> Vec<SlugCollision> {
    let mut groups: Vec<SlugCollision> = Vec::new();
    for item in items {
        let name = item.name();
        let slug = slugify(&name);
        match groups.iter_mut().find(|g| g.slug == slug) {
            Some(group) => group.names.push(name),
            None => groups.push(SlugCollision {
                slug,
                names: vec![name],
            }),
        }
    }
    groups.retain(|g| g.names.len() > 1);
    groups
}
