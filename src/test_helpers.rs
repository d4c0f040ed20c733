//! Shared test utilities for the itemdex test suite.
//!
//! Items are plain ordered maps, so most tests only need a terse way to
//! build one from literal key/value pairs:
//!
//! ```rust
//! use crate::test_helpers::item;
//!
//! let it = item(&[("Name", "Scrap Metal"), ("Rarity", "Common")]);
//! assert_eq!(it.slug(), "scrap-metal");
//! ```

use crate::catalog::Item;
use serde_json::{Map, Value};

/// Build an [`Item`] from string field pairs, preserving the given order.
pub fn item(fields: &[(&str, &str)]) -> Item {
    let mut map = Map::new();
    for (key, value) in fields {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
    Item { fields: map }
}
