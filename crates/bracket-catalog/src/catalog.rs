//! Catalog loading and queries.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::item::{Item, ItemId};

/// Shape of one record in the catalog JSON file. Unknown fields (attribute
/// maps and the like) are ignored.
#[derive(Debug, Deserialize)]
struct RawItem {
    id: String,
    name: String,
    cuisine: String,
    #[serde(default)]
    img: Option<String>,
    #[serde(default)]
    character_img: Option<String>,
}

/// An immutable, ordered catalog of selectable items.
///
/// Constructed once at startup and passed by reference to whoever needs it;
/// there is no process-wide catalog instance.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Load a catalog from a JSON file containing an array of item records.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, the JSON does not parse, an item
    /// identifier is blank, or the same identifier occurs twice.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&data)?;
        info!(path = %path.display(), items = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<RawItem> = serde_json::from_str(json)?;
        let mut items = Vec::with_capacity(raw.len());
        let mut seen: HashSet<ItemId> = HashSet::with_capacity(raw.len());
        for record in raw {
            let id = ItemId::new(record.id)?;
            if !seen.insert(id.clone()) {
                return Err(CatalogError::DuplicateId {
                    id: id.as_str().to_string(),
                });
            }
            let image = normalize_image_path(
                record.img.as_deref(),
                &format!("food_images/{}/{}.png", record.cuisine, record.name),
            );
            let character_image = normalize_image_path(
                record.character_img.as_deref(),
                &format!("food_character_images/{}/{}.png", record.cuisine, record.name),
            );
            debug!(id = %id, name = %record.name, cuisine = %record.cuisine, "catalog item");
            items.push(Item {
                id,
                name: record.name,
                cuisine: record.cuisine,
                image,
                character_image,
            });
        }
        Ok(Self { items })
    }

    /// All items, in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item identifiers in catalog order, ready to seed a session.
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    /// Look up one item by identifier.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Items belonging to the given cuisine, in catalog order.
    pub fn by_cuisine(&self, cuisine: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.cuisine == cuisine)
            .collect()
    }

    /// Distinct cuisine names, sorted.
    pub fn cuisines(&self) -> Vec<String> {
        let mut cuisines: Vec<String> = self
            .items
            .iter()
            .map(|item| item.cuisine.clone())
            .collect();
        cuisines.sort();
        cuisines.dedup();
        cuisines
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Strip a leading `./` from an asset path, or fall back to the derived
/// default when the record carries none.
fn normalize_image_path(path: Option<&str>, default: &str) -> String {
    match path {
        Some(path) => path.strip_prefix("./").unwrap_or(path).to_string(),
        None => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_relative_prefixes() {
        assert_eq!(
            normalize_image_path(Some("./food_images/korean/bibimbap.png"), "unused"),
            "food_images/korean/bibimbap.png"
        );
        assert_eq!(
            normalize_image_path(Some("food_images/korean/bibimbap.png"), "unused"),
            "food_images/korean/bibimbap.png"
        );
        assert_eq!(
            normalize_image_path(None, "food_images/korean/bibimbap.png"),
            "food_images/korean/bibimbap.png"
        );
    }
}
