//! Catalog item records and their identifier newtype.

use std::fmt;

use crate::error::CatalogError;

/// Opaque identifier for one catalog item.
///
/// Sessions only ever see these; all display metadata stays behind the
/// catalog's lookup.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::InvalidItemId { value });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One selectable food with its display metadata.
///
/// Image paths are asset-relative; `Catalog` normalizes them at load time
/// (leading `./` stripped, defaults derived from cuisine and name).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub cuisine: String,
    pub image: String,
    pub character_image: String,
}
