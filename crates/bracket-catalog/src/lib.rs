//! JSON-backed food catalog.
//!
//! The catalog is the session's upstream collaborator: it owns the item
//! records (name, cuisine, image paths) and hands out opaque [`ItemId`]s
//! for a session to decide over. Sessions never see item content.

pub mod catalog;
pub mod error;
pub mod item;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use item::{Item, ItemId};
