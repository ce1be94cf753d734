// SPDX-License-Identifier: MPL-2.0
//! Static certificate catalog.
//!
//! The catalog is the fixed, ordered master list of items the gallery can
//! reveal. It is built once at startup and never mutated; construction
//! rejects duplicate ids so that de-duplication in the gallery can rely on
//! ids alone.

pub mod data;

use std::collections::HashSet;
use std::fmt;

/// Unique identifier of a catalog item.
pub type ItemId = u32;

/// One certificate shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    pub category: String,
    /// Asset path of the certificate image, relative to the assets root.
    pub image_ref: String,
}

impl CatalogItem {
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        category: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Serial label printed on the card spine.
    #[must_use]
    pub fn serial(&self) -> String {
        format!("{}00X4", self.id)
    }
}

/// Errors raised while assembling a catalog or a seed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The same id appears twice in one list.
    DuplicateId(ItemId),
    /// A prefix seed asked for more items than the catalog holds.
    SeedTooLarge { requested: usize, available: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateId(id) => write!(f, "duplicate catalog id {}", id),
            CatalogError::SeedTooLarge {
                requested,
                available,
            } => write!(
                f,
                "seed of {} items requested but catalog only has {}",
                requested, available
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered list of items with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        ensure_unique_ids(&items)?;
        Ok(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the first `len` items, in catalog order.
    pub fn prefix(&self, len: usize) -> Result<Vec<CatalogItem>, CatalogError> {
        if len > self.items.len() {
            return Err(CatalogError::SeedTooLarge {
                requested: len,
                available: self.items.len(),
            });
        }
        Ok(self.items[..len].to_vec())
    }
}

/// Fails with the first id that appears more than once.
pub fn ensure_unique_ids(items: &[CatalogItem]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(CatalogError::DuplicateId(item.id));
        }
    }
    Ok(())
}
