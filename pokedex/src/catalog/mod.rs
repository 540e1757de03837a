//! Catalog - the ordered item sequence and its on-disk JSON cache.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::items::{Item, ItemId, PokemonRecord};

/// Errors raised while loading or validating catalog data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to access catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed schema TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

/// An ordered sequence of items. Order drives question order, so it is
/// preserved through the cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from items, numbering them by position.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut catalog = Self::new();
        for item in items {
            catalog.push(item);
        }
        catalog
    }

    /// Build a catalog from PokeAPI documents in listing order.
    pub fn from_pokeapi(records: impl IntoIterator<Item = PokemonRecord>) -> Self {
        Self::from_items(records.into_iter().map(PokemonRecord::into_item))
    }

    /// Append an item, assigning it the next id.
    pub fn push(&mut self, mut item: Item) -> ItemId {
        let id = ItemId(self.items.len() as u32);
        item.id = id;
        self.items.push(item);
        id
    }

    /// Get item by ID.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.index())
    }

    /// Find an item by name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Load a catalog previously written by [`Catalog::save_json`].
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let items: Vec<Item> = serde_json::from_str(&text)?;
        let catalog = Self::from_items(items);

        info!(path = %path.display(), items = catalog.len(), "loaded catalog cache");
        Ok(catalog)
    }

    /// Write the catalog as a JSON array of items.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let text = serde_json::to_string(&self.items)?;
        fs::write(path, text).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), items = self.len(), "saved catalog cache");
        Ok(())
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::from_items(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starters() -> Catalog {
        Catalog::from_items([
            Item::new("bulbasaur").with_attributes("types", ["grass", "poison"]),
            Item::new("charmander").with_attribute("types", "fire"),
            Item::new("squirtle").with_attribute("types", "water"),
        ])
    }

    #[test]
    fn test_ids_follow_position() {
        let catalog = starters();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(ItemId(1)).unwrap().name, "charmander");
        assert_eq!(catalog.find("squirtle").unwrap().id, ItemId(2));
        assert!(catalog.get(ItemId(3)).is_none());
    }

    #[test]
    fn test_cache_preserves_order() {
        let catalog = starters();
        let path = std::env::temp_dir().join(format!(
            "pokedex-cache-test-{}.json",
            std::process::id()
        ));

        catalog.save_json(&path).unwrap();
        let loaded = Catalog::load_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, catalog);
        let names: Vec<_> = loaded.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["bulbasaur", "charmander", "squirtle"]);
    }

    #[test]
    fn test_missing_cache_is_io_error() {
        let path = std::env::temp_dir().join("pokedex-cache-does-not-exist.json");
        assert!(matches!(
            Catalog::load_json(&path),
            Err(CatalogError::Io { .. })
        ));
    }

    #[test]
    fn test_malformed_cache_is_json_error() {
        let path = std::env::temp_dir().join(format!(
            "pokedex-cache-malformed-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json").unwrap();
        let result = Catalog::load_json(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(CatalogError::Json(_))));
    }
}
