//! Item definitions - the guessable entries of a catalog.

mod pokeapi;

pub use pokeapi::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position of an item within its catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One guessable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,

    /// Group name -> values in the order the source listed them.
    #[serde(default)]
    pub attributes: HashMap<String, Vec<String>>,
}

impl Item {
    /// Create a new item with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::default(),
            name: name.into(),
            attributes: HashMap::new(),
        }
    }

    /// Append a single value to a group.
    pub fn with_attribute(mut self, group: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .entry(group.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Append several values to a group.
    pub fn with_attributes<I, S>(mut self, group: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes
            .entry(group.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Values listed for a group, empty if the item has none.
    pub fn values(&self, group: &str) -> &[String] {
        self.attributes
            .get(group)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of entries the item has in a group.
    pub fn count(&self, group: &str) -> usize {
        self.values(group).len()
    }

    /// Check whether the item lists a value in a group.
    pub fn has_value(&self, group: &str, value: &str) -> bool {
        self.values(group).iter().any(|v| v == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item() {
        let item = Item::new("pikachu");
        assert_eq!(item.name, "pikachu");
        assert!(item.attributes.is_empty());
        assert_eq!(item.count("types"), 0);
    }

    #[test]
    fn test_item_builder_keeps_order() {
        let item = Item::new("charizard")
            .with_attribute("types", "fire")
            .with_attribute("types", "flying")
            .with_attributes("moves", ["ember", "fly"]);

        assert_eq!(item.values("types"), ["fire", "flying"]);
        assert_eq!(item.count("moves"), 2);
        assert!(item.has_value("moves", "fly"));
        assert!(!item.has_value("moves", "surf"));
    }

    #[test]
    fn test_missing_group_is_empty() {
        let item = Item::new("ditto").with_attribute("types", "normal");
        assert!(item.values("games").is_empty());
    }
}
