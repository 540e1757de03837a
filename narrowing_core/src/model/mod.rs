//! Attribute model - the read-only matrices behind every question.
//!
//! Built once per catalog. Games only read it, so a single model can be
//! wrapped in an `Arc` and shared by independent engines.

mod group;

pub use group::*;

use pokedex::{Catalog, CatalogSchema};
use tracing::info;

use crate::error::EngineError;

/// A catalog together with one attribute matrix per schema group.
#[derive(Debug, Clone)]
pub struct AttributeModel {
    catalog: Catalog,

    /// Groups in schema priority order.
    groups: Vec<AttributeGroup>,
}

impl AttributeModel {
    /// Build the matrices for every group in the schema.
    ///
    /// Fails with [`EngineError::InvalidCatalog`] when the catalog is empty.
    pub fn build(catalog: Catalog, schema: &CatalogSchema) -> Result<Self, EngineError> {
        if catalog.is_empty() {
            return Err(EngineError::InvalidCatalog(
                "catalog contains no items".to_string(),
            ));
        }
        schema.validate()?;

        let groups: Vec<_> = schema
            .groups
            .iter()
            .map(|spec| AttributeGroup::build(spec, &catalog))
            .collect();

        info!(
            items = catalog.len(),
            groups = groups.len(),
            rows = groups.iter().map(AttributeGroup::row_count).sum::<usize>(),
            "built attribute model"
        );

        Ok(Self { catalog, groups })
    }

    /// Build with the default pokemon schema.
    pub fn pokemon(catalog: Catalog) -> Result<Self, EngineError> {
        Self::build(catalog, &CatalogSchema::pokemon())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn groups(&self) -> &[AttributeGroup] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&AttributeGroup> {
        self.groups.get(index)
    }

    /// Find a group by name.
    pub fn group_named(&self, name: &str) -> Option<(usize, &AttributeGroup)> {
        self.groups
            .iter()
            .enumerate()
            .find(|(_, group)| group.name() == name)
    }

    pub fn item_count(&self) -> usize {
        self.catalog.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex::{GroupSpec, Item};

    #[test]
    fn test_empty_catalog_is_rejected() {
        let result = AttributeModel::pokemon(Catalog::new());
        assert!(matches!(result, Err(EngineError::InvalidCatalog(_))));
    }

    #[test]
    fn test_invalid_schema_is_rejected() {
        let catalog = Catalog::from_items([Item::new("a")]);
        let schema = CatalogSchema::new(vec![GroupSpec::values("types", "types", "no placeholder")]);
        assert!(matches!(
            AttributeModel::build(catalog, &schema),
            Err(EngineError::Catalog(_))
        ));
    }

    #[test]
    fn test_groups_follow_schema_order() {
        let catalog = Catalog::from_items([
            Item::new("a").with_attribute("types", "fire"),
            Item::new("b").with_attribute("moves", "surf"),
        ]);
        let model = AttributeModel::pokemon(catalog).unwrap();

        let names: Vec<_> = model.groups().iter().map(|g| g.name()).collect();
        assert_eq!(names, ["num_types", "types", "moves", "games"]);
        assert_eq!(model.group_named("games").unwrap().1.row_count(), 0);
        assert_eq!(model.item_count(), 2);
    }

    #[test]
    fn test_build_is_deterministic() {
        let items = || {
            Catalog::from_items([
                Item::new("a").with_attributes("moves", ["surf", "tackle", "ember"]),
                Item::new("b").with_attributes("moves", ["growl", "surf"]),
            ])
        };
        let first = AttributeModel::pokemon(items()).unwrap();
        let second = AttributeModel::pokemon(items()).unwrap();

        let (_, a) = first.group_named("moves").unwrap();
        let (_, b) = second.group_named("moves").unwrap();
        assert_eq!(a.values(), ["surf", "tackle", "ember", "growl"]);
        assert_eq!(a.values(), b.values());
    }
}
