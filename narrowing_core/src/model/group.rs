//! Attribute groups - one boolean matrix per question dimension.

use pokedex::{Catalog, GroupKind, GroupSpec};
use std::collections::HashMap;

/// A question dimension and the items exhibiting each of its values.
///
/// Rows are attribute values, columns are items in catalog order.
#[derive(Debug, Clone)]
pub struct AttributeGroup {
    spec: GroupSpec,

    /// Row labels in first-seen order.
    values: Vec<String>,

    /// Value -> row.
    index: HashMap<String, usize>,

    /// `has[row][item]`.
    has: Vec<Vec<bool>>,
}

impl AttributeGroup {
    /// Build the group's matrix by scanning the catalog in order.
    pub fn build(spec: &GroupSpec, catalog: &Catalog) -> Self {
        let mut group = Self {
            spec: spec.clone(),
            values: Vec::new(),
            index: HashMap::new(),
            has: Vec::new(),
        };

        match &spec.kind {
            GroupKind::Values { source } => {
                for item in catalog.iter() {
                    for value in item.values(source) {
                        let row = group.intern(value, catalog.len());
                        group.has[row][item.id.index()] = true;
                    }
                }
            }
            GroupKind::Count { source, max } => {
                for count in 0..=*max {
                    group.intern(&count.to_string(), catalog.len());
                }
                for item in catalog.iter() {
                    let count = item.count(source);
                    if count <= *max {
                        group.has[count][item.id.index()] = true;
                    }
                }
            }
        }

        group
    }

    /// Row for a value, adding an all-false row the first time it is seen.
    fn intern(&mut self, value: &str, item_count: usize) -> usize {
        if let Some(&row) = self.index.get(value) {
            return row;
        }

        let row = self.values.len();
        self.index.insert(value.to_string(), row);
        self.values.push(value.to_string());
        self.has.push(vec![false; item_count]);
        row
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn spec(&self) -> &GroupSpec {
        &self.spec
    }

    /// Row labels in insertion order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    /// Look up the row holding a value.
    pub fn row_of(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }

    pub fn label(&self, row: usize) -> Option<&str> {
        self.values.get(row).map(String::as_str)
    }

    /// The membership column for one row.
    pub fn row(&self, row: usize) -> &[bool] {
        &self.has[row]
    }

    pub fn has(&self, row: usize, item: usize) -> bool {
        self.has[row][item]
    }

    /// Number of viable items exhibiting a row.
    pub fn count_true(&self, row: usize, viable: &[bool]) -> usize {
        self.has[row]
            .iter()
            .zip(viable)
            .filter(|(has, viable)| **has && **viable)
            .count()
    }

    /// Render the question asked for a row.
    pub fn question(&self, row: usize) -> String {
        self.spec.render(&self.values[row])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex::Item;

    fn catalog() -> Catalog {
        Catalog::from_items([
            Item::new("a").with_attributes("types", ["fire"]),
            Item::new("b").with_attributes("types", ["water"]),
            Item::new("c").with_attributes("types", ["fire", "flying"]),
            Item::new("d"),
        ])
    }

    #[test]
    fn test_values_in_first_seen_order() {
        let spec = GroupSpec::values("types", "types", "Type {}?");
        let group = AttributeGroup::build(&spec, &catalog());

        assert_eq!(group.values(), ["fire", "water", "flying"]);
        assert_eq!(group.row_of("flying"), Some(2));
        assert_eq!(group.row(0), [true, false, true, false]);
        assert_eq!(group.row(2), [false, false, true, false]);
        assert_eq!(group.question(1), "Type water?");
    }

    #[test]
    fn test_count_buckets() {
        let spec = GroupSpec::count("num_types", "types", 2, "Exactly {} types?");
        let group = AttributeGroup::build(&spec, &catalog());

        assert_eq!(group.values(), ["0", "1", "2"]);
        assert_eq!(group.row(0), [false, false, false, true]);
        assert_eq!(group.row(1), [true, true, false, false]);
        assert_eq!(group.row(2), [false, false, true, false]);
        assert_eq!(group.question(2), "Exactly 2 types?");
    }

    #[test]
    fn test_duplicate_values_share_a_row() {
        let catalog =
            Catalog::from_items([Item::new("a").with_attributes("moves", ["tackle", "tackle"])]);
        let spec = GroupSpec::values("moves", "moves", "{}?");
        let group = AttributeGroup::build(&spec, &catalog);

        assert_eq!(group.row_count(), 1);
        assert!(group.has(0, 0));
    }

    #[test]
    fn test_count_true_respects_viable() {
        let spec = GroupSpec::values("types", "types", "{}?");
        let group = AttributeGroup::build(&spec, &catalog());

        assert_eq!(group.count_true(0, &[true, true, true, true]), 2);
        assert_eq!(group.count_true(0, &[false, true, true, true]), 1);
    }
}
