//! Catalog schema - which attribute groups become questions, in what order,
//! and how each question is phrased.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::CatalogError;
use crate::items::{GAMES_GROUP, MOVES_GROUP, TYPES_GROUP};

/// Placeholder replaced by the row label when a prompt is rendered.
pub const PROMPT_PLACEHOLDER: &str = "{}";

/// How the rows of a group are derived from item data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GroupKind {
    /// One row per distinct value of `source`, in first-seen order.
    Values { source: String },

    /// Synthetic rows `0..=max`: row `n` holds items with exactly `n`
    /// entries in `source`.
    Count { source: String, max: usize },
}

impl GroupKind {
    /// The item attribute group this kind reads.
    pub fn source(&self) -> &str {
        match self {
            GroupKind::Values { source } => source,
            GroupKind::Count { source, .. } => source,
        }
    }
}

/// One question dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub name: String,
    /// Question template, `{}` is replaced by the row label.
    pub prompt: String,
    pub kind: GroupKind,
}

impl GroupSpec {
    /// Create a group asking about the distinct values of `source`.
    pub fn values(name: impl Into<String>, source: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            kind: GroupKind::Values {
                source: source.into(),
            },
        }
    }

    /// Create a count-bucket group over the entries of `source`.
    pub fn count(
        name: impl Into<String>,
        source: impl Into<String>,
        max: usize,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            kind: GroupKind::Count {
                source: source.into(),
                max,
            },
        }
    }

    /// Render the question for a row label.
    pub fn render(&self, label: &str) -> String {
        self.prompt.replacen(PROMPT_PLACEHOLDER, label, 1)
    }
}

/// Groups in fixed priority order. Ties in question selection go to the
/// earlier group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSchema {
    pub groups: Vec<GroupSpec>,
}

impl Default for CatalogSchema {
    fn default() -> Self {
        Self::pokemon()
    }
}

impl CatalogSchema {
    /// Create a schema from groups in priority order.
    pub fn new(groups: Vec<GroupSpec>) -> Self {
        Self { groups }
    }

    /// The schema used for PokeAPI catalogs.
    pub fn pokemon() -> Self {
        Self::new(vec![
            GroupSpec::count(
                "num_types",
                TYPES_GROUP,
                2,
                "Does your pokemon have exactly {} types?",
            ),
            GroupSpec::values(TYPES_GROUP, TYPES_GROUP, "Does your pokemon have the type: {}"),
            GroupSpec::values(MOVES_GROUP, MOVES_GROUP, "Can your pokemon learn the move: {}"),
            GroupSpec::values(GAMES_GROUP, GAMES_GROUP, "Is your pokemon in: {}"),
        ])
    }

    /// Parse a schema from TOML and validate it.
    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        let schema: CatalogSchema = toml::from_str(input)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Serialize the schema as TOML.
    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        toml::to_string(self).map_err(|e| CatalogError::InvalidSchema(e.to_string()))
    }

    /// Check that the schema can drive a game.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.groups.is_empty() {
            return Err(CatalogError::InvalidSchema(
                "schema must declare at least one group".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if !seen.insert(group.name.as_str()) {
                return Err(CatalogError::InvalidSchema(format!(
                    "duplicate group name `{}`",
                    group.name
                )));
            }
            if !group.prompt.contains(PROMPT_PLACEHOLDER) {
                return Err(CatalogError::InvalidSchema(format!(
                    "prompt for group `{}` has no `{}` placeholder",
                    group.name, PROMPT_PLACEHOLDER
                )));
            }
        }

        Ok(())
    }
}
