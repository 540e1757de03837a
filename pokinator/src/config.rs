//! Runtime configuration read from an optional TOML file.

use anyhow::{Context, Result};
use pokedex::CatalogSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_LIMIT: usize = 10000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokinatorConfig {
    /// PokeAPI root, without a trailing slash.
    pub api_base: String,

    /// How many pokemon to list when building the cache.
    pub limit: usize,

    /// Question groups; the pokemon schema when absent.
    pub schema: Option<CatalogSchema>,
}

impl Default for PokinatorConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            limit: DEFAULT_LIMIT,
            schema: None,
        }
    }
}

impl PokinatorConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: PokinatorConfig = toml::from_str(input).context("malformed config")?;
        if let Some(schema) = &config.schema {
            schema.validate()?;
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in config {}", path.display()))
    }

    pub fn schema(&self) -> CatalogSchema {
        self.schema.clone().unwrap_or_else(CatalogSchema::pokemon)
    }
}
