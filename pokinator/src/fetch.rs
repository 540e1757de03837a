//! Catalog acquisition: the JSON cache, or PokeAPI when there is none.

use anyhow::{bail, Context, Result};
use pokedex::{Catalog, PokemonList, PokemonRecord};
use std::path::Path;
use tracing::{debug, info};

use crate::config::PokinatorConfig;

/// Load the cached catalog, fetching and caching it first if needed.
pub fn acquire_catalog(cache: &Path, config: &PokinatorConfig, refresh: bool) -> Result<Catalog> {
    if cache.as_os_str().is_empty() {
        bail!("a cache path is required so PokeAPI is only downloaded once");
    }

    if cache.exists() && !refresh {
        return Catalog::load_json(cache)
            .with_context(|| format!("failed to load cache {}", cache.display()));
    }

    let catalog = fetch_catalog(config)?;
    catalog
        .save_json(cache)
        .with_context(|| format!("failed to write cache {}", cache.display()))?;
    Ok(catalog)
}

/// Download every listed pokemon.
///
/// Requests are sequential on purpose; it keeps the client a polite PokeAPI user.
pub fn fetch_catalog(config: &PokinatorConfig) -> Result<Catalog> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("pokinator/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")?;

    let list_url = format!("{}/pokemon", config.api_base.trim_end_matches('/'));
    info!(url = %list_url, limit = config.limit, "fetching pokemon list");
    let list: PokemonList = client
        .get(&list_url)
        .query(&[("limit", config.limit)])
        .send()
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("request to {} failed", list_url))?
        .json()
        .context("malformed pokemon list")?;

    let mut records = Vec::with_capacity(list.results.len());
    for entry in &list.results {
        debug!(url = %entry.url, "fetching pokemon");
        let record: PokemonRecord = client
            .get(&entry.url)
            .send()
            .and_then(|response| response.error_for_status())
            .with_context(|| format!("request to {} failed", entry.url))?
            .json()
            .with_context(|| format!("malformed pokemon document for {}", entry.name))?;
        records.push(record);
    }

    info!(pokemon = records.len(), "fetched catalog");
    Ok(Catalog::from_pokeapi(records))
}
