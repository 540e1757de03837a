//! PokeAPI documents - the subset of `/pokemon` responses the game reads.

use serde::{Deserialize, Serialize};

use super::Item;

/// Group name for a pokemon's types.
pub const TYPES_GROUP: &str = "types";
/// Group name for the moves a pokemon can learn.
pub const MOVES_GROUP: &str = "moves";
/// Group name for the games a pokemon appears in.
pub const GAMES_GROUP: &str = "games";

/// A named PokeAPI resource reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Response of `GET /pokemon?limit=N`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonList {
    #[serde(default)]
    pub count: usize,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub learned: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameIndex {
    pub version: NamedResource,
}

/// Response of `GET /pokemon/{id}`. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub species: NamedResource,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub game_indices: Vec<GameIndex>,
}

impl PokemonRecord {
    /// Convert the document into a catalog item named after its species.
    pub fn into_item(self) -> Item {
        Item::new(self.species.name)
            .with_attributes(TYPES_GROUP, self.types.into_iter().map(|t| t.kind.name))
            .with_attributes(MOVES_GROUP, self.moves.into_iter().map(|m| m.learned.name))
            .with_attributes(
                GAMES_GROUP,
                self.game_indices.into_iter().map(|g| g.version.name),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "species": { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/" },
        "types": [
            { "slot": 1, "type": { "name": "grass", "url": "" } },
            { "slot": 2, "type": { "name": "poison", "url": "" } }
        ],
        "moves": [
            { "move": { "name": "razor-wind", "url": "" }, "version_group_details": [] },
            { "move": { "name": "vine-whip", "url": "" }, "version_group_details": [] }
        ],
        "game_indices": [
            { "game_index": 153, "version": { "name": "red", "url": "" } }
        ],
        "weight": 69
    }"#;

    #[test]
    fn test_record_into_item() {
        let record: PokemonRecord = serde_json::from_str(BULBASAUR).unwrap();
        let item = record.into_item();

        assert_eq!(item.name, "bulbasaur");
        assert_eq!(item.values(TYPES_GROUP), ["grass", "poison"]);
        assert_eq!(item.values(MOVES_GROUP), ["razor-wind", "vine-whip"]);
        assert_eq!(item.values(GAMES_GROUP), ["red"]);
    }

    #[test]
    fn test_record_with_missing_lists() {
        let record: PokemonRecord =
            serde_json::from_str(r#"{ "species": { "name": "missingno" } }"#).unwrap();
        let item = record.into_item();

        assert_eq!(item.name, "missingno");
        assert_eq!(item.count(TYPES_GROUP), 0);
        assert_eq!(item.count(GAMES_GROUP), 0);
    }

    #[test]
    fn test_list_response() {
        let list: PokemonList = serde_json::from_str(
            r#"{ "count": 2, "next": null, "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ] }"#,
        )
        .unwrap();

        assert_eq!(list.results.len(), 2);
        assert!(list.results[1].url.ends_with("/2/"));
    }
}
