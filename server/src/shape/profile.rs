use serde::Serialize;

use crate::pokeapi::RawPokemon;

/// Body of `GET /pokemon/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub weight: u32,
    pub height: u32,
    pub abilities: Vec<String>,
    /// Default front sprite, `null` when upstream has none.
    pub sprite: Option<String>,
    pub types: Vec<String>,
}

impl From<RawPokemon> for Profile {
    fn from(value: RawPokemon) -> Self {
        Self {
            id: value.id,
            name: value.name,
            weight: value.weight,
            height: value.height,
            abilities: value
                .abilities
                .into_iter()
                .map(|slot| slot.ability.name)
                .collect(),
            sprite: value.sprites.front_default,
            types: value.types.into_iter().map(|slot| slot.kind.name).collect(),
        }
    }
}
