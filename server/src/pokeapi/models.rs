//! Raw PokéAPI response shapes.
//!
//! Only the fields the facade reshapes are modelled; everything else in the
//! upstream payload is ignored.

use serde::Deserialize;

/// Most PokéAPI references are `{ "name": ..., "url": ... }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// `GET /api/v2/pokemon/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    pub weight: u32,
    pub height: u32,
    #[serde(default)]
    pub abilities: Vec<RawAbilitySlot>,
    #[serde(default)]
    pub sprites: RawSprites,
    #[serde(default)]
    pub types: Vec<RawTypeSlot>,
    #[serde(default)]
    pub moves: Vec<RawMoveRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMoveRecord {
    #[serde(rename = "move")]
    pub move_: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<RawMoveLearnDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMoveLearnDetail {
    pub level_learned_at: u8,
    pub move_learn_method: NamedResource,
    pub version_group: NamedResource,
}

/// One entry of `GET /api/v2/pokemon/{name}/encounters`
#[derive(Debug, Clone, Deserialize)]
pub struct RawEncounterRecord {
    pub location_area: NamedResource,
    #[serde(default)]
    pub version_details: Vec<RawVersionEncounters>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawVersionEncounters {
    pub version: NamedResource,
    #[serde(default)]
    pub encounter_details: Vec<RawEncounterDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEncounterDetail {
    pub min_level: u8,
    pub max_level: u8,
    pub method: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pokemon_ignores_unmodelled_fields() {
        let raw: RawPokemon = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "bulbasaur",
                "weight": 69,
                "height": 7,
                "base_experience": 64,
                "abilities": [{ "ability": { "name": "overgrow", "url": "x" }, "slot": 1 }],
                "sprites": { "front_default": "https://img/1.png", "back_default": null },
                "types": [{ "slot": 1, "type": { "name": "grass", "url": "x" } }],
                "moves": [{
                    "move": { "name": "razor-wind" },
                    "version_group_details": [{
                        "level_learned_at": 0,
                        "move_learn_method": { "name": "egg" },
                        "version_group": { "name": "gold-silver" }
                    }]
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(raw.abilities[0].ability.name, "overgrow");
        assert_eq!(raw.types[0].kind.name, "grass");
        assert_eq!(raw.sprites.front_default.as_deref(), Some("https://img/1.png"));
        assert_eq!(raw.moves[0].version_group_details[0].version_group.name, "gold-silver");
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let raw: RawPokemon =
            serde_json::from_str(r#"{ "id": 7, "name": "squirtle", "weight": 90, "height": 5 }"#)
                .unwrap();
        assert!(raw.abilities.is_empty());
        assert!(raw.moves.is_empty());
        assert!(raw.sprites.front_default.is_none());

        let raw: Vec<RawEncounterRecord> =
            serde_json::from_str(r#"[{ "location_area": { "name": "route-1-area" } }]"#).unwrap();
        assert!(raw[0].version_details.is_empty());
    }
}
