//! The lookup payload and its PokeAPI wire representation.

use serde::Deserialize;

/// Format used for [`Pokemon::fetched_at`].
const FETCHED_AT_FORMAT: &str = "%H:%M:%S";

/// A resolved pokemon, flattened from the PokeAPI response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pokemon {
    /// National dex number.
    pub id: u32,
    pub name: String,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    /// Type names in slot order (e.g. "electric").
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Front sprite URL, when the API has one.
    pub sprite: Option<String>,
    /// Local wall-clock time the response arrived.
    pub fetched_at: String,
}

impl Pokemon {
    pub(crate) fn from_api(api: ApiPokemon, fetched_at: chrono::DateTime<chrono::Local>) -> Self {
        let stat = |name: &str| {
            api.stats
                .iter()
                .find(|entry| entry.stat.name == name)
                .map(|entry| entry.base_stat)
                .unwrap_or(0)
        };
        let hp = stat("hp");
        let attack = stat("attack");
        let defense = stat("defense");

        let mut types = api.types;
        types.sort_by_key(|entry| entry.slot);

        let mut abilities = api.abilities;
        abilities.sort_by_key(|entry| entry.slot);

        Self {
            id: api.id,
            name: api.name,
            hp,
            attack,
            defense,
            types: types.into_iter().map(|entry| entry.kind.name).collect(),
            abilities: abilities
                .into_iter()
                .map(|entry| entry.ability.name)
                .collect(),
            height: api.height,
            weight: api.weight,
            sprite: api.sprites.and_then(|sprites| sprites.front_default),
            fetched_at: fetched_at.format(FETCHED_AT_FORMAT).to_string(),
        }
    }

    /// Height in metres.
    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }
}

/// `GET /api/v2/pokemon/{name}` response, reduced to the fields we show.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiPokemon {
    id: u32,
    name: String,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    stats: Vec<ApiStat>,
    #[serde(default)]
    types: Vec<ApiType>,
    #[serde(default)]
    abilities: Vec<ApiAbility>,
    #[serde(default)]
    sprites: Option<ApiSprites>,
}

#[derive(Debug, Deserialize)]
struct ApiStat {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct ApiType {
    slot: u8,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct ApiAbility {
    #[serde(default)]
    slot: u8,
    ability: NamedResource,
}

#[derive(Debug, Deserialize)]
struct ApiSprites {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}
