//! Serde projections of the `PokeAPI` JSON documents the controller reads.
//!
//! Only the fields the controller uses are modelled; everything else in the
//! responses is ignored by `serde`.

use serde::Deserialize;

/// `{ name, url }` pair used by every `PokeAPI` listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    /// Resource name (e.g. `"bulbasaur"` or `"fire"`).
    pub name: String,
    /// Absolute URL of the full resource.
    #[serde(default)]
    pub url: String,
}

/// Body of `GET /pokemon?offset=..&limit=..` and `GET /type/`.
#[derive(Debug, Deserialize)]
pub struct ResourceList {
    /// Listed resources in provider order.
    pub results: Vec<NamedResource>,
}

/// Body of `GET /pokemon/{idOrName}`.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatureRecord {
    /// National dex id.
    pub id: u32,
    /// Lowercase creature name.
    pub name: String,
    /// Type slots in slot order.
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

impl CreatureRecord {
    /// Type names in slot order.
    #[must_use]
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|t| t.kind.name.clone()).collect()
    }
}

/// One `types[]` entry of a creature record.
#[derive(Clone, Debug, Deserialize)]
pub struct TypeSlot {
    /// The referenced type.
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Body of `GET /pokemon-species/{id}`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SpeciesRecord {
    /// Flavour text entries across games and languages.
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

/// One flavour text entry.
#[derive(Clone, Debug, Deserialize)]
pub struct FlavorTextEntry {
    /// Raw text, may contain newlines and form feeds.
    pub flavor_text: String,
    /// Language of the entry.
    pub language: NamedResource,
}

/// Body of `GET /type/{name}`.
#[derive(Debug, Deserialize)]
pub struct TypeRecord {
    /// Member creatures.
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

/// One `pokemon[]` entry of a type record.
#[derive(Debug, Deserialize)]
pub struct TypeMember {
    /// The member creature.
    pub pokemon: NamedResource,
}
