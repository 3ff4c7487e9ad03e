use crate::{to_id, PokemonType, StatsTable, ID};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
    N,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::M => "M",
            Gender::F => "F",
            Gender::N => "N",
        }
    }

    pub fn parse(s: &str) -> Option<Gender> {
        match s {
            "M" => Some(Gender::M),
            "F" => Some(Gender::F),
            "N" => Some(Gender::N),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ability slots: the primary slot, an optional second slot, the hidden
/// ability and an optional special (event-only) ability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abilities {
    pub primary: String,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub hidden: Option<String>,
    #[serde(default)]
    pub special: Option<String>,
}

/// One species record as it appears in a generation's data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub name: String,
    pub num: i16,
    pub types: Vec<PokemonType>,
    pub base_stats: StatsTable,
    #[serde(default)]
    pub weight: f32,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub abilities: Option<Abilities>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub prevo: Option<ID>,
    #[serde(default)]
    pub evos: Vec<ID>,
    // None when the record is its own base species
    #[serde(default)]
    pub base_species: Option<String>,
    #[serde(default)]
    pub base_forme: Option<String>,
    #[serde(default)]
    pub forme: Option<String>,
    #[serde(default)]
    pub other_formes: Vec<ID>,
    #[serde(default)]
    pub cosmetic_forms: Vec<ID>,
    #[serde(default)]
    pub is_mega: bool,
    #[serde(default)]
    pub is_primal: bool,
}

impl SpeciesData {
    pub fn id(&self) -> ID {
        to_id(&self.name)
    }

    /// The display name of the species this record is a forme of, or its own name.
    pub fn base_species_name(&self) -> &str {
        self.base_species.as_deref().unwrap_or(&self.name)
    }

    pub fn is_forme(&self) -> bool {
        self.base_species.is_some()
    }

    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types.contains(&pokemon_type)
    }

    pub fn is_cosmetic_form(&self, id: &ID) -> bool {
        self.cosmetic_forms.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_minimal_record() {
        let source = r#"#![enable(implicit_some)]
(
    name: "Pikachu",
    num: 25,
    types: [Electric],
    base_stats: (hp: 35, atk: 55, def: 40, spa: 50, spd: 50, spe: 90),
    weight: 6.0,
    cosmetic_forms: ["pikachucosplay"],
)"#;
        let data: SpeciesData = ron::from_str(source).expect("record should parse");
        assert_eq!(data.name, "Pikachu");
        assert_eq!(data.types, vec![PokemonType::Electric]);
        assert_eq!(data.base_stats.spe, 90);
        assert!(data.is_cosmetic_form(&ID::from("pikachucosplay")));
        assert!(!data.is_forme());
        assert_eq!(data.id().as_str(), "pikachu");
        assert_eq!(data.base_species_name(), "Pikachu");
        assert!(!data.is_mega);
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("F"), Some(Gender::F));
        assert_eq!(Gender::parse("f"), None);
    }
}
