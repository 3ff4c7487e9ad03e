use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// The six permanent stats, in the canonical order used by every format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum StatName {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl StatName {
    /// Label used in the text format (`"HP"`, `"SpA"`, ...).
    pub fn display(self) -> &'static str {
        match self {
            StatName::Hp => "HP",
            StatName::Atk => "Atk",
            StatName::Def => "Def",
            StatName::Spa => "SpA",
            StatName::Spd => "SpD",
            StatName::Spe => "Spe",
        }
    }

    /// Parse a stat label, accepting the common spellings found in pasted teams.
    pub fn parse(label: &str) -> Option<StatName> {
        let normalized: String = label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "hp" | "hitpoints" => Some(StatName::Hp),
            "atk" | "attack" => Some(StatName::Atk),
            "def" | "defense" => Some(StatName::Def),
            "spa" | "spatk" | "spattack" | "specialattack" | "spc" | "special" => {
                Some(StatName::Spa)
            }
            "spd" | "spdef" | "spdefense" | "specialdefense" => Some(StatName::Spd),
            "spe" | "speed" => Some(StatName::Spe),
            _ => None,
        }
    }

    pub fn all() -> StatNameIter {
        StatName::iter()
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// A full table of six stat values (base stats, EVs or IVs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StatsTable {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub spa: u8,
    pub spd: u8,
    pub spe: u8,
}

impl StatsTable {
    /// A table with every stat set to `value`.
    pub const fn filled(value: u8) -> StatsTable {
        StatsTable {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    pub fn get(&self, stat: StatName) -> u8 {
        match stat {
            StatName::Hp => self.hp,
            StatName::Atk => self.atk,
            StatName::Def => self.def,
            StatName::Spa => self.spa,
            StatName::Spd => self.spd,
            StatName::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: StatName, value: u8) {
        match stat {
            StatName::Hp => self.hp = value,
            StatName::Atk => self.atk = value,
            StatName::Def => self.def = value,
            StatName::Spa => self.spa = value,
            StatName::Spd => self.spd = value,
            StatName::Spe => self.spe = value,
        }
    }

    /// Iterate `(stat, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StatName, u8)> + '_ {
        StatName::all().map(move |stat| (stat, self.get(stat)))
    }
}
