//! A single team entry and its three representations.

use crate::errors::{ParseError, ParseResult};
use crate::species::Dex;
use schema::{Gender, Generation, StatName, StatsTable};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_LEVEL: u8 = 100;
pub const DEFAULT_HAPPINESS: u8 = 255;
pub const DEFAULT_EVS: StatsTable = StatsTable::filled(0);
pub const DEFAULT_IVS: StatsTable = StatsTable::filled(31);

/// Separator between the fields of one packed entry.
pub const FIELD_SEPARATOR: char = '|';
/// Separator between packed entries.
pub const ENTRY_SEPARATOR: char = ']';

const PACKED_FIELDS: usize = 12;

fn default_evs() -> StatsTable {
    DEFAULT_EVS
}

fn default_ivs() -> StatsTable {
    DEFAULT_IVS
}

fn default_level() -> u8 {
    DEFAULT_LEVEL
}

fn default_happiness() -> u8 {
    DEFAULT_HAPPINESS
}

fn is_default_level(level: &u8) -> bool {
    *level == DEFAULT_LEVEL
}

fn is_default_happiness(happiness: &u8) -> bool {
    *happiness == DEFAULT_HAPPINESS
}

/// One Pokemon on a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonSet {
    /// Nickname; `None` when the Pokemon goes by its species name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub species: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default = "default_evs")]
    pub evs: StatsTable,
    #[serde(default = "default_ivs")]
    pub ivs: StatsTable,
    #[serde(default = "default_level", skip_serializing_if = "is_default_level")]
    pub level: u8,
    #[serde(default)]
    pub shiny: bool,
    #[serde(default = "default_happiness", skip_serializing_if = "is_default_happiness")]
    pub happiness: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pokeball: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp_type: Option<String>,
}

/// Optional species-name normalization applied while parsing.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    dex: Option<&'a Dex>,
    gen: Generation,
}

impl<'a> Resolver<'a> {
    pub fn new(dex: Option<&'a Dex>, gen: Generation) -> Self {
        Self { dex, gen }
    }

    /// Keep species names exactly as written.
    pub fn verbatim() -> Self {
        Self::new(None, Generation::CURRENT)
    }

    /// The canonical display name for `raw`, or `raw` itself when there is no
    /// dex or the dex does not know the name.
    pub fn species_name(&self, raw: &str) -> String {
        self.dex
            .and_then(|dex| dex.species_name(raw, self.gen))
            .unwrap_or_else(|| raw.to_string())
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn parse_u8(field: &'static str, value: &str) -> ParseResult<u8> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::invalid_number(field, value))
}

impl PokemonSet {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            name: None,
            species: species.into(),
            item: None,
            ability: None,
            moves: Vec::new(),
            nature: None,
            gender: None,
            evs: DEFAULT_EVS,
            ivs: DEFAULT_IVS,
            level: DEFAULT_LEVEL,
            shiny: false,
            happiness: DEFAULT_HAPPINESS,
            pokeball: None,
            hp_type: None,
        }
    }

    /// The name shown in battle: the nickname if any, else the species.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.species)
    }

    /// Collapse the spellings that mean "absent" so every format agrees:
    /// empty strings become `None` and a nickname equal to the species is dropped.
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.name,
            &mut self.item,
            &mut self.ability,
            &mut self.nature,
            &mut self.pokeball,
            &mut self.hp_type,
        ] {
            if field.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *field = None;
            }
        }
        if self.name.as_deref() == Some(self.species.as_str()) {
            self.name = None;
        }
        self.moves.retain(|m| !m.trim().is_empty());
        self
    }

    // --- Text format ---

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn from_text(block: &str) -> Option<PokemonSet> {
        Self::try_from_text(block, Resolver::verbatim())
            .map_err(|err| log::debug!("unparseable set: {err}"))
            .ok()
    }

    pub fn try_from_text(block: &str, resolver: Resolver<'_>) -> ParseResult<PokemonSet> {
        let mut lines = block.lines().map(str::trim).filter(|line| !line.is_empty());
        let first = lines.next().ok_or(ParseError::Empty)?;
        let mut set = parse_name_line(first, resolver)?;
        for line in lines {
            set.apply_text_line(line)?;
        }
        Ok(set.normalized())
    }

    fn apply_text_line(&mut self, line: &str) -> ParseResult<()> {
        if let Some(rest) = line.strip_prefix("Ability:") {
            self.ability = non_empty(rest);
        } else if let Some(rest) = line.strip_prefix("Level:") {
            self.level = parse_u8("level", rest)?;
        } else if let Some(rest) = line.strip_prefix("Shiny:") {
            self.shiny = rest.trim().eq_ignore_ascii_case("yes");
        } else if let Some(rest) = line.strip_prefix("Happiness:") {
            self.happiness = parse_u8("happiness", rest)?;
        } else if let Some(rest) = line.strip_prefix("Pokeball:") {
            self.pokeball = non_empty(rest);
        } else if let Some(rest) = line.strip_prefix("Hidden Power:") {
            self.hp_type = non_empty(rest);
        } else if let Some(rest) = line.strip_prefix("EVs:") {
            self.evs = parse_stats_line(rest, DEFAULT_EVS)?;
        } else if let Some(rest) = line.strip_prefix("IVs:") {
            self.ivs = parse_stats_line(rest, DEFAULT_IVS)?;
        } else if let Some(rest) = line.strip_prefix('-').or_else(|| line.strip_prefix('~')) {
            if let Some(move_name) = non_empty(rest) {
                self.moves.push(move_name);
            }
        } else if let Some(nature) = line.strip_suffix(" Nature") {
            self.nature = non_empty(nature);
        } else {
            log::debug!("ignoring unrecognized set line {line:?}");
        }
        Ok(())
    }

    // --- Packed format ---

    /// `NICKNAME|SPECIES|ITEM|ABILITY|MOVES|NATURE|EVS|GENDER|IVS|SHINY|LEVEL|HAPPINESS[,HPTYPE,POKEBALL]`
    pub fn pack(&self) -> String {
        let mut happiness = if self.happiness == DEFAULT_HAPPINESS {
            String::new()
        } else {
            self.happiness.to_string()
        };
        if self.hp_type.is_some() || self.pokeball.is_some() {
            happiness.push(',');
            happiness.push_str(self.hp_type.as_deref().unwrap_or_default());
            happiness.push(',');
            happiness.push_str(self.pokeball.as_deref().unwrap_or_default());
        }

        let fields = [
            self.display_name().to_string(),
            if self.name.is_some() {
                self.species.clone()
            } else {
                String::new()
            },
            self.item.clone().unwrap_or_default(),
            self.ability.clone().unwrap_or_default(),
            self.moves.join(","),
            self.nature.clone().unwrap_or_default(),
            pack_stats(&self.evs, &DEFAULT_EVS),
            self.gender.map(|g| g.to_string()).unwrap_or_default(),
            pack_stats(&self.ivs, &DEFAULT_IVS),
            if self.shiny { "S".to_string() } else { String::new() },
            if self.level == DEFAULT_LEVEL {
                String::new()
            } else {
                self.level.to_string()
            },
            happiness,
        ];
        fields.join("|")
    }

    pub fn unpack(entry: &str) -> Option<PokemonSet> {
        Self::try_unpack(entry, Resolver::verbatim())
            .map_err(|err| log::debug!("unparseable packed set: {err}"))
            .ok()
    }

    pub fn try_unpack(entry: &str, resolver: Resolver<'_>) -> ParseResult<PokemonSet> {
        let fields: Vec<&str> = entry.split(FIELD_SEPARATOR).collect();
        if fields.len() != PACKED_FIELDS {
            return Err(ParseError::FieldCount {
                expected: PACKED_FIELDS,
                found: fields.len(),
            });
        }

        let shown = fields[0].trim();
        if shown.is_empty() {
            return Err(ParseError::MissingSpecies(entry.to_string()));
        }
        let mut set = if fields[1].is_empty() {
            PokemonSet::new(resolver.species_name(shown))
        } else {
            let mut set = PokemonSet::new(resolver.species_name(fields[1]));
            set.name = Some(shown.to_string());
            set
        };

        set.item = non_empty(fields[2]);
        set.ability = non_empty(fields[3]);
        if !fields[4].is_empty() {
            set.moves = fields[4].split(',').map(str::to_string).collect();
        }
        set.nature = non_empty(fields[5]);
        set.evs = unpack_stats("evs", fields[6], DEFAULT_EVS)?;
        set.gender = match fields[7] {
            "" => None,
            other => Some(Gender::parse(other).ok_or_else(|| ParseError::invalid_field("gender", other))?),
        };
        set.ivs = unpack_stats("ivs", fields[8], DEFAULT_IVS)?;
        set.shiny = match fields[9] {
            "" => false,
            "S" => true,
            other => return Err(ParseError::invalid_field("shiny", other)),
        };
        if !fields[10].is_empty() {
            set.level = parse_u8("level", fields[10])?;
        }

        let mut misc = fields[11].split(',');
        match misc.next() {
            Some("") | None => {}
            Some(happiness) => set.happiness = parse_u8("happiness", happiness)?,
        }
        set.hp_type = misc.next().and_then(non_empty);
        set.pokeball = misc.next().and_then(non_empty);

        Ok(set.normalized())
    }
}

impl fmt::Display for PokemonSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", name, self.species)?,
            None => write!(f, "{}", self.species)?,
        }
        if let Some(gender) = self.gender {
            write!(f, " ({})", gender)?;
        }
        if let Some(item) = &self.item {
            write!(f, " @ {}", item)?;
        }
        writeln!(f)?;

        if let Some(ability) = &self.ability {
            writeln!(f, "Ability: {}", ability)?;
        }
        if self.level != DEFAULT_LEVEL {
            writeln!(f, "Level: {}", self.level)?;
        }
        if self.shiny {
            writeln!(f, "Shiny: Yes")?;
        }
        if self.happiness != DEFAULT_HAPPINESS {
            writeln!(f, "Happiness: {}", self.happiness)?;
        }
        if let Some(pokeball) = &self.pokeball {
            writeln!(f, "Pokeball: {}", pokeball)?;
        }
        if let Some(hp_type) = &self.hp_type {
            writeln!(f, "Hidden Power: {}", hp_type)?;
        }
        if let Some(evs) = stats_line(&self.evs, &DEFAULT_EVS) {
            writeln!(f, "EVs: {}", evs)?;
        }
        if let Some(nature) = &self.nature {
            writeln!(f, "{} Nature", nature)?;
        }
        if let Some(ivs) = stats_line(&self.ivs, &DEFAULT_IVS) {
            writeln!(f, "IVs: {}", ivs)?;
        }
        for move_name in &self.moves {
            writeln!(f, "- {}", move_name)?;
        }
        Ok(())
    }
}

/// Split `"Nickname (Species) (M) @ Item"` into a fresh set.
fn parse_name_line(line: &str, resolver: Resolver<'_>) -> ParseResult<PokemonSet> {
    let (mut rest, item) = match line.rsplit_once(" @ ") {
        Some((rest, item)) => (rest.trim(), non_empty(item)),
        None => (line, None),
    };

    let mut gender = None;
    for candidate in [Gender::M, Gender::F, Gender::N] {
        if let Some(stripped) = rest.strip_suffix(&format!(" ({})", candidate)) {
            gender = Some(candidate);
            rest = stripped.trim_end();
            break;
        }
    }

    let (name, species) = match rest.rfind(" (") {
        Some(open) if rest.ends_with(')') => {
            (non_empty(&rest[..open]), rest[open + 2..rest.len() - 1].trim())
        }
        _ => (None, rest),
    };
    if species.is_empty() {
        return Err(ParseError::MissingSpecies(line.to_string()));
    }

    let mut set = PokemonSet::new(resolver.species_name(species));
    set.name = name;
    set.gender = gender;
    set.item = item;
    Ok(set)
}

/// `"252 Atk / 4 SpD / 252 Spe"`, starting from `base` for unlisted stats.
fn parse_stats_line(line: &str, base: StatsTable) -> ParseResult<StatsTable> {
    let mut table = base;
    for part in line.split('/').map(str::trim).filter(|part| !part.is_empty()) {
        let (value, label) = part
            .split_once(' ')
            .ok_or_else(|| ParseError::invalid_field("stats", part))?;
        let stat = StatName::parse(label.trim())
            .ok_or_else(|| ParseError::UnknownStat(label.trim().to_string()))?;
        table.set(stat, parse_u8("stats", value)?);
    }
    Ok(table)
}

fn stats_line(table: &StatsTable, default: &StatsTable) -> Option<String> {
    let parts: Vec<String> = table
        .iter()
        .filter(|(stat, value)| *value != default.get(*stat))
        .map(|(stat, value)| format!("{} {}", value, stat))
        .collect();
    (!parts.is_empty()).then(|| parts.join(" / "))
}

fn pack_stats(table: &StatsTable, default: &StatsTable) -> String {
    if table == default {
        return String::new();
    }
    table
        .iter()
        .map(|(stat, value)| {
            if value == default.get(stat) {
                String::new()
            } else {
                value.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn unpack_stats(field: &'static str, packed: &str, default: StatsTable) -> ParseResult<StatsTable> {
    if packed.is_empty() {
        return Ok(default);
    }
    let values: Vec<&str> = packed.split(',').collect();
    if values.len() != StatName::all().count() {
        return Err(ParseError::invalid_field(field, packed));
    }

    let mut table = default;
    for (stat, value) in StatName::all().zip(values) {
        if !value.is_empty() {
            table.set(stat, parse_u8(field, value)?);
        }
    }
    Ok(table)
}
