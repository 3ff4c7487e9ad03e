//! A single team and its text, packed and structured forms.

use crate::errors::{ParseError, ParseResult};
use crate::format::Format;
use crate::sets::{PokemonSet, Resolver, ENTRY_SEPARATOR, FIELD_SEPARATOR};
use crate::species::Dex;
use crate::teams::{split_packed_header, with_header};
use schema::Generation;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// An ordered roster of sets plus where it is stored and what it is for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Team {
    pub sets: Vec<PokemonSet>,
    pub name: String,
    pub folder: String,
    pub format: Format,
}

// Structured form: `{"team": [...], "gen": 6, "tier": "OU", "folder": "", "name": ""}`
#[derive(Serialize)]
struct StructuredRef<'a> {
    team: &'a [PokemonSet],
    #[serde(skip_serializing_if = "Option::is_none")]
    gen: Option<Generation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tier: Option<&'a str>,
    #[serde(skip_serializing_if = "str::is_empty")]
    folder: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    name: &'a str,
}

#[derive(Deserialize)]
struct Structured {
    team: Vec<PokemonSet>,
    #[serde(default)]
    gen: Option<Generation>,
    #[serde(default)]
    tier: Option<String>,
    #[serde(default)]
    folder: String,
    #[serde(default)]
    name: String,
}

impl Team {
    /// A team declared with a format tag such as `"uu"` or `"gen4ou"`.
    pub fn new(sets: Vec<PokemonSet>, tag: &str) -> Team {
        Team {
            sets,
            format: Format::parse(tag),
            ..Team::default()
        }
    }

    pub fn from_sets(sets: Vec<PokemonSet>) -> Team {
        Team {
            sets,
            ..Team::default()
        }
    }

    /// The declared generation, or the latest supported one.
    pub fn generation(&self) -> Generation {
        self.format.generation.unwrap_or(Generation::CURRENT)
    }

    pub fn tier(&self) -> Option<&str> {
        self.format.tier.as_deref()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    // --- Text ---

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn from_text(text: &str) -> Option<Team> {
        log_failure("text", Self::try_from_text(text, None))
    }

    pub fn try_from_text(text: &str, dex: Option<&Dex>) -> ParseResult<Team> {
        let resolver = Resolver::new(dex, Generation::CURRENT);
        Ok(Team::from_sets(parse_text_sets(text, resolver)?))
    }

    // --- Packed ---

    /// Name, folder or format declared: these survive a packed round trip
    /// only through a `tag]folder/name|` header.
    pub fn has_metadata(&self) -> bool {
        !self.name.is_empty() || !self.folder.is_empty() || self.format != Format::default()
    }

    /// The packed sets, prefixed with a `tag]folder/name|` header when the
    /// team declares any metadata.
    pub fn pack(&self) -> String {
        if self.has_metadata() {
            format!("{}{FIELD_SEPARATOR}{}", self.packed_header(), self.pack_sets())
        } else {
            self.pack_sets()
        }
    }

    /// The packed sets alone, joined by `]`.
    pub fn pack_sets(&self) -> String {
        self.sets
            .iter()
            .map(PokemonSet::pack)
            .collect::<Vec<_>>()
            .join(&ENTRY_SEPARATOR.to_string())
    }

    /// `tag]folder/name`, with empty segments for anything undeclared.
    pub(crate) fn packed_header(&self) -> String {
        let tag = self.format.tag().unwrap_or_default();
        if self.folder.is_empty() {
            format!("{tag}]{}", self.name)
        } else {
            format!("{tag}]{}/{}", self.folder, self.name)
        }
    }

    /// Accepts what [`Team::pack`] emits, and the JSON from [`Team::to_json`].
    pub fn unpack(packed: &str) -> Option<Team> {
        log_failure("packed", Self::try_unpack(packed, None))
    }

    pub fn try_unpack(packed: &str, dex: Option<&Dex>) -> ParseResult<Team> {
        let packed = packed.trim_end_matches(['\r', '\n']);
        if packed.trim_start().starts_with('{') {
            return Self::try_from_json(packed, dex);
        }

        let (header, body) = split_packed_header(packed);
        let mut team = match header {
            Some((tag, path)) => with_header(tag, path),
            None => Team::default(),
        };
        let resolver = Resolver::new(dex, team.generation());
        team.sets = unpack_sets(body, resolver)?;
        Ok(team)
    }

    // --- Structured ---

    pub fn to_structured(&self) -> Value {
        let structured = StructuredRef {
            team: &self.sets,
            gen: self.format.generation,
            tier: self.format.tier.as_deref(),
            folder: &self.folder,
            name: &self.name,
        };
        serde_json::to_value(structured).unwrap_or_else(|err| {
            log::error!("failed to serialize team {:?}: {err}", self.name);
            Value::Null
        })
    }

    pub fn from_structured(value: &Value) -> Option<Team> {
        log_failure("structured", Self::try_from_structured(value, None))
    }

    /// Accepts the tagged object form, or a bare array of sets.
    pub fn try_from_structured(value: &Value, dex: Option<&Dex>) -> ParseResult<Team> {
        let structured = if value.is_array() {
            Structured {
                team: Vec::<PokemonSet>::deserialize(value)?,
                gen: None,
                tier: None,
                folder: String::new(),
                name: String::new(),
            }
        } else {
            Structured::deserialize(value)?
        };

        let resolver = Resolver::new(dex, structured.gen.unwrap_or(Generation::CURRENT));
        let sets = structured
            .team
            .into_iter()
            .map(|mut set| {
                set.species = resolver.species_name(&set.species);
                set.normalized()
            })
            .collect();

        Ok(Team {
            sets,
            name: structured.name,
            folder: structured.folder,
            format: Format::new(structured.gen, structured.tier),
        })
    }

    pub fn to_json(&self) -> String {
        self.to_structured().to_string()
    }

    pub fn from_json(json: &str) -> Option<Team> {
        log_failure("json", Self::try_from_json(json, None))
    }

    pub fn try_from_json(json: &str, dex: Option<&Dex>) -> ParseResult<Team> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from_structured(&value, dex)
    }

    // --- Any ---

    /// Parse JSON, a packed line or text, whichever `data` looks like.
    pub fn import(data: &str) -> Option<Team> {
        log_failure("import", Self::try_import(data, None))
    }

    pub fn try_import(data: &str, dex: Option<&Dex>) -> ParseResult<Team> {
        let trimmed = data.trim();
        if trimmed.is_empty() {
            Err(ParseError::Empty)
        } else if trimmed.starts_with('{') || trimmed.starts_with('[') {
            Self::try_from_json(trimmed, dex)
        } else if !trimmed.contains('\n') && trimmed.contains('|') {
            Self::try_unpack(trimmed, dex)
        } else {
            Self::try_from_text(trimmed, dex)
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, set) in self.sets.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", set)?;
        }
        Ok(())
    }
}

fn log_failure(kind: &str, result: ParseResult<Team>) -> Option<Team> {
    result
        .map_err(|err| log::debug!("unparseable {kind} team: {err}"))
        .ok()
}

/// Sets in a text body are separated by blank lines.
pub(crate) fn parse_text_sets(text: &str, resolver: Resolver<'_>) -> ParseResult<Vec<PokemonSet>> {
    let mut sets = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in text.lines().chain(std::iter::once("")) {
        if line.trim().is_empty() {
            if !block.is_empty() {
                sets.push(PokemonSet::try_from_text(&block.join("\n"), resolver)?);
                block.clear();
            }
        } else {
            block.push(line);
        }
    }

    if sets.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(sets)
}

/// Entries are separated by `]`; a trailing line terminator is ignored.
fn unpack_sets(packed: &str, resolver: Resolver<'_>) -> ParseResult<Vec<PokemonSet>> {
    let packed = packed.trim_end_matches(['\r', '\n']);
    if packed.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    packed
        .split(ENTRY_SEPARATOR)
        .map(|entry| PokemonSet::try_unpack(entry, resolver))
        .collect()
}
