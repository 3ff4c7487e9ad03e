//! Pokemon Teams
//!
//! Species resolution across generations, and lossless conversion of teams
//! between the text, packed and structured (JSON) formats used by Pokemon
//! Showdown, including multi-team documents with per-team headers.

// --- MODULE DECLARATIONS ---
pub mod aliases;
pub mod cache;
pub mod data;
pub mod errors;
pub mod format;
pub mod sets;
pub mod species;
pub mod team;
pub mod teams;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    to_id, Abilities, Gender, Generation, InvalidGeneration, PokemonType, SpeciesData, StatName,
    StatsTable, ID,
};

// --- From this crate's modules (`src/`) ---

// Species lookup.
pub use species::{Dex, Species};

// Team codecs.
pub use format::Format;
pub use sets::{PokemonSet, Resolver};
pub use team::Team;
pub use teams::Teams;

// Crate-specific error and result types.
pub use errors::{DataError, DataResult, ParseError, ParseResult};
