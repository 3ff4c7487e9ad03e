// Pokemon Teams Schema - Shared type definitions
// This crate contains the plain data types that both the species tables and
// the team codecs are built from, kept serde-friendly so that the raw
// per-generation data files deserialize straight into them.

// Re-export the main types
pub use generation::*;
pub use id::*;
pub use pokemon_types::*;
pub use species_data::*;
pub use stats::*;

pub mod generation;
pub mod id;
pub mod pokemon_types;
pub mod species_data;
pub mod stats;
