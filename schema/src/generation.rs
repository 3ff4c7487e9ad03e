use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, FromRepr, IntoStaticStr};

/// A main-series game generation with its own species data table.
///
/// Serialized as its number (`1`..=`7`) so structured teams read naturally.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    FromRepr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Generation {
    Rby = 1,
    Gsc = 2,
    Adv = 3,
    Dpp = 4,
    Bw = 5,
    Xy = 6,
    Sm = 7,
}

impl Generation {
    /// The latest generation with data; used when a team declares none.
    pub const CURRENT: Generation = Generation::Sm;

    /// The generation implied by a bare tier tag such as `ou`.
    pub const BASELINE: Generation = Generation::Xy;

    pub fn num(self) -> u8 {
        self as u8
    }

    /// Short lowercase name used for data file names (`"rby"`, `"xy"`, ...).
    pub fn slug(self) -> &'static str {
        self.into()
    }

    pub fn from_num(num: u8) -> Option<Generation> {
        Generation::from_repr(num)
    }
}

impl Default for Generation {
    fn default() -> Self {
        Generation::CURRENT
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.num())
    }
}

/// Returned when a number does not name a supported generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidGeneration(pub u8);

impl fmt::Display for InvalidGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported generation: {}", self.0)
    }
}

impl std::error::Error for InvalidGeneration {}

impl TryFrom<u8> for Generation {
    type Error = InvalidGeneration;

    fn try_from(num: u8) -> Result<Self, Self::Error> {
        Generation::from_num(num).ok_or(InvalidGeneration(num))
    }
}

impl From<Generation> for u8 {
    fn from(gen: Generation) -> Self {
        gen.num()
    }
}
