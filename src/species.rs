//! Species resolution.
//!
//! A [`Dex`] owns one species table per generation and answers "which species
//! does this name mean in generation N?", accepting IDs, display names,
//! community aliases and the `Mega X` / `Primal X` spellings of formes.

use crate::aliases;
use crate::cache::Memo;
use crate::data::{self, DataTable, GenerationTables, Patch, Record};
use crate::errors::DataResult;
use schema::{to_id, Generation, ID};
use std::path::Path;
use std::sync::{Arc, LazyLock};
use strum::IntoEnumIterator;

pub use schema::SpeciesData as Species;

impl Record for Species {
    fn extra_ids(&self) -> &[ID] {
        &self.cosmetic_forms
    }
}

const BUNDLED_SPECIES: [(Generation, &str); 7] = [
    (Generation::Rby, include_str!("../data/species/rby.ron")),
    (Generation::Gsc, include_str!("../data/species/gsc.ron")),
    (Generation::Adv, include_str!("../data/species/adv.ron")),
    (Generation::Dpp, include_str!("../data/species/dpp.ron")),
    (Generation::Bw, include_str!("../data/species/bw.ron")),
    (Generation::Xy, include_str!("../data/species/xy.ron")),
    (Generation::Sm, include_str!("../data/species/sm.ron")),
];

// Built once on first use
static BUNDLED_DEX: LazyLock<Dex> = LazyLock::new(|| {
    Dex::from_sources(BUNDLED_SPECIES).unwrap_or_else(|err| {
        log::error!("bundled species data is invalid: {err}");
        Dex::from_patches(Vec::new())
    })
});

// Tried in order when a direct lookup misses: (prefix, suffix)
const FORME_PREFIXES: [(&str, &str); 4] = [
    ("mega", "mega"),
    ("m", "mega"),
    ("primal", "primal"),
    ("p", "primal"),
];

type LookupKey = (String, Generation);

/// Per-generation species tables plus memoized lookups.
#[derive(Debug)]
pub struct Dex {
    species: GenerationTables<Species>,
    resolved: Memo<LookupKey, Option<Arc<Species>>>,
    names: Memo<LookupKey, Option<String>>,
}

impl Dex {
    /// The species data compiled into the crate.
    pub fn bundled() -> &'static Dex {
        &BUNDLED_DEX
    }

    /// Build the tables by layering each generation's patch over the previous
    /// generation's table, oldest first.
    pub fn from_patches(patches: impl IntoIterator<Item = (Generation, Patch<Species>)>) -> Dex {
        Dex {
            species: GenerationTables::from_patches(patches),
            resolved: Memo::new(),
            names: Memo::new(),
        }
    }

    /// Build from RON sources, one per generation.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (Generation, &'a str)>,
    ) -> DataResult<Dex> {
        let patches = sources
            .into_iter()
            .map(|(gen, source)| Ok((gen, data::parse_patch(gen, source)?)))
            .collect::<DataResult<Vec<_>>>()?;
        Ok(Dex::from_patches(patches))
    }

    /// Load `<data_path>/species/<slug>.ron` for every generation. Generations
    /// without a file inherit the previous table.
    pub fn load(data_path: &Path) -> DataResult<Dex> {
        let patches = Generation::iter()
            .map(|gen| Ok((gen, data::load_patch(data_path, "species", gen)?)))
            .collect::<DataResult<Vec<_>>>()?;
        Ok(Dex::from_patches(patches))
    }

    pub fn for_gen(&self, gen: Generation) -> &DataTable<Species> {
        self.species.for_gen(gen)
    }

    /// Resolve a free-form species name in `gen`. `None` means not found.
    pub fn species(&self, name: &str, gen: Generation) -> Option<Arc<Species>> {
        self.resolved
            .get_or_insert_with((name.to_string(), gen), || {
                resolve(self.for_gen(gen), name)
            })
    }

    /// Resolve `name` and return the display name it stands for, including a
    /// cosmetic form suffix (`"pikachucosplay"` -> `"Pikachu-Cosplay"`).
    pub fn species_name(&self, name: &str, gen: Generation) -> Option<String> {
        self.names.get_or_insert_with((name.to_string(), gen), || {
            let species = self.species(name, gen)?;
            Some(display_name(&species, &to_id(name)))
        })
    }
}

fn resolve(table: &DataTable<Species>, name: &str) -> Option<Arc<Species>> {
    if name.is_empty() {
        return None;
    }

    let mut id = to_id(name);
    if id.as_str() == "nidoran" {
        if name.ends_with('♀') {
            id = ID::from("nidoranf");
        } else if name.ends_with('♂') {
            id = ID::from("nidoranm");
        }
    }

    if let Some(alias) = aliases::get(&id) {
        return table.get(to_id(alias).as_str()).cloned();
    }

    if let Some(species) = table.get(id.as_str()) {
        return Some(Arc::clone(species));
    }

    // NOTE: first match wins if an ID could satisfy more than one prefix
    FORME_PREFIXES.iter().find_map(|(prefix, suffix)| {
        let rest = id.as_str().strip_prefix(prefix)?;
        table.get(&format!("{rest}{suffix}")).cloned()
    })
}

fn display_name(species: &Species, id: &ID) -> String {
    if species.is_cosmetic_form(id) {
        // suffix starts after the base species' ID, not after its display name
        let form = id.as_str().get(species.id().as_str().len()..).unwrap_or_default();
        let mut chars = form.chars();
        if let Some(first) = chars.next() {
            return format!(
                "{}-{}{}",
                species.name,
                first.to_ascii_uppercase(),
                chars.as_str()
            );
        }
    }
    species.name.clone()
}
