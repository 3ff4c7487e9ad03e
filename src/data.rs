//! Generation-layered data tables.
//!
//! Every generation ships a *patch*: the records that are new or changed in
//! that generation. A generation's table is the previous generation's table
//! with the patch laid over it, so lookups never have to walk the chain.

use crate::errors::{DataError, DataResult};
use schema::{to_id, Generation, ID};
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use strum::IntoEnumIterator;

/// Records added or replaced by one generation, keyed by ID.
pub type Patch<T> = BTreeMap<ID, T>;

/// A record that may be reachable under more than its own key.
pub trait Record {
    /// Extra IDs that resolve to this record (e.g. cosmetic forms).
    fn extra_ids(&self) -> &[ID] {
        &[]
    }
}

/// An immutable ID -> record table for a single generation.
#[derive(Debug, PartialEq)]
pub struct DataTable<T> {
    entries: HashMap<ID, Arc<T>>,
}

impl<T> Clone for DataTable<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T> Default for DataTable<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Record> DataTable<T> {
    /// Build a new table from this one plus `patch`. Patch keys win on collision;
    /// nothing is ever removed.
    pub fn patch(&self, patch: Patch<T>) -> DataTable<T> {
        let mut entries = self.entries.clone();
        let mut extra = Vec::new();

        for (id, record) in &patch {
            for alias in record.extra_ids() {
                if !patch.contains_key(alias) {
                    extra.push((alias.clone(), id.clone()));
                }
            }
        }
        for (id, record) in patch {
            entries.insert(id, Arc::new(record));
        }
        for (alias, id) in extra {
            if let Some(record) = entries.get(&id).cloned() {
                entries.insert(alias, record);
            }
        }

        DataTable { entries }
    }
}

impl<T> DataTable<T> {
    pub fn get(&self, id: &str) -> Option<&Arc<T>> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One table per generation, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationTables<T> {
    tables: Vec<DataTable<T>>,
}

impl<T: Record> GenerationTables<T> {
    /// Fold the patches in chronological order. Generations without a patch
    /// inherit the previous table unchanged.
    pub fn from_patches(patches: impl IntoIterator<Item = (Generation, Patch<T>)>) -> Self {
        let mut patches: BTreeMap<Generation, Patch<T>> = patches.into_iter().collect();
        let tables = Generation::iter()
            .scan(DataTable::default(), |previous, gen| {
                let table = previous.patch(patches.remove(&gen).unwrap_or_default());
                *previous = table.clone();
                Some(table)
            })
            .collect();
        Self { tables }
    }
}

impl<T> GenerationTables<T> {
    pub fn for_gen(&self, gen: Generation) -> &DataTable<T> {
        // one table per generation, built by from_patches
        &self.tables[usize::from(gen.num() - 1)]
    }
}

/// Parse one generation's RON patch. Keys that are not already IDs are normalized.
pub fn parse_patch<T: DeserializeOwned>(gen: Generation, source: &str) -> DataResult<Patch<T>> {
    let raw: BTreeMap<String, T> =
        ron::from_str(source).map_err(|source| DataError::Ron { gen, source })?;

    Ok(raw
        .into_iter()
        .map(|(key, record)| {
            let id = to_id(&key);
            if id.as_str() != key {
                log::warn!("gen {gen}: normalized data key {key:?} to {id:?}");
            }
            (id, record)
        })
        .collect())
}

/// Load `<data_path>/<kind>/<slug>.ron` for one generation. A missing file is an
/// empty patch.
pub fn load_patch<T: DeserializeOwned>(
    data_path: &Path,
    kind: &str,
    gen: Generation,
) -> DataResult<Patch<T>> {
    let path = data_path.join(kind).join(format!("{}.ron", gen.slug()));
    if !path.exists() {
        log::debug!("no {kind} patch for gen {gen} at {}", path.display());
        return Ok(Patch::new());
    }

    let content = fs::read_to_string(&path).map_err(|e| DataError::io(&path, e))?;
    parse_patch(gen, &content)
}
