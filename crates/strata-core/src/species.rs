//! Name-to-identity resolution for chemical species.

use crate::error::ConfigError;
use crate::id::SpeciesId;
use indexmap::IndexSet;

/// Insertion-ordered table of species names.
///
/// `SpeciesId(n)` is the n-th name registered. Processes resolve their
/// reactant, product, and adsorbate names through the table once, at
/// construction, so an unknown name is caught before any event runs.
#[derive(Clone, Debug, Default)]
pub struct SpeciesTable {
    names: IndexSet<String>,
}

impl SpeciesTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a species, returning its id. Registering a name twice
    /// returns the existing id.
    pub fn register(&mut self, name: impl Into<String>) -> SpeciesId {
        let (index, _) = self.names.insert_full(name.into());
        SpeciesId(index as u32)
    }

    /// Look up a species by name.
    pub fn get(&self, name: &str) -> Option<SpeciesId> {
        self.names.get_index_of(name).map(|i| SpeciesId(i as u32))
    }

    /// Look up a species by name, failing with [`ConfigError::UnknownSpecies`].
    pub fn resolve(&self, name: &str) -> Result<SpeciesId, ConfigError> {
        self.get(name).ok_or_else(|| ConfigError::UnknownSpecies {
            name: name.to_string(),
        })
    }

    /// Name of a registered species.
    pub fn name(&self, id: SpeciesId) -> Option<&str> {
        self.names.get_index(id.0 as usize).map(String::as_str)
    }

    /// Number of registered species.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no species has been registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SpeciesTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for name in iter {
            table.register(name);
        }
        table
    }
}
