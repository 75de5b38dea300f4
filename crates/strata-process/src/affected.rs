//! The set of sites whose classification must be recomputed after an event.

use smallvec::SmallVec;
use strata_core::SiteId;
use strata_lattice::{Lattice, LatticeError};

/// Sites touched by an event: the acting site(s) plus their neighbours.
///
/// Insertion-ordered and duplicate-free. Sized inline for a two-site
/// event with eight neighbours.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AffectedSites {
    sites: SmallVec<[SiteId; 10]>,
}

impl AffectedSites {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a site if not already present.
    pub fn insert(&mut self, site: SiteId) {
        if !self.sites.contains(&site) {
            self.sites.push(site);
        }
    }

    /// Add a site and all of its topological neighbours.
    pub fn insert_with_neighbours(
        &mut self,
        lattice: &dyn Lattice,
        site: SiteId,
    ) -> Result<(), LatticeError> {
        self.insert(site);
        for nb in lattice.neighbours(site)? {
            self.insert(nb);
        }
        Ok(())
    }

    /// Whether `site` is in the set.
    pub fn contains(&self, site: SiteId) -> bool {
        self.sites.contains(&site)
    }

    /// Number of sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Sites in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = SiteId> + '_ {
        self.sites.iter().copied()
    }
}
