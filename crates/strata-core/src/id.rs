//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a site (lattice column) within a lattice.
///
/// Sites are allocated row-major at build time and `SiteId(n)` is the
/// index of the n-th site in the lattice's arena. Ids are stable for the
/// lifetime of the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId(pub u32);

impl SiteId {
    /// Arena index of this site.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SiteId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a chemical species registered in a [`SpeciesTable`](crate::SpeciesTable).
///
/// Used as the label of an occupied site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpeciesId(pub u32);

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SpeciesId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
