//! Error types for lattice operations.

use std::error::Error;
use std::fmt;
use strata_core::{Direction, RegistryError, SiteId};

/// Errors arising from site lookups and site mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// A site id is outside the lattice.
    SiteOutOfRange {
        /// The offending id.
        site: SiteId,
        /// Number of sites in the lattice.
        size: usize,
    },
    /// A neighbour link is missing or not reciprocal.
    BrokenLink {
        /// Site whose link is broken.
        site: SiteId,
        /// Direction of the broken link.
        dir: Direction,
    },
    /// Reclassification referenced an unregistered process class.
    Registry(RegistryError),
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SiteOutOfRange { site, size } => {
                write!(f, "site {site} out of range for lattice of {size} sites")
            }
            Self::BrokenLink { site, dir } => {
                write!(f, "site {site} has a broken {dir:?} neighbour link")
            }
            Self::Registry(e) => write!(f, "registry: {e}"),
        }
    }
}

impl Error for LatticeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Registry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RegistryError> for LatticeError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}
