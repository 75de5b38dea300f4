//! Errors raised while performing a process.

use std::error::Error;
use std::fmt;
use strata_core::{RegistryError, SiteId};
use strata_lattice::LatticeError;

/// Errors from [`Process::perform`](crate::Process::perform).
///
/// A rule that does not apply is *not* an error; `rules` returns `false`
/// instead. These variants indicate broken invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessError {
    /// A lattice lookup or mutation failed.
    Lattice(LatticeError),
    /// A registry lookup named an unregistered class.
    Registry(RegistryError),
    /// A paired reaction was performed on a site with no recorded partner.
    NoPartner {
        /// Name of the reaction.
        process: String,
        /// The initiating site.
        site: SiteId,
    },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::Registry(e) => write!(f, "registry: {e}"),
            Self::NoPartner { process, site } => {
                write!(f, "reaction '{process}' has no partner recorded for site {site}")
            }
        }
    }
}

impl Error for ProcessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            Self::Registry(e) => Some(e),
            Self::NoPartner { .. } => None,
        }
    }
}

impl From<LatticeError> for ProcessError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

impl From<RegistryError> for ProcessError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}
