//! Errors raised while assembling a [`Kinetics`](crate::Kinetics) run.

use std::error::Error;
use std::fmt;
use strata_core::{ConfigError, RegistryError};
use strata_lattice::LatticeError;

/// Errors from [`Kinetics::new`](crate::Kinetics::new).
#[derive(Clone, Debug, PartialEq)]
pub enum KineticsError {
    /// The lattice or process set is misconfigured.
    Config(ConfigError),
    /// Seeding the coordination classes failed.
    Lattice(LatticeError),
}

impl fmt::Display for KineticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Lattice(e) => write!(f, "lattice: {e}"),
        }
    }
}

impl Error for KineticsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Lattice(e) => Some(e),
        }
    }
}

impl From<ConfigError> for KineticsError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<LatticeError> for KineticsError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

impl From<RegistryError> for KineticsError {
    fn from(e: RegistryError) -> Self {
        Self::Config(e.into())
    }
}
