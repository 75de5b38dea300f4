//! Error types shared across the Strata workspace.
//!
//! [`ConfigError`] covers everything that makes a lattice or process set
//! unusable and is raised eagerly at construction. [`RegistryError`] is a
//! programming error surfaced at run time when a process class that was
//! never registered is looked up.

use std::error::Error;
use std::fmt;

/// Fatal configuration errors.
///
/// Returned from lattice and process constructors. No partially built
/// object is ever handed out alongside one of these; the driver is
/// expected to report it and stop.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// No lattice kind was configured.
    LatticeKindUnset,
    /// The lattice kind name is not recognised.
    UnknownLatticeKind {
        /// The unrecognised name.
        name: String,
    },
    /// Either lattice dimension is zero.
    EmptyLattice {
        /// Configured X size.
        size_x: u32,
        /// Configured Y size.
        size_y: u32,
    },
    /// A lattice dimension of 1 cannot form a periodic 4-neighbourhood.
    DegenerateDimension {
        /// Which axis (`"size_x"` or `"size_y"`).
        axis: &'static str,
        /// The offending size.
        value: u32,
    },
    /// The step count does not evenly divide the X dimension.
    InvalidSteps {
        /// Configured X size.
        size_x: u32,
        /// Requested number of terraces.
        steps: u32,
    },
    /// A reaction was defined without reactants.
    MissingReactants {
        /// Name of the offending process.
        process: String,
    },
    /// A reaction was defined without products.
    MissingProducts {
        /// Name of the offending process.
        process: String,
    },
    /// The rate-law keyword is not one of the supported kinds.
    UnsupportedRateLaw {
        /// Name of the offending process.
        process: String,
        /// The unrecognised keyword.
        keyword: String,
    },
    /// A rate-law parameter is missing, non-numeric, or out of range.
    InvalidRateParameter {
        /// Name of the offending process.
        process: String,
        /// What went wrong.
        reason: String,
    },
    /// A species name is not in the species table.
    UnknownSpecies {
        /// The unresolved name.
        name: String,
    },
    /// The reaction's stoichiometry has no supported rule/perform strategy.
    UnsupportedStoichiometry {
        /// Name of the offending process.
        process: String,
    },
    /// A coordination-classified process has a neighbour count outside `1..=5`.
    InvalidCoordination {
        /// Name of the offending process.
        process: String,
        /// The requested neighbour count.
        neighbours: usize,
    },
    /// Two processes share a class name.
    DuplicateClass {
        /// The duplicated class name.
        name: String,
    },
    /// Temperature, pressure, or a physical constant is invalid.
    InvalidConditions {
        /// What went wrong.
        reason: String,
    },
    /// Initial classification referenced a class that was never registered.
    Registry(RegistryError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LatticeKindUnset => write!(f, "lattice kind is not set"),
            Self::UnknownLatticeKind { name } => {
                write!(f, "unsupported lattice kind '{name}'")
            }
            Self::EmptyLattice { size_x, size_y } => write!(
                f,
                "the lattice size cannot be zero in either dimension ({size_x} x {size_y})"
            ),
            Self::DegenerateDimension { axis, value } => write!(
                f,
                "{axis} = {value} is too small for a periodic lattice (need at least 2)"
            ),
            Self::InvalidSteps { size_x, steps } => write!(
                f,
                "{steps} steps do not evenly divide the lattice X size {size_x}"
            ),
            Self::MissingReactants { process } => {
                write!(f, "no reactants defined for reaction '{process}'")
            }
            Self::MissingProducts { process } => {
                write!(f, "no products defined for reaction '{process}'")
            }
            Self::UnsupportedRateLaw { process, keyword } => {
                write!(f, "unsupported rate law '{keyword}' for process '{process}'")
            }
            Self::InvalidRateParameter { process, reason } => {
                write!(f, "invalid rate parameter for process '{process}': {reason}")
            }
            Self::UnknownSpecies { name } => write!(f, "unknown species '{name}'"),
            Self::UnsupportedStoichiometry { process } => write!(
                f,
                "reaction '{process}' has a stoichiometry with no supported strategy"
            ),
            Self::InvalidCoordination {
                process,
                neighbours,
            } => write!(
                f,
                "process '{process}' has neighbour count {neighbours}, expected 1..=5"
            ),
            Self::DuplicateClass { name } => {
                write!(f, "process class '{name}' is defined twice")
            }
            Self::InvalidConditions { reason } => write!(f, "invalid conditions: {reason}"),
            Self::Registry(e) => write!(f, "registry: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Registry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RegistryError> for ConfigError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}

/// Errors from [`ClassRegistry`](crate::ClassRegistry) lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The class name was never registered.
    UnknownClass {
        /// The unregistered name.
        name: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownClass { name } => write!(f, "process class '{name}' is not registered"),
        }
    }
}

impl Error for RegistryError {}
