//! Core types for the Strata kinetic Monte Carlo core.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! site model, typed identifiers, physical conditions, the process-class
//! registry, the random-source capability, and the error types shared by
//! the lattice, process, and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod conditions;
pub mod error;
pub mod id;
pub mod random;
pub mod registry;
pub mod site;
pub mod species;

pub use conditions::Conditions;
pub use error::{ConfigError, RegistryError};
pub use id::{SiteId, SpeciesId};
pub use random::RandomSource;
pub use registry::{coordination_class, ClassRegistry, ADSORPTION_PREFIX, DESORPTION, DIFFUSION};
pub use site::{Direction, Site};
pub use species::SpeciesTable;
