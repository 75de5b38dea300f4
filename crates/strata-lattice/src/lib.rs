//! Lattice topology for Strata simulations.
//!
//! This crate defines the [`Lattice`] trait, the single surface every
//! process queries for site state and adjacency, together with the
//! periodic topology builder and the concrete geometry backends.
//!
//! # Backends
//!
//! - [`Bcc`]: BCC(100) surface as a periodic square array of columns
//!   with four in-plane neighbours (N/S/E/W).
//!
//! # Construction
//!
//! Lattices are built from a [`LatticeConfig`] through [`build`], which
//! validates the configuration eagerly and selects the backend from the
//! [`LatticeKind`] tag.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bcc;
pub mod config;
pub mod error;
pub mod kind;
pub mod lattice;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use bcc::Bcc;
pub use config::{LatticeConfig, StepGeometry, MIN_INITIAL_HEIGHT};
pub use error::LatticeError;
pub use kind::LatticeKind;
pub use lattice::Lattice;

use strata_core::ConfigError;

/// Build the lattice variant named by `config.kind`.
///
/// # Errors
///
/// Any [`ConfigError`] reported by [`LatticeConfig::validate`].
pub fn build(config: &LatticeConfig) -> Result<Box<dyn Lattice>, ConfigError> {
    match config.kind {
        Some(LatticeKind::Bcc) => Ok(Box::new(Bcc::build(config)?)),
        None => Err(ConfigError::LatticeKindUnset),
    }
}
