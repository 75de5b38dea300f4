//! Event selection and re-classification for Strata simulations.
//!
//! [`Kinetics`] owns the lattice, the class registry, the process set
//! and the random source. Each [`step`](Kinetics::step) selects one
//! event by propensity, re-checks its rule, performs it, and brings the
//! registry back in line with the mutated sites before the next
//! selection.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod kinetics;

pub use error::KineticsError;
pub use kinetics::{Event, Kinetics};
