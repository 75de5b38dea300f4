//! Process trait, kinetic context and rate laws for Strata simulations.
//!
//! The [`Process`] trait pairs an applicability rule with a state
//! mutation; [`KineticContext`] hands each invocation explicit, borrowed
//! access to the lattice, the class registry and the random source.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod affected;
pub mod context;
pub mod error;
pub mod process;
pub mod rate;

pub use affected::AffectedSites;
pub use context::KineticContext;
pub use error::ProcessError;
pub use process::{Membership, Process};
pub use rate::RateLaw;
