//! Concrete kinetic processes for Strata simulations.
//!
//! Each process implements the [`Process`](strata_process::Process)
//! trait and can be boxed into a `Vec<Box<dyn Process>>` for the
//! kinetics driver in `strata-engine`.
//!
//! # Available processes
//!
//! | Process | Class | Membership |
//! |---------|-------|------------|
//! | [`Adsorption`] | `Adsorption[ <species>]` | rule-driven |
//! | [`Desorption`] | `Desorption {n}N` | coordination |
//! | [`Diffusion`] | `Diffusion {n}N` | coordination |
//! | [`Reaction`] | user-named | rule-driven |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adsorption;
pub mod desorption;
pub mod diffusion;
pub mod reaction;

mod coordination;

pub use adsorption::Adsorption;
pub use desorption::Desorption;
pub use diffusion::Diffusion;
pub use reaction::{Reaction, ReactionBuilder, ReactionStrategy};
