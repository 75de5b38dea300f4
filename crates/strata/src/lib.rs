//! Strata: the kinetic core of a lattice surface-growth simulator.
//!
//! A driver builds a lattice, picks its elementary processes and hands
//! both to [`engine::Kinetics`], which draws and performs events one at a
//! time. Each stage lives in its own `strata-*` crate; this crate gathers
//! them under short module names and a [`prelude`].
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use strata::prelude::*;
//!
//! // A 16×16 flat BCC(100) surface, columns at height 9.
//! let config = LatticeConfig::new(LatticeKind::Bcc, 16, 16, 10);
//! let sites = config.site_count();
//! let conditions = Conditions::at_temperature(600.0);
//!
//! let mut processes: Vec<Box<dyn Process>> = vec![Box::new(
//!     Adsorption::deposition(RateLaw::Constant { rate: 0.5 }, sites, &conditions).unwrap(),
//! )];
//! for n in 1..=5 {
//!     let hop = RateLaw::from_params("Diffusion", &["arrhenius", "1e13", "40000"]).unwrap();
//!     processes.push(Box::new(Diffusion::new(n, hop, sites, &conditions).unwrap()));
//! }
//!
//! let mut kinetics =
//!     Kinetics::from_config(&config, processes, ChaCha8Rng::seed_from_u64(42)).unwrap();
//! for _ in 0..100 {
//!     kinetics.step().unwrap();
//! }
//! assert!(kinetics.events() > 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | IDs, sites, species, conditions, registry, errors |
//! | [`lattice`] | `strata-lattice` | `Lattice` trait, configuration, BCC surface |
//! | [`process`] | `strata-process` | `Process` trait, context, rate laws |
//! | [`processes`] | `strata-processes` | Adsorption, desorption, diffusion, reactions |
//! | [`engine`] | `strata-engine` | The `Kinetics` event loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, IDs and errors (`strata-core`).
///
/// Contains [`types::Site`], [`types::ClassRegistry`], [`types::Conditions`]
/// and the [`types::RandomSource`] capability.
pub use strata_core as types;

/// Lattice topology (`strata-lattice`).
///
/// Provides the [`lattice::Lattice`] trait, [`lattice::LatticeConfig`] and
/// the [`lattice::Bcc`] backend.
pub use strata_lattice as lattice;

/// Process trait and rate laws (`strata-process`).
pub use strata_process as process;

/// Concrete processes (`strata-processes`).
pub use strata_processes as processes;

/// The event loop (`strata-engine`).
pub use strata_engine as engine;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use strata_core::{
        ClassRegistry, Conditions, Direction, RandomSource, Site, SiteId, SpeciesId,
        SpeciesTable,
    };

    // Errors
    pub use strata_core::{ConfigError, RegistryError};
    pub use strata_engine::KineticsError;
    pub use strata_lattice::LatticeError;
    pub use strata_process::ProcessError;

    // Lattice
    pub use strata_lattice::{Bcc, Lattice, LatticeConfig, LatticeKind, StepGeometry};

    // Processes
    pub use strata_process::{AffectedSites, KineticContext, Membership, Process, RateLaw};
    pub use strata_processes::{Adsorption, Desorption, Diffusion, Reaction, ReactionStrategy};

    // Engine
    pub use strata_engine::{Event, Kinetics};
}
