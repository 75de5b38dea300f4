//! Benchmark profiles for the Strata kinetic core.
//!
//! - [`reference_config`]: 64x64 flat BCC surface (4096 sites)
//! - [`stress_config`]: 256x256 stepped BCC surface (65536 sites)
//! - [`growth_processes`]: deposition with the full desorption and
//!   diffusion families

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_core::Conditions;
use strata_lattice::{LatticeConfig, LatticeKind};
use strata_process::{Process, RateLaw};
use strata_processes::{Adsorption, Desorption, Diffusion};

/// A 64x64 flat surface.
pub fn reference_config() -> LatticeConfig {
    LatticeConfig::new(LatticeKind::Bcc, 64, 64, 20)
}

/// A 256x256 surface with eight single-layer steps.
pub fn stress_config() -> LatticeConfig {
    LatticeConfig::new(LatticeKind::Bcc, 256, 256, 20).with_steps(8, 1)
}

/// Deposition plus `Desorption 1N..5N` and `Diffusion 1N..5N` at 600 K.
///
/// # Panics
///
/// Never for the fixed parameters used here.
pub fn growth_processes(site_count: usize) -> Vec<Box<dyn Process>> {
    let c = Conditions::at_temperature(600.0);
    let hop = RateLaw::Arrhenius {
        prefactor: 1e13,
        activation_energy: 40_000.0,
    };
    let leave = RateLaw::Arrhenius {
        prefactor: 1e13,
        activation_energy: 70_000.0,
    };
    let mut processes: Vec<Box<dyn Process>> = vec![Box::new(
        Adsorption::deposition(RateLaw::Constant { rate: 0.1 }, site_count, &c)
            .expect("constant deposition rate is valid"),
    )];
    for n in 1..=5 {
        processes.push(Box::new(
            Desorption::new(n, leave, site_count, &c).expect("coordination in range"),
        ));
        processes.push(Box::new(
            Diffusion::new(n, hop, site_count, &c).expect("coordination in range"),
        ));
    }
    processes
}
