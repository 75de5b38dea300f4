//! Reusable lattice and registry fixtures.
//!
//! - [`flat_lattice`]: BCC surface with every column at the same height.
//! - [`stepped_lattice`]: BCC surface with a staircase profile.
//! - [`coordination_registry`]: registry holding only the coordination
//!   families `Desorption 1N..5N` and `Diffusion 1N..5N`.

use strata_core::{coordination_class, ClassRegistry, DESORPTION, DIFFUSION};
use strata_lattice::{Bcc, Lattice, LatticeConfig, LatticeKind};

/// A flat `size_x * size_y` BCC lattice. Every site sits at
/// `initial_height - 1`.
///
/// # Panics
///
/// On an invalid configuration; fixtures are for tests only.
pub fn flat_lattice(size_x: u32, size_y: u32, initial_height: i32) -> Bcc {
    let config = LatticeConfig::new(LatticeKind::Bcc, size_x, size_y, initial_height);
    Bcc::build(&config).expect("fixture lattice config must be valid")
}

/// A BCC lattice whose columns rise by `step_height` every
/// `size_x / steps` columns.
///
/// # Panics
///
/// On an invalid configuration.
pub fn stepped_lattice(
    size_x: u32,
    size_y: u32,
    initial_height: i32,
    steps: u32,
    step_height: i32,
) -> Bcc {
    let config = LatticeConfig::new(LatticeKind::Bcc, size_x, size_y, initial_height)
        .with_steps(steps, step_height);
    Bcc::build(&config).expect("fixture lattice config must be valid")
}

/// Registry with `Desorption {n}N` and `Diffusion {n}N` for `n` in `1..=5`.
pub fn coordination_registry() -> ClassRegistry {
    let mut registry = ClassRegistry::new();
    for family in [DESORPTION, DIFFUSION] {
        for n in 1..=5 {
            registry.register(coordination_class(family, n));
        }
    }
    registry
}
