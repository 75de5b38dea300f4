//! Execution context passed to processes.
//!
//! [`KineticContext`] bundles borrowed access to the lattice, the
//! process-class registry and the random source for one rule check or
//! one perform. The engine builds a fresh context per event; nothing is
//! shared through globals.

use strata_core::{ClassRegistry, RandomSource, SiteId, SpeciesId};
use strata_lattice::{Lattice, LatticeError};

/// Borrowed simulation state for a single process invocation.
///
/// Exclusive borrows give the single-writer discipline the kinetic core
/// relies on: while a process holds a context, nothing else can touch
/// site content or class membership.
pub struct KineticContext<'a> {
    lattice: &'a mut dyn Lattice,
    registry: &'a mut ClassRegistry,
    rng: &'a mut dyn RandomSource,
}

impl<'a> KineticContext<'a> {
    /// Construct a new context.
    ///
    /// Typically called by the engine. Tests build one directly around a
    /// small lattice and a scripted random source.
    pub fn new(
        lattice: &'a mut dyn Lattice,
        registry: &'a mut ClassRegistry,
        rng: &'a mut dyn RandomSource,
    ) -> Self {
        Self {
            lattice,
            registry,
            rng,
        }
    }

    /// Read-only lattice.
    pub fn lattice(&self) -> &dyn Lattice {
        &*self.lattice
    }

    /// Mutable lattice, for label/occupancy changes that do not move height.
    pub fn lattice_mut(&mut self) -> &mut dyn Lattice {
        &mut *self.lattice
    }

    /// Read-only registry.
    pub fn registry(&self) -> &ClassRegistry {
        &*self.registry
    }

    /// Mutable registry.
    pub fn registry_mut(&mut self) -> &mut ClassRegistry {
        &mut *self.registry
    }

    /// Random source.
    pub fn rng(&mut self) -> &mut dyn RandomSource {
        &mut *self.rng
    }

    /// [`Lattice::adsorb`] with this context's registry.
    pub fn adsorb(&mut self, site: SiteId, species: Option<SpeciesId>) -> Result<(), LatticeError> {
        self.lattice.adsorb(site, species, self.registry)
    }

    /// [`Lattice::desorb`] with this context's registry.
    pub fn desorb(&mut self, site: SiteId) -> Result<(), LatticeError> {
        self.lattice.desorb(site, self.registry)
    }

    /// [`Lattice::react`] with this context's registry.
    pub fn react(&mut self, site: SiteId) -> Result<(), LatticeError> {
        self.lattice.react(site, self.registry)
    }

    /// [`Lattice::classify`] with this context's registry.
    pub fn classify(&mut self, site: SiteId) -> Result<(), LatticeError> {
        self.lattice.classify(site, self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_test_utils::{coordination_registry, flat_lattice, ScriptedRandom};

    #[test]
    fn context_routes_mutations_through_registry() {
        let mut lattice = flat_lattice(3, 3, 5);
        let mut registry = coordination_registry();
        let mut rng = ScriptedRandom::new(vec![], vec![]);

        let mut ctx = KineticContext::new(&mut lattice, &mut registry, &mut rng);
        ctx.adsorb(SiteId(4), None).unwrap();
        assert_eq!(ctx.lattice().site(SiteId(4)).unwrap().height(), 5);
        assert_eq!(
            ctx.registry().classes_for(SiteId(4)),
            vec!["Desorption 1N", "Diffusion 1N"]
        );

        ctx.desorb(SiteId(4)).unwrap();
        assert_eq!(ctx.lattice().site(SiteId(4)).unwrap().height(), 4);
        assert_eq!(
            ctx.registry().classes_for(SiteId(4)),
            vec!["Desorption 5N", "Diffusion 5N"]
        );
    }

    #[test]
    fn rng_is_reachable() {
        let mut lattice = flat_lattice(2, 2, 5);
        let mut registry = coordination_registry();
        let mut rng = ScriptedRandom::new(vec![1], vec![0.25]);
        let mut ctx = KineticContext::new(&mut lattice, &mut registry, &mut rng);
        assert_eq!(ctx.rng().uniform_int(0, 4), 1);
        assert_eq!(ctx.rng().uniform_real(), 0.25);
    }
}
