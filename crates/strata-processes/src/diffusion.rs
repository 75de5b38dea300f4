//! Coordination-keyed surface diffusion.
//!
//! `Diffusion {n}N` lifts the top unit of a column with coordination `n`
//! and drops it on a uniformly drawn neighbour. An adsorbate carries its
//! label along; bare film material moves unlabelled.

use crate::coordination;
use strata_core::{ConfigError, Conditions, Direction, SiteId, DIFFUSION};
use strata_lattice::LatticeError;
use strata_process::{AffectedSites, KineticContext, Membership, Process, ProcessError, RateLaw};

/// A hop process for one coordination number.
#[derive(Clone, Debug)]
pub struct Diffusion {
    name: String,
    neighbours: usize,
    probability: f64,
}

impl Diffusion {
    /// Build `Diffusion {neighbours}N`.
    ///
    /// # Errors
    ///
    /// Same as [`Desorption::new`](crate::Desorption::new).
    pub fn new(
        neighbours: usize,
        law: RateLaw,
        site_count: usize,
        conditions: &Conditions,
    ) -> Result<Self, ConfigError> {
        let (name, probability) =
            coordination::resolve(DIFFUSION, neighbours, law, site_count, conditions)?;
        Ok(Self {
            name,
            neighbours,
            probability,
        })
    }

    /// The coordination number this process is keyed on.
    pub fn neighbours(&self) -> usize {
        self.neighbours
    }
}

impl Process for Diffusion {
    fn name(&self) -> &str {
        &self.name
    }

    fn membership(&self) -> Membership {
        Membership::Coordination
    }

    fn probability(&self) -> f64 {
        self.probability
    }

    fn rules(&mut self, site: SiteId, ctx: &KineticContext<'_>) -> bool {
        ctx.lattice().coordination(site).ok() == Some(self.neighbours)
    }

    fn perform(
        &mut self,
        site: SiteId,
        ctx: &mut KineticContext<'_>,
    ) -> Result<AffectedSites, ProcessError> {
        let (carried, targets) = {
            let lattice = ctx.lattice();
            let from = lattice.site(site)?;
            let carried = if from.is_occupied() { from.label() } else { None };
            (carried, lattice.neighbours(site)?)
        };
        let pick = ctx.rng().uniform_int(0, targets.len());
        let target = targets.get(pick).copied().ok_or(LatticeError::BrokenLink {
            site,
            dir: Direction::North,
        })?;

        ctx.desorb(site)?;
        ctx.adsorb(target, carried)?;

        let mut affected = AffectedSites::new();
        affected.insert_with_neighbours(ctx.lattice(), site)?;
        affected.insert_with_neighbours(ctx.lattice(), target)?;
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::SpeciesId;
    use strata_test_utils::{coordination_registry, flat_lattice, ScriptedRandom};

    fn hop(n: usize) -> Diffusion {
        Diffusion::new(n, RateLaw::Constant { rate: 1.0 }, 16, &Conditions::default()).unwrap()
    }

    #[test]
    fn name_and_membership() {
        let d = hop(2);
        assert_eq!(d.name(), "Diffusion 2N");
        assert_eq!(d.membership(), Membership::Coordination);
        assert_eq!(d.neighbours(), 2);
    }

    #[test]
    fn bare_unit_hops_to_drawn_neighbour() {
        let mut lattice = flat_lattice(4, 4, 5);
        let mut registry = coordination_registry();
        // Neighbours of 5 in N, S, E, W order: 1, 9, 6, 4. Index 2 is east.
        let mut rng = ScriptedRandom::new(vec![2], vec![]);
        let mut ctx = KineticContext::new(&mut lattice, &mut registry, &mut rng);
        ctx.adsorb(SiteId(5), None).unwrap();

        let mut d = hop(1);
        assert!(d.rules(SiteId(5), &ctx));
        let affected = d.perform(SiteId(5), &mut ctx).unwrap();

        let east = ctx.lattice().neighbour(SiteId(5), Direction::East).unwrap();
        assert_eq!(east, SiteId(6));
        assert_eq!(ctx.lattice().site(SiteId(5)).unwrap().height(), 4);
        assert_eq!(ctx.lattice().site(east).unwrap().height(), 5);
        assert!(affected.contains(SiteId(5)));
        assert!(affected.contains(SiteId(7)));
        assert!(affected.contains(SiteId(2)));
    }

    #[test]
    fn adsorbate_carries_its_label() {
        let mut lattice = flat_lattice(4, 4, 5);
        let mut registry = coordination_registry();
        let mut rng = ScriptedRandom::new(vec![0], vec![]);
        let mut ctx = KineticContext::new(&mut lattice, &mut registry, &mut rng);
        let h = SpeciesId(1);
        ctx.adsorb(SiteId(5), Some(h)).unwrap();

        hop(1).perform(SiteId(5), &mut ctx).unwrap();

        let from = ctx.lattice().site(SiteId(5)).unwrap();
        assert!(!from.is_occupied());
        assert_eq!(from.label(), None);
        let to = ctx.lattice().site(SiteId(1)).unwrap();
        assert!(to.is_occupied());
        assert_eq!(to.label(), Some(h));
    }
}
