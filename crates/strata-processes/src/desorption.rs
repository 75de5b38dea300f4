//! Coordination-keyed desorption.
//!
//! `Desorption {n}N` removes the top unit of a column whose coordination
//! is `n`. With an Arrhenius law the activation energy is bond-counted:
//! `Ea_eff = n * Ea`.

use crate::coordination;
use strata_core::{ConfigError, Conditions, SiteId, DESORPTION};
use strata_process::{AffectedSites, KineticContext, Membership, Process, ProcessError, RateLaw};

/// A desorption process for one coordination number.
#[derive(Clone, Debug)]
pub struct Desorption {
    name: String,
    neighbours: usize,
    probability: f64,
}

impl Desorption {
    /// Build `Desorption {neighbours}N`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidCoordination`] unless `neighbours` is in `1..=5`
    /// - [`ConfigError::UnsupportedRateLaw`] for a Hertz–Knudsen law
    pub fn new(
        neighbours: usize,
        law: RateLaw,
        site_count: usize,
        conditions: &Conditions,
    ) -> Result<Self, ConfigError> {
        let (name, probability) =
            coordination::resolve(DESORPTION, neighbours, law, site_count, conditions)?;
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

impl Process for Desorption {
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
        ctx.desorb(site)?;
        let mut affected = AffectedSites::new();
        affected.insert_with_neighbours(ctx.lattice(), site)?;
        Ok(affected)
    }
}
