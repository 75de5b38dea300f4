//! Adsorption from the gas phase.
//!
//! Two flavours share one type:
//! - **physical vapour deposition** (no species): every site is eligible
//!   and the column simply grows by one layer
//! - **species adsorption**: only unoccupied sites are eligible and the
//!   adsorbate becomes the site's label
//!
//! The class name is `"Adsorption"` or `"Adsorption <species>"`, so
//! coordination reclassification never purges it.

use strata_core::{ConfigError, Conditions, SiteId, SpeciesId, SpeciesTable, ADSORPTION_PREFIX};
use strata_process::{AffectedSites, KineticContext, Membership, Process, ProcessError, RateLaw};

/// An adsorption process.
#[derive(Clone, Debug)]
pub struct Adsorption {
    name: String,
    species: Option<SpeciesId>,
    probability: f64,
}

impl Adsorption {
    /// Physical vapour deposition under class `"Adsorption"`.
    pub fn deposition(
        law: RateLaw,
        site_count: usize,
        conditions: &Conditions,
    ) -> Result<Self, ConfigError> {
        let name = ADSORPTION_PREFIX.to_string();
        law.validate(&name)?;
        Ok(Self {
            probability: law.probability(site_count, conditions),
            name,
            species: None,
        })
    }

    /// Adsorption of a named species under class `"Adsorption <species>"`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownSpecies`] if `species` is not in `table`, or
    /// any rate-law validation error.
    pub fn of_species(
        species: &str,
        table: &SpeciesTable,
        law: RateLaw,
        site_count: usize,
        conditions: &Conditions,
    ) -> Result<Self, ConfigError> {
        let id = table.resolve(species)?;
        let name = format!("{ADSORPTION_PREFIX} {species}");
        law.validate(&name)?;
        Ok(Self {
            probability: law.probability(site_count, conditions),
            name,
            species: Some(id),
        })
    }

    /// The adsorbing species, if any.
    pub fn species(&self) -> Option<SpeciesId> {
        self.species
    }
}

impl Process for Adsorption {
    fn name(&self) -> &str {
        &self.name
    }

    fn membership(&self) -> Membership {
        Membership::Rules
    }

    fn probability(&self) -> f64 {
        self.probability
    }

    fn rules(&mut self, site: SiteId, ctx: &KineticContext<'_>) -> bool {
        match self.species {
            None => ctx.lattice().site(site).is_ok(),
            Some(_) => ctx
                .lattice()
                .site(site)
                .is_ok_and(|s| !s.is_occupied()),
        }
    }

    fn perform(
        &mut self,
        site: SiteId,
        ctx: &mut KineticContext<'_>,
    ) -> Result<AffectedSites, ProcessError> {
        ctx.adsorb(site, self.species)?;
        let mut affected = AffectedSites::new();
        affected.insert_with_neighbours(ctx.lattice(), site)?;
        Ok(affected)
    }
}
