//! Surface reactions between adsorbed species.
//!
//! A reaction is configured through [`Reaction::builder`] and resolves
//! all species names against a [`SpeciesTable`] once, at build time. The
//! rule/perform pair is fixed at construction as a [`ReactionStrategy`]:
//!
//! - **Catalysis**: no reactant is a growth species. A site occupied by
//!   any reactant can fire; firing frees it and exposes its below label.
//! - **Paired**: a growth reaction of the form `A + B -> ...` with unit
//!   coefficients and at most two products. A site fires together with
//!   one neighbour carrying the other reactant; the candidate pairs are
//!   recorded symmetrically during the rule check.
//!
//! Any other growth stoichiometry is rejected with
//! [`ConfigError::UnsupportedStoichiometry`].

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use strata_core::{ConfigError, Conditions, SiteId, SpeciesId, SpeciesTable};
use strata_process::{AffectedSites, KineticContext, Membership, Process, ProcessError, RateLaw};

/// Rule/perform pair selected once per reaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionStrategy {
    /// Single-site conversion of a non-growth reactant.
    Catalysis,
    /// Two-site `A + B` reaction with neighbour partner bookkeeping.
    Paired,
}

/// A configured surface reaction.
#[derive(Clone, Debug)]
pub struct Reaction {
    name: String,
    reactants: IndexMap<SpeciesId, u32>,
    transformation: IndexMap<SpeciesId, Option<SpeciesId>>,
    strategy: ReactionStrategy,
    probability: f64,
    /// Candidate partners per site. Symmetric: `b ∈ partners[a]` iff
    /// `a ∈ partners[b]`. Grows to the lattice size on the first rule
    /// check, whatever `site_count` the reaction was built with.
    partners: Vec<IndexSet<SiteId>>,
}

/// Builder for [`Reaction`].
///
/// Required: at least one reactant, at least one product, a rate law.
#[derive(Clone, Debug)]
pub struct ReactionBuilder {
    name: String,
    reactants: Vec<(String, u32)>,
    products: Vec<String>,
    law: Option<RateLaw>,
    growth: Vec<String>,
}

impl Reaction {
    /// Start configuring a reaction named `name`. The name doubles as
    /// its registry class.
    pub fn builder(name: impl Into<String>) -> ReactionBuilder {
        ReactionBuilder {
            name: name.into(),
            reactants: Vec::new(),
            products: Vec::new(),
            law: None,
            growth: Vec::new(),
        }
    }

    /// The strategy chosen at construction.
    pub fn strategy(&self) -> ReactionStrategy {
        self.strategy
    }

    /// Stoichiometric coefficient of `species` as a reactant.
    pub fn coefficient(&self, species: SpeciesId) -> Option<u32> {
        self.reactants.get(&species).copied()
    }

    /// Product paired with reactant `species`: reactant `i` maps to
    /// product `i`, reactants past the product list map to `None`.
    pub fn product_of(&self, species: SpeciesId) -> Option<SpeciesId> {
        self.transformation.get(&species).copied().flatten()
    }

    /// Partners currently recorded for `site`.
    pub fn partners(&self, site: SiteId) -> impl Iterator<Item = SiteId> + '_ {
        self.partners
            .get(site.index())
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Drop every pairing involving `site`, on both sides.
    pub fn release(&mut self, site: SiteId) {
        let Some(set) = self.partners.get_mut(site.index()) else {
            return;
        };
        let former = std::mem::take(set);
        for other in former {
            if let Some(theirs) = self.partners.get_mut(other.index()) {
                theirs.swap_remove(&site);
            }
        }
    }

    fn pair(&mut self, a: SiteId, b: SiteId) {
        let needed = a.index().max(b.index()) + 1;
        if self.partners.len() < needed {
            self.partners.resize_with(needed, IndexSet::new);
        }
        self.partners[a.index()].insert(b);
        self.partners[b.index()].insert(a);
    }

    fn reactant_label(&self, site: SiteId, ctx: &KineticContext<'_>) -> Option<SpeciesId> {
        let s = ctx.lattice().site(site).ok()?;
        if !s.is_occupied() {
            return None;
        }
        s.label().filter(|label| self.reactants.contains_key(label))
    }

    fn paired_rules(&mut self, site: SiteId, ctx: &KineticContext<'_>) -> bool {
        let size = ctx.lattice().size();
        if self.partners.len() < size {
            self.partners.resize_with(size, IndexSet::new);
        }
        self.release(site);
        let Some(label) = self.reactant_label(site, ctx) else {
            return false;
        };
        if self.reactants.get(&label) != Some(&1) {
            return false;
        }
        let Ok(neighbours) = ctx.lattice().neighbours(site) else {
            return false;
        };

        let mut found: SmallVec<[SiteId; 4]> = SmallVec::new();
        for (&other, &coefficient) in &self.reactants {
            if other == label {
                continue;
            }
            let matches: SmallVec<[SiteId; 4]> = neighbours
                .iter()
                .copied()
                .filter(|&nb| {
                    ctx.lattice()
                        .site(nb)
                        .is_ok_and(|s| s.is_occupied() && s.label() == Some(other))
                })
                .collect();
            if matches.len() < coefficient as usize {
                return false;
            }
            found.extend(matches);
        }
        for partner in found {
            self.pair(site, partner);
        }
        true
    }

    fn perform_catalysis(
        &mut self,
        site: SiteId,
        ctx: &mut KineticContext<'_>,
    ) -> Result<AffectedSites, ProcessError> {
        consume(ctx, site)?;
        let mut affected = AffectedSites::new();
        affected.insert_with_neighbours(ctx.lattice(), site)?;
        Ok(affected)
    }

    fn perform_paired(
        &mut self,
        site: SiteId,
        ctx: &mut KineticContext<'_>,
    ) -> Result<AffectedSites, ProcessError> {
        let no_partner = || ProcessError::NoPartner {
            process: self.name.clone(),
            site,
        };
        let candidates = self
            .partners
            .get(site.index())
            .filter(|set| !set.is_empty())
            .ok_or_else(no_partner)?;
        let lucky = ctx.rng().uniform_int(0, candidates.len());
        let other = candidates
            .get_index(lucky)
            .copied()
            .ok_or_else(no_partner)?;

        consume(ctx, site)?;
        consume(ctx, other)?;

        let mut affected = AffectedSites::new();
        affected.insert_with_neighbours(ctx.lattice(), site)?;
        affected.insert_with_neighbours(ctx.lattice(), other)?;

        self.release(site);
        self.release(other);
        Ok(affected)
    }
}

/// Free `site` and expose its below label. Heights do not move, so
/// coordination classes stay valid.
fn consume(ctx: &mut KineticContext<'_>, site: SiteId) -> Result<(), ProcessError> {
    let s = ctx.lattice_mut().site_mut(site)?;
    s.set_occupied(false);
    s.set_label(s.below_label());
    Ok(())
}

impl ReactionBuilder {
    /// Add a reactant with its stoichiometric coefficient. Repeated
    /// names accumulate.
    pub fn reactant(mut self, species: impl Into<String>, coefficient: u32) -> Self {
        self.reactants.push((species.into(), coefficient));
        self
    }

    /// Append a product. Product order defines the transformation table.
    pub fn product(mut self, species: impl Into<String>) -> Self {
        self.products.push(species.into());
        self
    }

    /// Set the rate law.
    pub fn rate(mut self, law: RateLaw) -> Self {
        self.law = Some(law);
        self
    }

    /// Declare a growth species. A reaction consuming any growth species
    /// uses the paired strategy.
    pub fn growth_species(mut self, species: impl Into<String>) -> Self {
        self.growth.push(species.into());
        self
    }

    /// Resolve names, choose the strategy and evaluate the rate law.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingReactants`] / [`ConfigError::MissingProducts`]
    /// - [`ConfigError::UnknownSpecies`] for any unresolved name
    /// - [`ConfigError::InvalidRateParameter`] if no rate law is set
    /// - [`ConfigError::UnsupportedRateLaw`] for a Hertz–Knudsen law
    /// - [`ConfigError::UnsupportedStoichiometry`] for a zero coefficient
    ///   or a growth reaction outside the paired form
    pub fn build(
        self,
        species: &SpeciesTable,
        site_count: usize,
        conditions: &Conditions,
    ) -> Result<Reaction, ConfigError> {
        let name = self.name;
        if self.reactants.is_empty() {
            return Err(ConfigError::MissingReactants { process: name });
        }
        if self.products.is_empty() {
            return Err(ConfigError::MissingProducts { process: name });
        }

        let mut reactants: IndexMap<SpeciesId, u32> = IndexMap::new();
        for (reactant, coefficient) in &self.reactants {
            if *coefficient == 0 {
                return Err(ConfigError::UnsupportedStoichiometry { process: name });
            }
            *reactants.entry(species.resolve(reactant)?).or_insert(0) += coefficient;
        }
        let products = self
            .products
            .iter()
            .map(|p| species.resolve(p))
            .collect::<Result<Vec<_>, _>>()?;
        let growth = self
            .growth
            .iter()
            .map(|g| species.resolve(g))
            .collect::<Result<Vec<_>, _>>()?;

        let transformation = reactants
            .keys()
            .enumerate()
            .map(|(i, &r)| (r, products.get(i).copied()))
            .collect();

        let leads_to_growth = reactants.keys().any(|r| growth.contains(r));
        let strategy = if !leads_to_growth {
            ReactionStrategy::Catalysis
        } else if reactants.len() == 2
            && reactants.values().all(|&c| c == 1)
            && products.len() <= 2
        {
            ReactionStrategy::Paired
        } else {
            return Err(ConfigError::UnsupportedStoichiometry { process: name });
        };

        let law = self.law.ok_or_else(|| ConfigError::InvalidRateParameter {
            process: name.clone(),
            reason: "no rate law set".into(),
        })?;
        if let RateLaw::HertzKnudsen { .. } = law {
            return Err(ConfigError::UnsupportedRateLaw {
                process: name,
                keyword: "simple".into(),
            });
        }
        law.validate(&name)?;

        Ok(Reaction {
            name,
            reactants,
            transformation,
            strategy,
            probability: law.probability(site_count, conditions),
            partners: vec![IndexSet::new(); site_count],
        })
    }
}

impl Process for Reaction {
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
        match self.strategy {
            ReactionStrategy::Catalysis => self.reactant_label(site, ctx).is_some(),
            ReactionStrategy::Paired => self.paired_rules(site, ctx),
        }
    }

    fn perform(
        &mut self,
        site: SiteId,
        ctx: &mut KineticContext<'_>,
    ) -> Result<AffectedSites, ProcessError> {
        match self.strategy {
            ReactionStrategy::Catalysis => self.perform_catalysis(site, ctx),
            ReactionStrategy::Paired => self.perform_paired(site, ctx),
        }
    }
}
