//! The kinetic Monte Carlo event loop.
//!
//! Selection is two-stage: a process is drawn with probability
//! proportional to its propensity `probability() * |class|`, then a site
//! is drawn uniformly from that process's class. The chosen event's rule
//! is re-checked before performing it; a rule that no longer holds
//! yields a null event rather than an error.

use crate::error::KineticsError;
use smallvec::SmallVec;
use strata_core::{
    coordination_class, ClassRegistry, ConfigError, RandomSource, RegistryError, SiteId,
};
use strata_core::{DESORPTION, DIFFUSION};
use strata_lattice::{Lattice, LatticeConfig};
use strata_process::{AffectedSites, KineticContext, Membership, Process, ProcessError};

/// Highest coordination class registered for each family.
const COORDINATION_FAMILY_SIZE: usize = 5;

/// A selected (process, site) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    /// Index into [`Kinetics::processes`].
    pub process: usize,
    /// Site the process fires on.
    pub site: SiteId,
}

/// Owner of the full kinetic state.
///
/// Invariants held between calls:
/// - every site sits in exactly one `Desorption {n}N` and one
///   `Diffusion {n}N` class, for its current coordination `n`
/// - every rule-driven class holds the sites whose rule held at their
///   last re-evaluation
pub struct Kinetics<R: RandomSource> {
    lattice: Box<dyn Lattice>,
    registry: ClassRegistry,
    processes: Vec<Box<dyn Process>>,
    rule_driven: SmallVec<[usize; 8]>,
    rng: R,
    events: u64,
    null_events: u64,
}

impl<R: RandomSource> Kinetics<R> {
    /// Assemble a run.
    ///
    /// Registers every process class plus the complete coordination
    /// families, classifies every site, and seeds every rule-driven class
    /// by evaluating its rule on every site.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DuplicateClass`] if two processes share a name
    /// - [`KineticsError::Lattice`] if seeding hits a broken link
    pub fn new(
        lattice: Box<dyn Lattice>,
        processes: Vec<Box<dyn Process>>,
        rng: R,
    ) -> Result<Self, KineticsError> {
        let mut registry = ClassRegistry::new();
        for p in &processes {
            if !registry.register(p.name()) {
                return Err(ConfigError::DuplicateClass {
                    name: p.name().to_string(),
                }
                .into());
            }
        }
        for family in [DESORPTION, DIFFUSION] {
            for n in 1..=COORDINATION_FAMILY_SIZE {
                registry.register(coordination_class(family, n));
            }
        }

        let rule_driven = processes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.membership() == Membership::Rules)
            .map(|(i, _)| i)
            .collect();

        let mut kinetics = Self {
            lattice,
            registry,
            processes,
            rule_driven,
            rng,
            events: 0,
            null_events: 0,
        };

        let all: Vec<SiteId> = kinetics.lattice.sites().iter().map(|s| s.id()).collect();
        for &site in &all {
            kinetics.lattice.classify(site, &mut kinetics.registry)?;
        }
        kinetics.evaluate_rules(&all)?;

        log::debug!(
            "kinetics ready: {} sites, {} processes ({} rule-driven), total propensity {:e}",
            kinetics.lattice.size(),
            kinetics.processes.len(),
            kinetics.rule_driven.len(),
            kinetics.total_propensity(),
        );
        Ok(kinetics)
    }

    /// Validate `config`, build its lattice, and assemble a run.
    pub fn from_config(
        config: &LatticeConfig,
        processes: Vec<Box<dyn Process>>,
        rng: R,
    ) -> Result<Self, KineticsError> {
        let lattice = strata_lattice::build(config)?;
        Self::new(lattice, processes, rng)
    }

    /// Current propensity of process `index`: `probability() * |class|`.
    ///
    /// A constant rate law already folds the lattice size into
    /// `probability()`, so a process whose class spans the whole surface
    /// (plain deposition) scales with the square of the site count. That
    /// is the intended weighting, not a double count.
    pub fn propensity(&self, index: usize) -> f64 {
        let Some(p) = self.processes.get(index) else {
            return 0.0;
        };
        let members = self.registry.len(p.name()).unwrap_or(0);
        p.probability() * members as f64
    }

    /// Sum of all process propensities.
    pub fn total_propensity(&self) -> f64 {
        (0..self.processes.len()).map(|i| self.propensity(i)).sum()
    }

    /// Draw the next event, or `None` if no process has an eligible site.
    pub fn select(&mut self) -> Result<Option<Event>, ProcessError> {
        let weights: Vec<f64> = (0..self.processes.len())
            .map(|i| self.propensity(i))
            .collect();
        let total: f64 = weights.iter().sum();
        if total.is_nan() || total <= 0.0 {
            return Ok(None);
        }

        let target = self.rng.uniform_real() * total;
        let mut cumulative = 0.0;
        let mut chosen = None;
        for (i, &w) in weights.iter().enumerate() {
            if w <= 0.0 {
                continue;
            }
            chosen = Some(i);
            cumulative += w;
            if target < cumulative {
                break;
            }
        }
        let Some(process) = chosen else {
            return Ok(None);
        };

        let name = self.processes[process].name();
        let site = self.registry.pick(name, &mut self.rng)?;
        Ok(site.map(|site| Event { process, site }))
    }

    /// Re-check and apply `event`.
    ///
    /// Returns `Ok(None)` for a null event: the rule no longer holds. The
    /// site is then dropped from a rule-driven class. Otherwise returns
    /// the affected sites after re-classification.
    pub fn execute(&mut self, event: Event) -> Result<Option<AffectedSites>, ProcessError> {
        let Some(process) = self.processes.get_mut(event.process) else {
            log::warn!("event names process #{} of {}", event.process, self.processes.len());
            return Ok(None);
        };

        let mut ctx = KineticContext::new(&mut *self.lattice, &mut self.registry, &mut self.rng);
        if !process.rules(event.site, &ctx) {
            if process.membership() == Membership::Rules {
                ctx.registry_mut()
                    .remove_from_class(process.name(), event.site)?;
            }
            self.null_events += 1;
            log::trace!("null event: {} at {}", process.name(), event.site);
            return Ok(None);
        }

        let affected = process.perform(event.site, &mut ctx)?;
        log::trace!(
            "{} at {} ({} sites affected)",
            process.name(),
            event.site,
            affected.len()
        );
        self.refresh(&affected)?;
        self.events += 1;
        Ok(Some(affected))
    }

    /// [`select`](Self::select) then [`execute`](Self::execute).
    ///
    /// `Ok(None)` covers both an exhausted system and a null event; use
    /// [`total_propensity`](Self::total_propensity) to tell them apart.
    pub fn step(&mut self) -> Result<Option<AffectedSites>, ProcessError> {
        match self.select()? {
            Some(event) => self.execute(event),
            None => Ok(None),
        }
    }

    /// Re-derive the classification of every affected site.
    fn refresh(&mut self, affected: &AffectedSites) -> Result<(), ProcessError> {
        for site in affected.iter() {
            self.lattice.classify(site, &mut self.registry)?;
        }
        let sites: SmallVec<[SiteId; 10]> = affected.iter().collect();
        self.evaluate_rules(&sites)?;
        Ok(())
    }

    /// Evaluate every rule-driven process on `sites` and update its class.
    fn evaluate_rules(&mut self, sites: &[SiteId]) -> Result<(), RegistryError> {
        for &index in &self.rule_driven {
            let process = &mut self.processes[index];
            for &site in sites {
                let holds = {
                    let ctx =
                        KineticContext::new(&mut *self.lattice, &mut self.registry, &mut self.rng);
                    process.rules(site, &ctx)
                };
                if holds {
                    self.registry.add_to_class(process.name(), site)?;
                } else {
                    self.registry.remove_from_class(process.name(), site)?;
                }
            }
        }
        Ok(())
    }

    /// The lattice.
    pub fn lattice(&self) -> &dyn Lattice {
        &*self.lattice
    }

    /// The class registry.
    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    /// The process set, in construction order.
    pub fn processes(&self) -> &[Box<dyn Process>] {
        &self.processes
    }

    /// Number of performed events.
    pub fn events(&self) -> u64 {
        self.events
    }

    /// Number of selected events whose rule no longer held.
    pub fn null_events(&self) -> u64 {
        self.null_events
    }
}

impl<R: RandomSource> std::fmt::Debug for Kinetics<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kinetics")
            .field("sites", &self.lattice.size())
            .field("processes", &self.processes.len())
            .field("events", &self.events)
            .field("null_events", &self.null_events)
            .finish()
    }
}
