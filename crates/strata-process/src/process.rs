//! The [`Process`] trait and [`Membership`] policy.
//!
//! One process object exists per process class (e.g. `"Desorption 3N"`).
//! The engine sums `probability() * |class|` over all processes into the
//! total propensity, picks a class by weight, picks a uniform site inside
//! it, confirms it with `rules`, and applies `perform`.

use crate::affected::AffectedSites;
use crate::context::KineticContext;
use crate::error::ProcessError;
use strata_core::SiteId;

/// How a process's class membership is maintained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Membership {
    /// Maintained by [`Lattice::classify`](strata_lattice::Lattice::classify)
    /// from the site's coordination. The class name must be a
    /// `"Desorption {n}N"` or `"Diffusion {n}N"` name.
    Coordination,
    /// Maintained by the engine, which re-evaluates [`Process::rules`] on
    /// every affected site after each event.
    Rules,
}

/// An elementary kinetic process (adsorption, desorption, diffusion, reaction).
///
/// # Contract
///
/// - `name()` is the registry class the process draws sites from. It is
///   unique within a process set.
/// - `rules()` is a pure applicability check as far as the lattice is
///   concerned. Returning `false` is normal control flow, never an error.
///   Reactions may update their own partner bookkeeping here.
/// - `perform()` may assume `rules()` returned `true` for the same site
///   with no intervening mutation. It returns every site whose
///   classification may have changed.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores processes as
/// `Vec<Box<dyn Process>>`.
///
/// # Examples
///
/// A process that flips nothing and is always applicable:
///
/// ```
/// use strata_core::SiteId;
/// use strata_process::{AffectedSites, KineticContext, Membership, Process, ProcessError};
///
/// struct Idle;
///
/// impl Process for Idle {
///     fn name(&self) -> &str { "Idle" }
///     fn membership(&self) -> Membership { Membership::Rules }
///     fn probability(&self) -> f64 { 0.0 }
///     fn rules(&mut self, _site: SiteId, _ctx: &KineticContext<'_>) -> bool { true }
///     fn perform(
///         &mut self,
///         site: SiteId,
///         _ctx: &mut KineticContext<'_>,
///     ) -> Result<AffectedSites, ProcessError> {
///         let mut affected = AffectedSites::new();
///         affected.insert(site);
///         Ok(affected)
///     }
/// }
///
/// assert_eq!(Idle.name(), "Idle");
/// ```
pub trait Process: Send + 'static {
    /// Class name, also used in error reports.
    fn name(&self) -> &str;

    /// Who keeps this process's class up to date.
    fn membership(&self) -> Membership;

    /// Per-site rate (propensity weight) of this process.
    fn probability(&self) -> f64;

    /// Whether the process can fire at `site` right now.
    fn rules(&mut self, site: SiteId, ctx: &KineticContext<'_>) -> bool;

    /// Apply the process at `site`.
    fn perform(
        &mut self,
        site: SiteId,
        ctx: &mut KineticContext<'_>,
    ) -> Result<AffectedSites, ProcessError>;
}
