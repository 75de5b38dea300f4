//! The [`Lattice`] trait: site lookup, adjacency, and the three
//! height-changing mutations.

use crate::config::LatticeConfig;
use crate::error::LatticeError;
use crate::kind::LatticeKind;
use smallvec::SmallVec;
use strata_core::{
    coordination_class, ClassRegistry, ConfigError, Direction, Site, SiteId, SpeciesId,
    ADSORPTION_PREFIX, DESORPTION, DIFFUSION,
};

/// Central lattice abstraction.
///
/// A lattice owns every [`Site`] in one contiguous arena addressed by
/// [`SiteId`]. Adjacency is fixed at build time; only site content
/// (height, occupancy, labels) changes during a run.
///
/// Backends supply storage and dimensions. Lookup, adjacency queries
/// and the `adsorb` / `desorb` / `react` mutations are shared default
/// methods, so every geometry honours the same reclassification contract.
///
/// # Object safety
///
/// Designed for use as `dyn Lattice`; [`build`](Self::build) is excluded
/// from the vtable.
pub trait Lattice: Send + Sync + 'static {
    /// Construct and link the lattice from a validated configuration.
    fn build(config: &LatticeConfig) -> Result<Self, ConfigError>
    where
        Self: Sized;

    /// Geometry tag.
    fn kind(&self) -> LatticeKind;

    /// Number of columns.
    fn size_x(&self) -> u32;

    /// Number of rows.
    fn size_y(&self) -> u32;

    /// Configured initial height (sites start one below it).
    fn initial_height(&self) -> i32;

    /// All sites in id order.
    fn sites(&self) -> &[Site];

    /// Mutable access to site content.
    fn sites_mut(&mut self) -> &mut [Site];

    /// Total number of sites.
    fn size(&self) -> usize {
        self.sites().len()
    }

    /// Look up a site.
    fn site(&self, id: SiteId) -> Result<&Site, LatticeError> {
        let size = self.size();
        self.sites()
            .get(id.index())
            .ok_or(LatticeError::SiteOutOfRange { site: id, size })
    }

    /// Look up a site mutably.
    fn site_mut(&mut self, id: SiteId) -> Result<&mut Site, LatticeError> {
        let size = self.size();
        self.sites_mut()
            .get_mut(id.index())
            .ok_or(LatticeError::SiteOutOfRange { site: id, size })
    }

    /// Neighbour of `id` in direction `dir`.
    fn neighbour(&self, id: SiteId, dir: Direction) -> Result<SiteId, LatticeError> {
        self.site(id)?
            .neighbour(dir)
            .ok_or(LatticeError::BrokenLink { site: id, dir })
    }

    /// The four neighbours of `id` in N, S, E, W order.
    fn neighbours(&self, id: SiteId) -> Result<SmallVec<[SiteId; 4]>, LatticeError> {
        Ok(self.site(id)?.neighbours().collect())
    }

    /// Local coordination: `1 +` the number of neighbours whose column
    /// is at least as tall as this one.
    fn coordination(&self, id: SiteId) -> Result<usize, LatticeError> {
        let site = self.site(id)?;
        let mut neighs = 1;
        for nb in site.neighbours() {
            if self.site(nb)?.height() >= site.height() {
                neighs += 1;
            }
        }
        Ok(neighs)
    }

    /// Re-derive the coordination classes of `id`.
    ///
    /// Purges the site from every non-adsorption class, then inserts it
    /// into `"Desorption {n}N"` and `"Diffusion {n}N"` for its current
    /// coordination `n`. Both classes must be registered.
    fn classify(&self, id: SiteId, registry: &mut ClassRegistry) -> Result<(), LatticeError> {
        let neighs = self.coordination(id)?;
        registry.remove_from_all_except(id, ADSORPTION_PREFIX);
        registry.add_to_class(&coordination_class(DESORPTION, neighs), id)?;
        registry.add_to_class(&coordination_class(DIFFUSION, neighs), id)?;
        Ok(())
    }

    /// Deposit one unit on `id`.
    ///
    /// The column grows by one layer. With a species, the current label
    /// becomes the below label and the site is occupied by `species`.
    /// Without one (physical vapour deposition) only the height changes.
    fn adsorb(
        &mut self,
        id: SiteId,
        species: Option<SpeciesId>,
        registry: &mut ClassRegistry,
    ) -> Result<(), LatticeError> {
        let site = self.site_mut(id)?;
        site.increase_height();
        if let Some(species) = species {
            site.set_below_label(site.label());
            site.set_label(Some(species));
            site.set_occupied(true);
        }
        self.classify(id, registry)
    }

    /// Remove one unit from `id`.
    ///
    /// The column shrinks by one layer; an occupied site is freed and
    /// exposes its below label.
    fn desorb(&mut self, id: SiteId, registry: &mut ClassRegistry) -> Result<(), LatticeError> {
        let site = self.site_mut(id)?;
        site.decrease_height();
        if site.is_occupied() {
            site.set_occupied(false);
            site.set_label(site.below_label());
        }
        self.classify(id, registry)
    }

    /// Incorporate the species on top of `id` into the film.
    ///
    /// The column grows by one layer, the current label becomes the
    /// surface material (below label and label), and the site is freed.
    fn react(&mut self, id: SiteId, registry: &mut ClassRegistry) -> Result<(), LatticeError> {
        let site = self.site_mut(id)?;
        site.increase_height();
        let incorporated = site.label();
        site.set_below_label(incorporated);
        site.set_label(incorporated);
        site.set_occupied(false);
        self.classify(id, registry)
    }

    /// Verify that every site has four links and every link is reciprocal.
    fn check(&self) -> Result<(), LatticeError> {
        for site in self.sites() {
            for dir in Direction::ALL {
                let nb = self.neighbour(site.id(), dir)?;
                if self.neighbour(nb, dir.opposite())? != site.id() {
                    return Err(LatticeError::BrokenLink {
                        site: site.id(),
                        dir,
                    });
                }
            }
        }
        Ok(())
    }
}
