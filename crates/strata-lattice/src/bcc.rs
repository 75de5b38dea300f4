//! BCC(100) surface lattice.

use crate::config::{LatticeConfig, MIN_INITIAL_HEIGHT};
use crate::kind::LatticeKind;
use crate::lattice::Lattice;
use crate::topology;
use strata_core::{ConfigError, Site};

/// A body-centred cubic (100) surface seen from above.
///
/// Each column is one site; columns form a `size_x * size_y` periodic
/// square array with four in-plane neighbours. Sites start at
/// `initial_height - 1`, optionally raised into terraces.
///
/// # Examples
///
/// ```
/// use strata_core::{Direction, SiteId};
/// use strata_lattice::{Bcc, Lattice, LatticeConfig, LatticeKind};
///
/// let lattice = Bcc::build(&LatticeConfig::new(LatticeKind::Bcc, 4, 4, 5)).unwrap();
/// assert_eq!(lattice.size(), 16);
/// assert_eq!(lattice.neighbour(SiteId(0), Direction::North).unwrap(), SiteId(12));
/// assert_eq!(lattice.neighbour(SiteId(0), Direction::West).unwrap(), SiteId(3));
/// ```
#[derive(Clone, Debug)]
pub struct Bcc {
    size_x: u32,
    size_y: u32,
    initial_height: i32,
    sites: Vec<Site>,
}

impl Lattice for Bcc {
    fn build(config: &LatticeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if config.kind != Some(LatticeKind::Bcc) {
            return Err(ConfigError::UnknownLatticeKind {
                name: format!("{:?}", config.kind),
            });
        }
        if config.initial_height < MIN_INITIAL_HEIGHT {
            log::warn!(
                "lattice initial height {} is below {MIN_INITIAL_HEIGHT}; consider revising",
                config.initial_height
            );
        }

        let mut sites = topology::allocate(config.size_x, config.size_y, config.initial_height - 1);
        if let Some(steps) = config.steps {
            topology::apply_steps(&mut sites, config.size_x, steps);
            log::debug!(
                "stepped surface: {} terraces, step height {}",
                steps.steps,
                steps.step_height
            );
        }
        topology::link_periodic(&mut sites, config.size_x, config.size_y);

        log::debug!(
            "built BCC lattice {}x{} ({} sites), initial height {}",
            config.size_x,
            config.size_y,
            sites.len(),
            config.initial_height
        );

        Ok(Self {
            size_x: config.size_x,
            size_y: config.size_y,
            initial_height: config.initial_height,
            sites,
        })
    }

    fn kind(&self) -> LatticeKind {
        LatticeKind::Bcc
    }

    fn size_x(&self) -> u32 {
        self.size_x
    }

    fn size_y(&self) -> u32 {
        self.size_y
    }

    fn initial_height(&self) -> i32 {
        self.initial_height
    }

    fn sites(&self) -> &[Site] {
        &self.sites
    }

    fn sites_mut(&mut self) -> &mut [Site] {
        &mut self.sites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::LatticeError;
    use proptest::prelude::*;
    use strata_core::{ClassRegistry, Direction, SiteId, SpeciesId};

    fn bcc(x: u32, y: u32, h: i32) -> Bcc {
        Bcc::build(&LatticeConfig::new(LatticeKind::Bcc, x, y, h)).unwrap()
    }

    fn coordination_registry() -> ClassRegistry {
        let mut r = ClassRegistry::new();
        r.register("Adsorption");
        for n in 1..=5 {
            r.register(format!("Desorption {n}N"));
            r.register(format!("Diffusion {n}N"));
        }
        r
    }

    /// Records warnings emitted on the current thread.
    struct WarnCapture;

    thread_local! {
        static WARNINGS: std::cell::RefCell<Vec<String>> = const { std::cell::RefCell::new(Vec::new()) };
    }

    impl log::Log for WarnCapture {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record<'_>) {
            if self.enabled(record.metadata()) {
                WARNINGS.with(|w| w.borrow_mut().push(record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: WarnCapture = WarnCapture;

    /// Warnings logged on this thread while running `f`.
    fn warnings_during(f: impl FnOnce()) -> Vec<String> {
        // Installed once per test binary; later calls fail harmlessly.
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Warn);
        WARNINGS.with(|w| w.borrow_mut().clear());
        f();
        WARNINGS.with(|w| std::mem::take(&mut *w.borrow_mut()))
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn build_four_by_four() {
        let l = bcc(4, 4, 5);
        assert_eq!(l.size(), 16);
        assert!(l.sites().iter().all(|s| s.height() == 4));
        for (i, s) in l.sites().iter().enumerate() {
            assert_eq!(s.id(), SiteId(i as u32));
        }
    }

    #[test]
    fn interior_probe() {
        let l = bcc(4, 4, 5);
        let id = SiteId(5);
        assert_eq!(l.neighbour(id, Direction::North).unwrap(), SiteId(1));
        assert_eq!(l.neighbour(id, Direction::South).unwrap(), SiteId(9));
        assert_eq!(l.neighbour(id, Direction::West).unwrap(), SiteId(4));
        assert_eq!(l.neighbour(id, Direction::East).unwrap(), SiteId(6));
    }

    #[test]
    fn rejects_degenerate_sizes() {
        let one = LatticeConfig::new(LatticeKind::Bcc, 1, 8, 5);
        assert!(matches!(
            Bcc::build(&one),
            Err(ConfigError::DegenerateDimension { .. })
        ));
        let zero = LatticeConfig::new(LatticeKind::Bcc, 8, 0, 5);
        assert!(matches!(
            Bcc::build(&zero),
            Err(ConfigError::EmptyLattice { .. })
        ));
    }

    #[test]
    fn small_initial_height_still_builds() {
        let mut built = None;
        let warnings = warnings_during(|| built = Some(bcc(3, 3, 2)));
        let l = built.unwrap();
        assert!(l.sites().iter().all(|s| s.height() == 1));
        assert_eq!(warnings.len(), 1, "{warnings:?}");
        assert!(warnings[0].contains("initial height 2 is below 5"));
    }

    #[test]
    fn regular_initial_height_is_quiet() {
        assert!(warnings_during(|| {
            bcc(3, 3, MIN_INITIAL_HEIGHT);
        })
        .is_empty());
    }

    #[test]
    fn stepped_build() {
        let cfg = LatticeConfig::new(LatticeKind::Bcc, 4, 2, 5).with_steps(2, 1);
        let l = Bcc::build(&cfg).unwrap();
        let heights: Vec<_> = l.sites().iter().map(Site::height).collect();
        assert_eq!(heights, vec![4, 4, 5, 5, 4, 4, 5, 5]);
    }

    #[test]
    fn out_of_range_lookup() {
        let l = bcc(3, 3, 5);
        assert_eq!(
            l.site(SiteId(9)).unwrap_err(),
            LatticeError::SiteOutOfRange {
                site: SiteId(9),
                size: 9
            }
        );
    }

    // ── Mutations ───────────────────────────────────────────────

    #[test]
    fn adsorb_reclassifies_by_coordination() {
        let mut l = bcc(4, 4, 5);
        let mut r = coordination_registry();
        let id = SiteId(5);
        r.add_to_class("Adsorption", id).unwrap();
        l.classify(id, &mut r).unwrap();
        assert_eq!(r.classes_for(id), vec!["Adsorption", "Desorption 5N", "Diffusion 5N"]);

        l.adsorb(id, None, &mut r).unwrap();
        assert_eq!(l.site(id).unwrap().height(), 5);
        // All four neighbours are now lower.
        assert_eq!(r.classes_for(id), vec!["Adsorption", "Desorption 1N", "Diffusion 1N"]);
    }

    #[test]
    fn adsorb_with_species_occupies() {
        let mut l = bcc(3, 3, 5);
        let mut r = coordination_registry();
        let a = SpeciesId(0);
        l.adsorb(SiteId(4), Some(a), &mut r).unwrap();
        let s = l.site(SiteId(4)).unwrap();
        assert!(s.is_occupied());
        assert_eq!(s.label(), Some(a));
        assert_eq!(s.below_label(), None);
    }

    #[test]
    fn desorb_frees_and_reverts_label() {
        let mut l = bcc(3, 3, 5);
        let mut r = coordination_registry();
        l.adsorb(SiteId(4), Some(SpeciesId(2)), &mut r).unwrap();
        l.desorb(SiteId(4), &mut r).unwrap();
        let s = l.site(SiteId(4)).unwrap();
        assert_eq!(s.height(), 4);
        assert!(!s.is_occupied());
        assert_eq!(s.label(), None);
        assert_eq!(r.classes_for(SiteId(4)), vec!["Desorption 5N", "Diffusion 5N"]);
    }

    #[test]
    fn react_incorporates_species() {
        let mut l = bcc(3, 3, 5);
        let mut r = coordination_registry();
        let sp = SpeciesId(1);
        l.adsorb(SiteId(0), Some(sp), &mut r).unwrap();
        l.react(SiteId(0), &mut r).unwrap();
        let s = l.site(SiteId(0)).unwrap();
        assert_eq!(s.height(), 6);
        assert!(!s.is_occupied());
        assert_eq!(s.label(), Some(sp));
        assert_eq!(s.below_label(), Some(sp));
        assert_eq!(r.classes_for(SiteId(0)), vec!["Desorption 1N", "Diffusion 1N"]);
    }

    #[test]
    fn classify_with_missing_class_fails() {
        let l = bcc(3, 3, 5);
        let mut r = ClassRegistry::new();
        r.register("Desorption 5N");
        assert!(matches!(
            l.classify(SiteId(0), &mut r),
            Err(LatticeError::Registry(_))
        ));
    }

    #[test]
    fn check_passes_after_build() {
        assert!(bcc(5, 3, 5).check().is_ok());
    }

    // ── Compliance ──────────────────────────────────────────────

    #[test]
    fn compliance_square() {
        compliance::run_full_compliance(&bcc(6, 6, 5));
    }

    #[test]
    fn compliance_rectangular() {
        compliance::run_full_compliance(&bcc(7, 3, 5));
    }

    #[test]
    fn compliance_minimal() {
        compliance::run_full_compliance(&bcc(2, 2, 5));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn links_round_trip(x in 2u32..12, y in 2u32..12) {
            let l = bcc(x, y, 5);
            for site in l.sites() {
                for dir in Direction::ALL {
                    let nb = l.neighbour(site.id(), dir).unwrap();
                    prop_assert_eq!(l.neighbour(nb, dir.opposite()).unwrap(), site.id());
                }
            }
        }

        #[test]
        fn coordination_stays_in_range(
            x in 2u32..8,
            y in 2u32..8,
            ops in proptest::collection::vec((0u32..64, any::<bool>()), 0..64),
        ) {
            let mut l = bcc(x, y, 5);
            let mut r = coordination_registry();
            let n = l.size() as u32;
            for (raw, up) in ops {
                let id = SiteId(raw % n);
                if up {
                    l.adsorb(id, None, &mut r).unwrap();
                } else {
                    l.desorb(id, &mut r).unwrap();
                }
                let c = l.coordination(id).unwrap();
                prop_assert!((1..=5).contains(&c));
            }
        }
    }
}
