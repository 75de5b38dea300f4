//! Lattice trait compliance test helpers.
//!
//! These functions verify that a Lattice implementation satisfies the
//! invariants every process relies on. Reused across backend test modules.

use crate::lattice::Lattice;
use indexmap::IndexSet;
use strata_core::{Direction, SiteId};

/// Assert that ids are the row-major arena indices.
pub fn assert_ids_row_major(lattice: &dyn Lattice) {
    for (i, site) in lattice.sites().iter().enumerate() {
        assert_eq!(site.id(), SiteId(i as u32), "site at index {i} has id {}", site.id());
    }
}

/// Assert that `size()` equals `size_x * size_y` and ids are unique.
pub fn assert_size_matches_dimensions(lattice: &dyn Lattice) {
    let expected = lattice.size_x() as usize * lattice.size_y() as usize;
    assert_eq!(lattice.size(), expected, "size() != size_x * size_y");
    let unique: IndexSet<_> = lattice.sites().iter().map(|s| s.id()).collect();
    assert_eq!(unique.len(), expected, "duplicate site ids");
}

/// Assert that every site has exactly four neighbour links.
pub fn assert_four_links(lattice: &dyn Lattice) {
    for site in lattice.sites() {
        assert_eq!(
            site.neighbour_count(),
            4,
            "site {} has {} links",
            site.id(),
            site.neighbour_count()
        );
    }
}

/// Assert that following a link and then its opposite returns home.
pub fn assert_links_reciprocal(lattice: &dyn Lattice) {
    for site in lattice.sites() {
        for dir in Direction::ALL {
            let nb = lattice.neighbour(site.id(), dir).expect("link present");
            let back = lattice
                .neighbour(nb, dir.opposite())
                .expect("reverse link present");
            assert_eq!(
                back,
                site.id(),
                "{dir:?} of {} is {nb}, but {:?} of {nb} is {back}",
                site.id(),
                dir.opposite()
            );
        }
    }
}

/// Assert that no site is its own neighbour (holds for sizes >= 2).
pub fn assert_no_self_links(lattice: &dyn Lattice) {
    for site in lattice.sites() {
        assert!(
            site.neighbours().all(|nb| nb != site.id()),
            "site {} links to itself",
            site.id()
        );
    }
}

/// Assert that a flat lattice gives every site the maximum coordination.
pub fn assert_flat_coordination(lattice: &dyn Lattice) {
    let h = lattice.sites()[0].height();
    if lattice.sites().iter().any(|s| s.height() != h) {
        return;
    }
    for site in lattice.sites() {
        assert_eq!(lattice.coordination(site.id()).unwrap(), 5);
    }
}

/// Run all compliance checks on a lattice.
pub fn run_full_compliance(lattice: &dyn Lattice) {
    assert_ids_row_major(lattice);
    assert_size_matches_dimensions(lattice);
    assert_four_links(lattice);
    assert_links_reciprocal(lattice);
    assert_no_self_links(lattice);
    assert_flat_coordination(lattice);
    assert!(lattice.check().is_ok());
}
