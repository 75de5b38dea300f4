//! Periodic 4-neighbour topology construction over a row-major site arena.
//!
//! Sites are laid out row-major: `id = row * size_x + col`, with
//! `size_y` rows. Links are computed in two passes. Interior sites link
//! directly to `row ± 1` and `col ± 1`. Boundary sites (first and last
//! row and column, corners included) wrap to the opposite edge, which
//! makes the lattice a torus.

use crate::config::StepGeometry;
use strata_core::{Direction, Site, SiteId};

/// Allocate `size_x * size_y` unlinked sites at `height`.
pub fn allocate(size_x: u32, size_y: u32, height: i32) -> Vec<Site> {
    let n = size_x as usize * size_y as usize;
    (0..n).map(|i| Site::new(SiteId(i as u32), height)).collect()
}

/// Link every site to its four periodic neighbours.
///
/// Requires `size_x >= 2` and `size_y >= 2`; smaller sizes are rejected
/// by [`LatticeConfig::validate`](crate::LatticeConfig::validate).
pub fn link_periodic(sites: &mut [Site], size_x: u32, size_y: u32) {
    let nx = size_x as usize;
    let ny = size_y as usize;
    debug_assert_eq!(sites.len(), nx * ny);

    // Interior: no wrap needed.
    for row in 1..ny.saturating_sub(1) {
        for col in 1..nx.saturating_sub(1) {
            link(
                sites,
                nx,
                (row, col),
                [(row - 1, col), (row + 1, col), (row, col + 1), (row, col - 1)],
            );
        }
    }

    for (row, col) in boundary(nx, ny) {
        link(
            sites,
            nx,
            (row, col),
            [
                (wrap_dec(row, ny), col),
                (wrap_inc(row, ny), col),
                (row, wrap_inc(col, nx)),
                (row, wrap_dec(col, nx)),
            ],
        );
    }
}

/// Raise each terrace of a stepped surface.
pub fn apply_steps(sites: &mut [Site], size_x: u32, steps: StepGeometry) {
    for site in sites.iter_mut() {
        let col = site.id().0 % size_x;
        let offset = steps.offset(col, size_x);
        site.set_height(site.height() + offset);
    }
}

/// Cells on the outer ring: first and last row, then first and last
/// column of the rows in between.
fn boundary(nx: usize, ny: usize) -> impl Iterator<Item = (usize, usize)> {
    let rows = [0, ny - 1]
        .into_iter()
        .flat_map(move |row| (0..nx).map(move |col| (row, col)));
    let cols = (1..ny - 1).flat_map(move |row| [(row, 0), (row, nx - 1)]);
    rows.chain(cols)
}

fn wrap_dec(v: usize, n: usize) -> usize {
    if v == 0 {
        n - 1
    } else {
        v - 1
    }
}

fn wrap_inc(v: usize, n: usize) -> usize {
    if v + 1 == n {
        0
    } else {
        v + 1
    }
}

/// Neighbours given in N, S, E, W order.
fn link(sites: &mut [Site], nx: usize, at: (usize, usize), nbrs: [(usize, usize); 4]) {
    let idx = |(r, c): (usize, usize)| r * nx + c;
    let site = &mut sites[idx(at)];
    for (dir, nb) in Direction::ALL.into_iter().zip(nbrs) {
        site.set_neighbour(dir, SiteId(idx(nb) as u32));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(x: u32, y: u32) -> Vec<Site> {
        let mut sites = allocate(x, y, 0);
        link_periodic(&mut sites, x, y);
        sites
    }

    fn nb(sites: &[Site], id: u32, dir: Direction) -> u32 {
        sites[id as usize].neighbour(dir).unwrap().0
    }

    #[test]
    fn boundary_visits_each_ring_cell_once() {
        let ring: Vec<_> = boundary(4, 3).collect();
        // 2 full rows of 4 + 1 middle row with 2 ends.
        assert_eq!(ring.len(), 10);
        let mut sorted = ring.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ring.len());
    }

    #[test]
    fn corners_wrap_on_both_axes() {
        let s = built(4, 4);
        // Top-left.
        assert_eq!(nb(&s, 0, Direction::North), 12);
        assert_eq!(nb(&s, 0, Direction::West), 3);
        // Top-right.
        assert_eq!(nb(&s, 3, Direction::North), 15);
        assert_eq!(nb(&s, 3, Direction::East), 0);
        // Bottom-left.
        assert_eq!(nb(&s, 12, Direction::South), 0);
        assert_eq!(nb(&s, 12, Direction::West), 15);
        // Bottom-right.
        assert_eq!(nb(&s, 15, Direction::South), 3);
        assert_eq!(nb(&s, 15, Direction::East), 12);
    }

    #[test]
    fn edges_wrap_on_one_axis() {
        let s = built(5, 3);
        // Middle of first row.
        assert_eq!(nb(&s, 2, Direction::North), 12);
        assert_eq!(nb(&s, 2, Direction::South), 7);
        assert_eq!(nb(&s, 2, Direction::East), 3);
        assert_eq!(nb(&s, 2, Direction::West), 1);
        // Last column, middle row.
        assert_eq!(nb(&s, 9, Direction::East), 5);
        assert_eq!(nb(&s, 9, Direction::West), 8);
    }

    #[test]
    fn two_by_two_links_both_ways_to_same_site() {
        let s = built(2, 2);
        assert_eq!(nb(&s, 0, Direction::North), 2);
        assert_eq!(nb(&s, 0, Direction::South), 2);
        assert_eq!(nb(&s, 0, Direction::East), 1);
        assert_eq!(nb(&s, 0, Direction::West), 1);
    }

    #[test]
    fn steps_raise_terraces() {
        let mut s = allocate(6, 2, 4);
        apply_steps(
            &mut s,
            6,
            StepGeometry {
                steps: 3,
                step_height: 2,
            },
        );
        let heights: Vec<_> = s.iter().map(Site::height).collect();
        assert_eq!(heights, vec![4, 4, 6, 6, 8, 8, 4, 4, 6, 6, 8, 8]);
    }
}
