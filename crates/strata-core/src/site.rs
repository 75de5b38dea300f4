//! The [`Site`] state unit and the four lattice [`Direction`]s.

use crate::id::{SiteId, SpeciesId};

/// Cardinal direction of a neighbour link.
///
/// `North` points to the previous row, `South` to the next row, `West`
/// to the previous column and `East` to the next column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Previous row.
    North,
    /// Next row.
    South,
    /// Next column.
    East,
    /// Previous column.
    West,
}

impl Direction {
    /// All directions in canonical order (N, S, E, W).
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The direction pointing back along the same link.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }
}

/// One lattice column: a stack of deposited material of integer height,
/// optionally topped by a reactive species.
///
/// Sites carry no behaviour beyond accessors and mutators. Lattices and
/// processes operate *on* them. Neighbour links are plain [`SiteId`]s into
/// the owning lattice's arena; they are written once by the lattice
/// builder and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Site {
    id: SiteId,
    height: i32,
    occupied: bool,
    label: Option<SpeciesId>,
    below_label: Option<SpeciesId>,
    neighbours: [Option<SiteId>; 4],
}

impl Site {
    /// A bare, unoccupied site with no neighbour links yet.
    pub fn new(id: SiteId, height: i32) -> Self {
        Self {
            id,
            height,
            occupied: false,
            label: None,
            below_label: None,
            neighbours: [None; 4],
        }
    }

    /// Stable identifier (row-major arena index).
    pub fn id(&self) -> SiteId {
        self.id
    }

    /// Current column height.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Overwrite the column height. Used by lattice builders for stepped
    /// surfaces.
    pub fn set_height(&mut self, height: i32) {
        self.height = height;
    }

    /// Add one layer.
    pub fn increase_height(&mut self) {
        self.height += 1;
    }

    /// Remove one layer.
    pub fn decrease_height(&mut self) {
        self.height -= 1;
    }

    /// Whether a reactive species currently sits on top of the column.
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Mark the site occupied or free.
    pub fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }

    /// Species currently on top, `None` for bare surface material.
    pub fn label(&self) -> Option<SpeciesId> {
        self.label
    }

    /// Set the top species.
    pub fn set_label(&mut self, label: Option<SpeciesId>) {
        self.label = label;
    }

    /// What remains once the top species reacts or desorbs away.
    pub fn below_label(&self) -> Option<SpeciesId> {
        self.below_label
    }

    /// Set the label that is exposed when the top species leaves.
    pub fn set_below_label(&mut self, label: Option<SpeciesId>) {
        self.below_label = label;
    }

    /// Neighbour in the given direction, `None` before topology is built.
    pub fn neighbour(&self, dir: Direction) -> Option<SiteId> {
        self.neighbours[dir.slot()]
    }

    /// Link a neighbour. Called by lattice builders only.
    pub fn set_neighbour(&mut self, dir: Direction, id: SiteId) {
        self.neighbours[dir.slot()] = Some(id);
    }

    /// Every populated neighbour link in canonical (N, S, E, W) order.
    pub fn neighbours(&self) -> impl Iterator<Item = SiteId> + '_ {
        self.neighbours.iter().flatten().copied()
    }

    /// Number of populated neighbour links (4 once the lattice is built).
    pub fn neighbour_count(&self) -> usize {
        self.neighbours.iter().flatten().count()
    }
}
