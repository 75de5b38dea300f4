//! Lattice configuration and validation.

use crate::kind::LatticeKind;
use strata_core::ConfigError;

/// Initial heights below this leave too little material under the
/// surface for desorption-heavy runs. Only a warning is issued.
pub const MIN_INITIAL_HEIGHT: i32 = 5;

/// Terraced (stepped) starting surface.
///
/// The X dimension is split into `steps` equal terraces. Terrace `k`
/// (counting from column 0) is raised by `k * step_height` layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepGeometry {
    /// Number of terraces. Must divide `size_x`.
    pub steps: u32,
    /// Height difference between consecutive terraces. `0` is flat.
    pub step_height: i32,
}

impl StepGeometry {
    /// Height offset of a column.
    pub fn offset(&self, col: u32, size_x: u32) -> i32 {
        let width = size_x / self.steps;
        (col / width) as i32 * self.step_height
    }
}

/// Builder input for a lattice.
///
/// [`validate`](Self::validate) checks every structural invariant; the
/// backend constructors call it before allocating anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatticeConfig {
    /// Geometry to build. `None` is rejected.
    pub kind: Option<LatticeKind>,
    /// Number of columns.
    pub size_x: u32,
    /// Number of rows.
    pub size_y: u32,
    /// Initial surface height; sites start at `initial_height - 1`.
    pub initial_height: i32,
    /// Optional terraced starting surface.
    pub steps: Option<StepGeometry>,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            kind: Some(LatticeKind::Bcc),
            size_x: 16,
            size_y: 16,
            initial_height: 10,
            steps: None,
        }
    }
}

impl LatticeConfig {
    /// A flat lattice of the given kind and size.
    pub fn new(kind: LatticeKind, size_x: u32, size_y: u32, initial_height: i32) -> Self {
        Self {
            kind: Some(kind),
            size_x,
            size_y,
            initial_height,
            steps: None,
        }
    }

    /// Add a terraced starting surface.
    pub fn with_steps(mut self, steps: u32, step_height: i32) -> Self {
        self.steps = Some(StepGeometry { steps, step_height });
        self
    }

    /// Total number of sites.
    pub fn site_count(&self) -> usize {
        self.size_x as usize * self.size_y as usize
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::LatticeKindUnset`] if `kind` is `None`
    /// - [`ConfigError::EmptyLattice`] if either dimension is zero
    /// - [`ConfigError::DegenerateDimension`] if either dimension is 1
    /// - [`ConfigError::InvalidSteps`] if the terrace count is zero or
    ///   does not divide `size_x`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kind.is_none() {
            return Err(ConfigError::LatticeKindUnset);
        }
        if self.size_x == 0 || self.size_y == 0 {
            return Err(ConfigError::EmptyLattice {
                size_x: self.size_x,
                size_y: self.size_y,
            });
        }
        for (axis, value) in [("size_x", self.size_x), ("size_y", self.size_y)] {
            if value == 1 {
                return Err(ConfigError::DegenerateDimension { axis, value });
            }
        }
        if let Some(steps) = self.steps {
            if steps.steps == 0 || self.size_x % steps.steps != 0 {
                return Err(ConfigError::InvalidSteps {
                    size_x: self.size_x,
                    steps: steps.steps,
                });
            }
        }
        Ok(())
    }
}
