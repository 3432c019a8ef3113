//! Grid storage - cell kinds and fill levels.
//!
//! The grid owns all simulation state: one kind and one fill level per
//! cell, stored as flat row-major arrays. Dimensions are fixed after
//! construction.

use serde::{Deserialize, Serialize};

use crate::schema::{Seed, SimulationConfig};

/// What a cell is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Solid cell. Never holds fill and blocks all transfer.
    Wall,
    /// Cell that can hold and exchange fluid.
    Fluid,
}

/// Snapshot of one cell, returned by value from [`Grid::get`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub kind: CellKind,
    pub fill: f32,
}

/// Grid access errors.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Fixed-size 2-D grid of cells.
///
/// Invariants, enforced on every mutation:
/// - wall cells always have fill 0
/// - fill is never negative
pub struct Grid {
    kinds: Vec<CellKind>,
    fills: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a grid with every cell `{Fluid, 0}`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let size = rows * cols;
        Self {
            kinds: vec![CellKind::Fluid; size],
            fills: vec![0.0; size],
            rows,
            cols,
        }
    }

    /// Create a grid from a seed pattern.
    pub fn from_seed(seed: &Seed, config: &SimulationConfig) -> Self {
        let (kinds, fills) = seed.generate(config.rows, config.cols);
        Self {
            kinds,
            fills,
            rows: config.rows,
            cols: config.cols,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Convert (row, col) to flat index.
    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        if !self.in_bounds(row, col) {
            return Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.idx(row, col);
        Ok(Cell {
            kind: self.kinds[idx],
            fill: self.fills[idx],
        })
    }

    /// Set the kind of the cell at (row, col).
    ///
    /// Turning a cell into a wall zeroes its fill.
    pub fn set_kind(&mut self, row: usize, col: usize, kind: CellKind) -> Result<(), GridError> {
        if !self.in_bounds(row, col) {
            return Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.idx(row, col);
        self.kinds[idx] = kind;
        if kind == CellKind::Wall {
            self.fills[idx] = 0.0;
        }
        Ok(())
    }

    /// Set the fill level of the cell at (row, col), clamped to `>= 0`.
    ///
    /// No upper clamp: callers that want the nominal [0, 1] range (paint
    /// operations) clamp themselves; the flow engine deliberately stores
    /// over-1 values as a compression signal. Setting fill on a wall is
    /// a no-op so the wall invariant cannot be broken from outside.
    pub fn set_fill(&mut self, row: usize, col: usize, value: f32) -> Result<(), GridError> {
        if !self.in_bounds(row, col) {
            return Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.idx(row, col);
        if self.kinds[idx] == CellKind::Fluid {
            self.fills[idx] = value.max(0.0);
        }
        Ok(())
    }

    /// Reset every cell to `{Fluid, 0}`.
    pub fn reset(&mut self) {
        self.kinds.fill(CellKind::Fluid);
        self.fills.fill(0.0);
    }

    /// Total fill across the grid (for conservation checking).
    pub fn total_fill(&self) -> f32 {
        self.fills.iter().sum()
    }

    /// Raw kind array, row-major. Read-only view for the flow engine.
    #[inline]
    pub(crate) fn kinds(&self) -> &[CellKind] {
        &self.kinds
    }

    /// Raw fill array, row-major. Read-only view for the flow engine.
    #[inline]
    pub(crate) fn fills(&self) -> &[f32] {
        &self.fills
    }

    /// Apply one tick's accumulated fill deltas.
    ///
    /// Walls must never have been credited; fills within `epsilon` of
    /// zero snap to exactly zero so float dust cannot accumulate. A
    /// delta that would drive a fill more than `epsilon` below zero is
    /// a rule bug: fatal in debug builds, clamped in release.
    pub(crate) fn apply_deltas(&mut self, deltas: &[f32], epsilon: f32) {
        debug_assert_eq!(deltas.len(), self.fills.len());
        for ((fill, &delta), &kind) in self.fills.iter_mut().zip(deltas).zip(&self.kinds) {
            if kind == CellKind::Wall {
                debug_assert_eq!(delta, 0.0, "transfer credited a wall cell");
                *fill = 0.0;
                continue;
            }
            let next = *fill + delta;
            debug_assert!(next >= -epsilon, "fill went negative: {next}");
            *fill = if next.abs() < epsilon { 0.0 } else { next.max(0.0) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_all_fluid_zero() {
        let grid = Grid::new(3, 4);
        for row in 0..3 {
            for col in 0..4 {
                let cell = grid.get(row, col).unwrap();
                assert_eq!(cell.kind, CellKind::Fluid);
                assert_eq!(cell.fill, 0.0);
            }
        }
    }

    #[test]
    fn test_out_of_range_access() {
        let grid = Grid::new(3, 4);
        assert!(matches!(
            grid.get(3, 0),
            Err(GridError::OutOfRange { row: 3, .. })
        ));
        assert!(matches!(grid.get(0, 4), Err(GridError::OutOfRange { .. })));
    }

    #[test]
    fn test_wall_forces_zero_fill() {
        let mut grid = Grid::new(2, 2);
        grid.set_fill(0, 0, 0.7).unwrap();
        grid.set_kind(0, 0, CellKind::Wall).unwrap();
        let cell = grid.get(0, 0).unwrap();
        assert_eq!(cell.kind, CellKind::Wall);
        assert_eq!(cell.fill, 0.0);
    }

    #[test]
    fn test_set_fill_on_wall_is_noop() {
        let mut grid = Grid::new(2, 2);
        grid.set_kind(1, 1, CellKind::Wall).unwrap();
        grid.set_fill(1, 1, 0.5).unwrap();
        assert_eq!(grid.get(1, 1).unwrap().fill, 0.0);
    }

    #[test]
    fn test_set_fill_clamps_negative() {
        let mut grid = Grid::new(2, 2);
        grid.set_fill(0, 1, -0.25).unwrap();
        assert_eq!(grid.get(0, 1).unwrap().fill, 0.0);
    }

    #[test]
    fn test_set_fill_allows_compression() {
        let mut grid = Grid::new(2, 2);
        grid.set_fill(0, 0, 1.3).unwrap();
        assert_eq!(grid.get(0, 0).unwrap().fill, 1.3);
    }

    #[test]
    fn test_reset_clears_walls_and_fill() {
        let mut grid = Grid::new(3, 3);
        grid.set_kind(0, 0, CellKind::Wall).unwrap();
        grid.set_fill(1, 1, 0.9).unwrap();
        grid.reset();
        for row in 0..3 {
            for col in 0..3 {
                let cell = grid.get(row, col).unwrap();
                assert_eq!(cell.kind, CellKind::Fluid);
                assert_eq!(cell.fill, 0.0);
            }
        }
    }

    #[test]
    fn test_total_fill_sums_all_cells() {
        let mut grid = Grid::new(2, 2);
        grid.set_fill(0, 0, 0.5).unwrap();
        grid.set_fill(1, 1, 0.25).unwrap();
        assert!((grid.total_fill() - 0.75).abs() < 1e-6);
    }
}
