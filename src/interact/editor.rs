//! Edit operations - paint, erase and reset applied to the grid.
//!
//! These are the only operations that add or remove fill; the flow
//! engine itself only moves it around.

use log::debug;

use crate::compute::{CellKind, Grid, GridError};

/// Fill added by one fluid paint stroke.
pub const DEFAULT_PAINT_AMOUNT: f32 = 1.0;

/// Currently selected paint kind plus stroke strength.
///
/// Owned by the top-level loop and passed into the edit calls, instead
/// of living in process-wide state.
#[derive(Debug, Clone, Copy)]
pub struct Brush {
    pub kind: CellKind,
    /// Fill added per fluid stroke, in [0, 1].
    pub amount: f32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            kind: CellKind::Wall,
            amount: DEFAULT_PAINT_AMOUNT,
        }
    }
}

impl Brush {
    /// Switch between wall and fluid painting.
    pub fn toggle(&mut self) {
        self.kind = match self.kind {
            CellKind::Wall => CellKind::Fluid,
            CellKind::Fluid => CellKind::Wall,
        };
        debug!("brush switched to {:?}", self.kind);
    }
}

/// Paint a cell.
///
/// Fluid strokes add `amount` to the existing fill, clamped into
/// [0, 1]; wall strokes force fill to zero.
pub fn paint(
    grid: &mut Grid,
    row: usize,
    col: usize,
    kind: CellKind,
    amount: f32,
) -> Result<(), GridError> {
    grid.set_kind(row, col, kind)?;
    if kind == CellKind::Fluid {
        let fill = grid.get(row, col)?.fill;
        grid.set_fill(row, col, (fill + amount).clamp(0.0, 1.0))?;
    }
    Ok(())
}

/// Erase a cell back to empty fluid.
pub fn erase(grid: &mut Grid, row: usize, col: usize) -> Result<(), GridError> {
    grid.set_kind(row, col, CellKind::Fluid)?;
    grid.set_fill(row, col, 0.0)
}

/// Reset the whole grid to its startup state.
pub fn reset(grid: &mut Grid) {
    debug!("grid reset");
    grid.reset();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_fluid_accumulates_and_clamps() {
        let mut grid = Grid::new(3, 3);
        paint(&mut grid, 1, 1, CellKind::Fluid, 0.6).unwrap();
        assert!((grid.get(1, 1).unwrap().fill - 0.6).abs() < 1e-6);

        // Second stroke clamps at the nominal full level.
        paint(&mut grid, 1, 1, CellKind::Fluid, 0.6).unwrap();
        assert_eq!(grid.get(1, 1).unwrap().fill, 1.0);
    }

    #[test]
    fn test_paint_wall_over_fluid_zeroes_fill() {
        let mut grid = Grid::new(3, 3);
        grid.set_fill(2, 0, 0.7).unwrap();

        paint(&mut grid, 2, 0, CellKind::Wall, DEFAULT_PAINT_AMOUNT).unwrap();

        let cell = grid.get(2, 0).unwrap();
        assert_eq!(cell.kind, CellKind::Wall);
        assert_eq!(cell.fill, 0.0);
    }

    #[test]
    fn test_erase_restores_empty_fluid() {
        let mut grid = Grid::new(2, 2);
        paint(&mut grid, 0, 0, CellKind::Wall, DEFAULT_PAINT_AMOUNT).unwrap();

        erase(&mut grid, 0, 0).unwrap();

        let cell = grid.get(0, 0).unwrap();
        assert_eq!(cell.kind, CellKind::Fluid);
        assert_eq!(cell.fill, 0.0);
    }

    #[test]
    fn test_paint_out_of_range_fails() {
        let mut grid = Grid::new(2, 2);
        assert!(paint(&mut grid, 5, 5, CellKind::Fluid, 1.0).is_err());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut grid = Grid::new(2, 2);
        paint(&mut grid, 0, 0, CellKind::Wall, 1.0).unwrap();
        paint(&mut grid, 1, 1, CellKind::Fluid, 0.8).unwrap();

        reset(&mut grid);

        for row in 0..2 {
            for col in 0..2 {
                let cell = grid.get(row, col).unwrap();
                assert_eq!(cell.kind, CellKind::Fluid);
                assert_eq!(cell.fill, 0.0);
            }
        }
    }

    #[test]
    fn test_brush_toggle_alternates() {
        let mut brush = Brush::default();
        assert_eq!(brush.kind, CellKind::Wall);
        brush.toggle();
        assert_eq!(brush.kind, CellKind::Fluid);
        brush.toggle();
        assert_eq!(brush.kind, CellKind::Wall);
    }
}
