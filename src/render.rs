//! Render adapter - display rectangles derived from grid state.
//!
//! The drawing collaborator reads these; nothing here touches
//! simulation state. Fill is clamped to 1 for display only, the
//! compression signal stays in the grid.

use crate::compute::{CellKind, Grid};

/// Screen-space rectangle for one cell, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// What a cell looks like this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellVisual {
    /// Full-cell rectangle.
    Wall(CellRect),
    /// Partial rectangle anchored to the cell's bottom edge, height
    /// `min(fill, 1) * cell_size`.
    Fluid(CellRect),
    /// Nothing to draw beyond the background.
    Empty,
}

/// Compute the visual for one cell.
pub fn cell_visual(kind: CellKind, fill: f32, row: usize, col: usize, cell_size: f32) -> CellVisual {
    let x = col as f32 * cell_size;
    let y = row as f32 * cell_size;
    match kind {
        CellKind::Wall => CellVisual::Wall(CellRect {
            x,
            y,
            w: cell_size,
            h: cell_size,
        }),
        CellKind::Fluid => {
            let fraction = fill.clamp(0.0, 1.0);
            if fraction <= 0.0 {
                CellVisual::Empty
            } else {
                let h = fraction * cell_size;
                CellVisual::Fluid(CellRect {
                    x,
                    y: y + (cell_size - h),
                    w: cell_size,
                    h,
                })
            }
        }
    }
}

/// Iterate visuals for every cell, row-major, once per frame.
pub fn frame_visuals<'a>(
    grid: &'a Grid,
    cell_size: f32,
) -> impl Iterator<Item = (usize, usize, CellVisual)> + 'a {
    (0..grid.rows()).flat_map(move |row| {
        (0..grid.cols()).map(move |col| {
            // In-bounds by construction.
            let visual = match grid.get(row, col) {
                Ok(cell) => cell_visual(cell.kind, cell.fill, row, col, cell_size),
                Err(_) => CellVisual::Empty,
            };
            (row, col, visual)
        })
    })
}
