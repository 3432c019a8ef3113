//! Flow engine - tick driver for the fluid grid.
//!
//! One `step` computes the next fill distribution for the whole grid
//! from a snapshot of the current one. All transfers are accumulated
//! into a pre-allocated delta buffer first and applied in a single
//! pass, so the result is independent of traversal order.

use log::trace;

use crate::schema::SimulationConfig;

use super::{Cell, CellKind, Grid, cell_outflow};

/// Mass-conserving flow engine.
///
/// The engine never changes cell kinds and never clamps fill below
/// `max_fill_level`; over-1 fills persist across ticks as the
/// compression signal that drives back-pressure.
pub struct FlowEngine {
    config: SimulationConfig,
    /// Per-cell fill delta, reused each tick.
    deltas: Vec<f32>,
    /// Completed tick count.
    tick: u64,
}

impl FlowEngine {
    /// Create a new engine from configuration.
    pub fn new(config: SimulationConfig) -> Self {
        let size = config.grid_size();
        Self {
            config,
            deltas: vec![0.0; size],
            tick: 0,
        }
    }

    /// Advance the grid by one tick.
    ///
    /// Reads only the pre-tick fill snapshot; every transfer debits one
    /// cell and credits another by the same amount, so total fill is
    /// conserved exactly up to float rounding.
    pub fn step(&mut self, grid: &mut Grid) {
        let rows = grid.rows();
        let cols = grid.cols();
        debug_assert_eq!(rows * cols, self.deltas.len(), "grid does not match engine config");

        self.deltas.fill(0.0);

        let kinds = grid.kinds();
        let fills = grid.fills();
        let flow = &self.config.flow;

        // Fill of a fluid neighbor, None for walls and the grid edge.
        let fluid_fill = |row: usize, col: usize| -> Option<f32> {
            let idx = row * cols + col;
            (kinds[idx] == CellKind::Fluid).then(|| fills[idx])
        };

        for row in 0..rows {
            for col in 0..cols {
                let idx = row * cols + col;
                if kinds[idx] != CellKind::Fluid {
                    continue;
                }
                let fill = fills[idx];
                if fill <= 0.0 {
                    continue;
                }

                let below = (row + 1 < rows).then(|| fluid_fill(row + 1, col)).flatten();
                let left = (col > 0).then(|| fluid_fill(row, col - 1)).flatten();
                let right = (col + 1 < cols).then(|| fluid_fill(row, col + 1)).flatten();
                let above = (row > 0).then(|| fluid_fill(row - 1, col)).flatten();

                let out = cell_outflow(fill, below, left, right, above, flow);

                self.deltas[idx] -= out.total();
                if out.down > 0.0 {
                    self.deltas[idx + cols] += out.down;
                }
                if out.left > 0.0 {
                    self.deltas[idx - 1] += out.left;
                }
                if out.right > 0.0 {
                    self.deltas[idx + 1] += out.right;
                }
                if out.up > 0.0 {
                    self.deltas[idx - cols] += out.up;
                }
            }
        }

        grid.apply_deltas(&self.deltas, flow.epsilon);
        self.tick += 1;
        trace!("tick {} complete, total fill {:.6}", self.tick, grid.total_fill());
    }

    /// Advance the grid by the given number of ticks.
    pub fn run(&mut self, grid: &mut Grid, ticks: u64) {
        for _ in 0..ticks {
            self.step(grid);
        }
    }

    /// Completed tick count.
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Get configuration reference.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

/// Grid statistics for monitoring.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SimulationStats {
    pub total_fill: f32,
    pub max_fill: f32,
    pub wet_cells: usize,
    pub wall_cells: usize,
}

impl SimulationStats {
    /// Compute statistics from a grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut total_fill = 0.0f32;
        let mut max_fill = 0.0f32;
        let mut wet_cells = 0usize;
        let mut wall_cells = 0usize;

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                // In-bounds by construction.
                let Ok(Cell { kind, fill }) = grid.get(row, col) else {
                    continue;
                };
                match kind {
                    CellKind::Wall => wall_cells += 1,
                    CellKind::Fluid => {
                        total_fill += fill;
                        max_fill = max_fill.max(fill);
                        if fill > 1e-6 {
                            wet_cells += 1;
                        }
                    }
                }
            }
        }

        Self {
            total_fill,
            max_fill,
            wet_cells,
            wall_cells,
        }
    }
}
