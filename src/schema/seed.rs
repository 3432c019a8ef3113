//! Seed types for initializing the fluid grid.

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::compute::CellKind;

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Empty,
        }
    }
}

/// Predefined patterns for initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// All cells fluid with zero fill.
    Empty,
    /// Rectangular block of one cell kind at a uniform fill level.
    Block {
        /// First row of the block (inclusive).
        row: usize,
        /// First column of the block (inclusive).
        col: usize,
        /// Block height in cells.
        rows: usize,
        /// Block width in cells.
        cols: usize,
        /// Kind painted over the block.
        kind: CellKind,
        /// Fill level for fluid cells; ignored (forced to 0) for walls.
        fill: f32,
    },
    /// Single column of fluid at a uniform fill level, full grid height.
    Column {
        /// Column index.
        col: usize,
        /// Fill level per cell.
        fill: f32,
    },
    /// Uniform random fill noise over all fluid cells.
    Noise {
        /// Fill amplitude range [0, amplitude].
        amplitude: f32,
        /// Random seed.
        seed: u64,
    },
    /// Custom sparse cell values.
    Custom {
        /// List of (row, col, kind, fill) entries.
        cells: Vec<(usize, usize, CellKind, f32)>,
    },
}

impl Seed {
    /// Generate initial (kinds, fills) arrays, row-major.
    ///
    /// Out-of-range entries are ignored; wall entries are forced to
    /// zero fill.
    pub fn generate(&self, rows: usize, cols: usize) -> (Vec<CellKind>, Vec<f32>) {
        let size = rows * cols;
        let mut kinds = vec![CellKind::Fluid; size];
        let mut fills = vec![0.0f32; size];

        match &self.pattern {
            Pattern::Empty => {}
            Pattern::Block {
                row,
                col,
                rows: block_rows,
                cols: block_cols,
                kind,
                fill,
            } => {
                for r in *row..(row + block_rows).min(rows) {
                    for c in *col..(col + block_cols).min(cols) {
                        let idx = r * cols + c;
                        kinds[idx] = *kind;
                        fills[idx] = match kind {
                            CellKind::Wall => 0.0,
                            CellKind::Fluid => fill.max(0.0),
                        };
                    }
                }
            }
            Pattern::Column { col, fill } => {
                if *col < cols {
                    for r in 0..rows {
                        fills[r * cols + col] = fill.max(0.0);
                    }
                }
            }
            Pattern::Noise { amplitude, seed } => {
                let mut rng = StdRng::seed_from_u64(*seed);
                for fill in fills.iter_mut() {
                    *fill = amplitude.max(0.0) * rng.r#gen::<f32>();
                }
            }
            Pattern::Custom { cells } => {
                for &(r, c, kind, fill) in cells {
                    if r < rows && c < cols {
                        let idx = r * cols + c;
                        kinds[idx] = kind;
                        fills[idx] = match kind {
                            CellKind::Wall => 0.0,
                            CellKind::Fluid => fill.max(0.0),
                        };
                    }
                }
            }
        }

        (kinds, fills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_seed_all_fluid_zero() {
        let (kinds, fills) = Seed::default().generate(4, 5);
        assert_eq!(kinds.len(), 20);
        assert!(kinds.iter().all(|&k| k == CellKind::Fluid));
        assert!(fills.iter().all(|&f| f == 0.0));
    }

    #[test]
    fn test_block_clipped_to_grid() {
        let seed = Seed {
            pattern: Pattern::Block {
                row: 2,
                col: 3,
                rows: 10,
                cols: 10,
                kind: CellKind::Fluid,
                fill: 0.8,
            },
        };
        let (_, fills) = seed.generate(4, 5);
        // Only rows 2..4 x cols 3..5 are inside the grid.
        let filled = fills.iter().filter(|&&f| f > 0.0).count();
        assert_eq!(filled, 4);
        assert_eq!(fills[2 * 5 + 3], 0.8);
    }

    #[test]
    fn test_wall_block_has_zero_fill() {
        let seed = Seed {
            pattern: Pattern::Block {
                row: 0,
                col: 0,
                rows: 2,
                cols: 2,
                kind: CellKind::Wall,
                fill: 0.9,
            },
        };
        let (kinds, fills) = seed.generate(3, 3);
        assert_eq!(kinds[0], CellKind::Wall);
        assert_eq!(fills[0], 0.0);
    }

    #[test]
    fn test_noise_is_deterministic_per_seed() {
        let seed = Seed {
            pattern: Pattern::Noise {
                amplitude: 0.5,
                seed: 42,
            },
        };
        let (_, a) = seed.generate(8, 8);
        let (_, b) = seed.generate(8, 8);
        assert_eq!(a, b);
        assert!(a.iter().all(|&f| (0.0..=0.5).contains(&f)));
        assert!(a.iter().any(|&f| f > 0.0));
    }

    #[test]
    fn test_custom_out_of_range_ignored() {
        let seed = Seed {
            pattern: Pattern::Custom {
                cells: vec![
                    (1, 1, CellKind::Fluid, 0.7),
                    (99, 0, CellKind::Wall, 0.0),
                ],
            },
        };
        let (kinds, fills) = seed.generate(3, 3);
        assert_eq!(fills[1 * 3 + 1], 0.7);
        assert!(kinds.iter().all(|&k| k == CellKind::Fluid));
    }
}
