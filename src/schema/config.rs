//! Configuration types for the fluid grid simulation.

use serde::{Deserialize, Serialize};

fn default_epsilon() -> f32 {
    1e-6
}

fn default_upward_push() -> bool {
    false
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid height in cells (gravity points toward increasing row index).
    pub rows: usize,
    /// Grid width in cells.
    pub cols: usize,
    /// Cell edge length in pixels, used by the input and render boundaries.
    pub cell_size: f32,
    /// Flow redistribution parameters.
    pub flow: FlowConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        // 900x600 canvas at 20px cells.
        Self {
            rows: 30,
            cols: 45,
            cell_size: 20.0,
            flow: FlowConfig::default(),
        }
    }
}

/// Flow redistribution parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    /// How much fill a cell may absorb before it counts as saturated.
    /// 1.0 means no compression; values up to ~1.3 let columns pack
    /// tighter under load before back-pressure builds.
    pub max_fill_level: f32,
    /// Fraction of a cell's remaining fill offered to each lower
    /// horizontal neighbor per tick.
    pub dispersion: f32,
    /// Push fill above 1.0 into the cell above when the cell below is
    /// saturated. Off by default: two compressed cells stacked on a
    /// full column can trade the same excess back and forth forever.
    #[serde(default = "default_upward_push")]
    pub upward_push: bool,
    /// Fill values within this distance of zero snap to exactly zero
    /// after each tick.
    #[serde(default = "default_epsilon")]
    pub epsilon: f32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            max_fill_level: 1.0,
            dispersion: 1.0 / 3.0,
            upward_push: false,
            epsilon: 1e-6,
        }
    }
}

impl SimulationConfig {
    /// Get total grid size (rows * cols).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize);
        }
        if self.flow.max_fill_level < 1.0 {
            return Err(ConfigError::InvalidMaxFillLevel {
                value: self.flow.max_fill_level,
            });
        }
        if self.flow.dispersion <= 0.0 || self.flow.dispersion > 0.5 {
            return Err(ConfigError::InvalidDispersion {
                value: self.flow.dispersion,
            });
        }
        if self.flow.epsilon < 0.0 {
            return Err(ConfigError::InvalidEpsilon);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (rows, cols) must be non-zero")]
    InvalidDimensions,
    #[error("Cell size must be positive")]
    InvalidCellSize,
    #[error("max_fill_level must be at least 1.0, got {value}")]
    InvalidMaxFillLevel { value: f32 },
    #[error("dispersion must be in (0, 0.5], got {value}")]
    InvalidDispersion { value: f32 },
    #[error("epsilon must be non-negative")]
    InvalidEpsilon,
}
