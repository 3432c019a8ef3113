//! Grid-based cellular fluid simulation with mass-conservative flow.
//!
//! A fixed 2-D grid of cells, each either a wall or a fluid holder with
//! a scalar fill level, is advanced one tick at a time: gravity pulls
//! fill into the cell below up to its capacity, the remainder disperses
//! toward lower horizontal neighbors, and fill above the nominal full
//! level persists as a compression signal. Every transfer debits one
//! cell and credits another by the same amount, so total fill is
//! conserved; edits are the only way fill enters or leaves.
//!
//! # Architecture
//!
//! - `schema`: configuration and seeding types
//! - `compute`: grid storage and the flow engine
//! - `interact`: paint/erase/reset edits and the pointer/key boundary
//! - `render`: read-only display rectangles for a drawing frontend
//!
//! # Example
//!
//! ```rust
//! use gridflow::{
//!     compute::{FlowEngine, Grid, SimulationStats},
//!     schema::{Pattern, Seed, SimulationConfig},
//! };
//!
//! let config = SimulationConfig::default();
//! let seed = Seed {
//!     pattern: Pattern::Block {
//!         row: 0,
//!         col: 10,
//!         rows: 5,
//!         cols: 10,
//!         kind: gridflow::compute::CellKind::Fluid,
//!         fill: 1.0,
//!     },
//! };
//! let mut grid = Grid::from_seed(&seed, &config);
//! let mut engine = FlowEngine::new(config);
//!
//! engine.run(&mut grid, 100);
//!
//! println!("Total fill after 100 ticks: {}", grid.total_fill());
//! # let _ = SimulationStats::from_grid(&grid);
//! ```

pub mod compute;
pub mod interact;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use compute::{Cell, CellKind, FlowEngine, Grid, SimulationStats};
pub use interact::Brush;
pub use schema::{Pattern, Seed, SimulationConfig};
