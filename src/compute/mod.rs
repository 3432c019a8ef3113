//! Compute module - Grid storage and flow redistribution.

mod engine;
mod flow;
mod grid;

pub use engine::*;
pub use flow::*;
pub use grid::*;
