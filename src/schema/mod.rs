//! Schema module - Configuration and seeding types for fluid grid simulations.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
