//! Interact module - the edit and input boundary around the grid.

mod editor;
mod input;

pub use editor::*;
pub use input::*;
