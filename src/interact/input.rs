//! Input boundary - pointer and key events mapped onto edit operations.
//!
//! The windowing collaborator hands over raw canvas coordinates and
//! button state; everything is bounds-checked here, so the edit calls
//! below can never see an out-of-range cell.

use crate::compute::Grid;
use crate::schema::SimulationConfig;

use super::editor::{self, Brush};

/// Pointer button held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Paints with the current brush.
    Left,
    /// Erases.
    Right,
    None,
}

/// One pointer event in canvas pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub button: PointerButton,
}

/// Keyboard commands surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Toggle the brush between wall and fluid.
    ToggleBrush,
    /// Reset the grid.
    Reset,
}

/// Map canvas coordinates to a grid cell.
///
/// Returns `None` for coordinates off the canvas; the caller drops
/// those silently.
pub fn cell_at(x: f32, y: f32, config: &SimulationConfig) -> Option<(usize, usize)> {
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let col = (x / config.cell_size) as usize;
    let row = (y / config.cell_size) as usize;
    (row < config.rows && col < config.cols).then_some((row, col))
}

/// Apply one pointer event to the grid.
///
/// Left button paints with the brush, right button erases, anything
/// else (and off-canvas coordinates) is ignored.
pub fn apply_pointer(grid: &mut Grid, brush: &Brush, event: PointerEvent, config: &SimulationConfig) {
    let Some((row, col)) = cell_at(event.x, event.y, config) else {
        return;
    };
    // cell_at already proved the coordinates in range.
    let result = match event.button {
        PointerButton::Left => editor::paint(grid, row, col, brush.kind, brush.amount),
        PointerButton::Right => editor::erase(grid, row, col),
        PointerButton::None => Ok(()),
    };
    debug_assert!(result.is_ok(), "bounds-checked edit failed");
}

/// Apply one key command to the grid and brush.
pub fn apply_key(grid: &mut Grid, brush: &mut Brush, key: Key) {
    match key {
        Key::ToggleBrush => brush.toggle(),
        Key::Reset => editor::reset(grid),
    }
}
