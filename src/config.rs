//! Editor configuration: grid dimensions, hex size, gesture threshold and
//! window size, loadable from JSON. Defaults match the standalone demo
//! (16×10 grid of radius-40 hexes in a 1200×800 window).

use serde::Deserialize;

use crate::grid::HexGrid;
use crate::input::{DRAG_THRESHOLD, GestureController};

/// Editor configuration snapshot.
///
/// Every field has a default, so a config file only needs to name the values
/// it overrides.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Number of columns in the grid.
    pub grid_width: u32,
    /// Number of rows in the grid.
    pub grid_height: u32,
    /// Hex radius (center to corner) in pixels.
    pub hex_size: f32,
    /// Click-vs-drag pixel threshold (see [`crate::input::DRAG_THRESHOLD`]).
    pub drag_threshold: f32,
    /// Host window width in pixels.
    pub window_width: u32,
    /// Host window height in pixels.
    pub window_height: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_width: 16,
            grid_height: 10,
            hex_size: 40.0,
            drag_threshold: DRAG_THRESHOLD,
            window_width: 1200,
            window_height: 800,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if the input is malformed or a field
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build the grid this configuration describes.
    pub fn build_grid(&self) -> HexGrid {
        HexGrid::new(self.grid_width, self.grid_height, self.hex_size)
    }

    /// Build a gesture controller with this configuration's threshold.
    pub fn build_controller(&self) -> GestureController {
        GestureController::with_threshold(self.drag_threshold)
    }
}
