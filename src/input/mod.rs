// =============================================================================
// INPUT — Gesture interpretation for the hex editor
//
// Turns raw pointer/key events into grid edits:
// - Press + release close together  → click  → toggle the selected category
// - Press + release far apart       → drag   → swap the two tiles
// - Digit keys 1–4                  → change the selected category
// =============================================================================

use glam::Vec2;
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::grid::{HexGrid, TileCategory};

/// Default click-vs-drag threshold in pixels.
///
/// A release within this distance of the press is a click, anything farther
/// is a drag. The test is on pixel displacement rather than hex-cell
/// difference on purpose: it tolerates sub-cell jitter from an imprecise
/// pointing device while still registering a short, deliberate drag that
/// crosses a cell boundary.
pub const DRAG_THRESHOLD: f32 = 10.0;

/// A press being tracked between pointer-down and pointer-up.
struct PendingPress {
    origin_hex: (i32, i32),
    origin_pixel: Vec2,
}

/// Pointer/key state machine driving grid edits.
///
/// Two states: idle (`pending` is `None`) and tracking a press. A press
/// captures its origin; the matching release classifies the gesture and
/// applies the edit, then unconditionally returns to idle. The controller
/// never touches tiles directly — every mutation goes through [`HexGrid`].
///
/// The selected category is an instance field rather than anything global,
/// so independent editors (and tests) cannot interfere with each other.
pub struct GestureController {
    selected: TileCategory,
    drag_threshold: f32,
    cursor_pos: Vec2,
    pending: Option<PendingPress>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::with_threshold(DRAG_THRESHOLD)
    }

    /// Controller with a custom click-vs-drag threshold in pixels.
    pub fn with_threshold(drag_threshold: f32) -> Self {
        Self {
            selected: TileCategory::PlayerSpawn,
            drag_threshold,
            cursor_pos: Vec2::ZERO,
            pending: None,
        }
    }

    /// The category a click currently places.
    pub fn selection(&self) -> TileCategory {
        self.selected
    }

    /// Status label for the host to draw, e.g. `Selected: Player (1-4)`.
    pub fn status_line(&self) -> String {
        format!("Selected: {} (1-4)", self.selected.label())
    }

    /// Begin tracking a press at pixel position `pos`.
    pub fn on_pointer_down(&mut self, grid: &HexGrid, pos: Vec2) {
        self.pending = Some(PendingPress {
            origin_hex: grid.pixel_to_hex(pos),
            origin_pixel: pos,
        });
    }

    /// Resolve the tracked press at release position `pos`.
    ///
    /// A release with no matching press (e.g. the press happened before the
    /// window gained focus) is ignored.
    pub fn on_pointer_up(&mut self, grid: &mut HexGrid, pos: Vec2) {
        let Some(press) = self.pending.take() else { return };

        let delta = pos - press.origin_pixel;
        if delta.length_squared() < self.drag_threshold * self.drag_threshold {
            // Click: apply the selected category at the press origin.
            let (q, r) = press.origin_hex;
            grid.toggle_tile(q, r, self.selected);
        } else {
            // Drag: swap origin and release tiles. A drag that lands back on
            // its own hex does nothing.
            let release_hex = grid.pixel_to_hex(pos);
            if release_hex != press.origin_hex {
                grid.swap_tiles(press.origin_hex, release_hex);
            }
        }
    }

    /// Digit keys 1–4 pick the category a click places; every other key is
    /// ignored.
    pub fn on_key_press(&mut self, key: KeyCode) {
        self.selected = match key {
            KeyCode::Digit1 => TileCategory::PlayerSpawn,
            KeyCode::Digit2 => TileCategory::Enemy,
            KeyCode::Digit3 => TileCategory::Obstacle,
            KeyCode::Digit4 => TileCategory::Exit,
            _ => return,
        };
    }

    /// Feed a raw `winit` window event into the state machine.
    ///
    /// `MouseInput` carries no position, so the cursor is tracked from
    /// `CursorMoved`. Only the left button drives gestures.
    pub fn handle_window_event(&mut self, grid: &mut HexGrid, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_pos = Vec2::new(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseInput { button: MouseButton::Left, state, .. } => match state {
                ElementState::Pressed => self.on_pointer_down(grid, self.cursor_pos),
                ElementState::Released => self.on_pointer_up(grid, self.cursor_pos),
            },

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.on_key_press(*code),

            _ => {}
        }
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (HexGrid, GestureController) {
        (HexGrid::new(8, 6, 40.0), GestureController::new())
    }

    #[test]
    fn default_selection_is_player_spawn() {
        let (_, input) = setup();
        assert_eq!(input.selection(), TileCategory::PlayerSpawn);
    }

    #[test]
    fn digit_keys_change_selection() {
        let (_, mut input) = setup();
        input.on_key_press(KeyCode::Digit2);
        assert_eq!(input.selection(), TileCategory::Enemy);
        input.on_key_press(KeyCode::Digit3);
        assert_eq!(input.selection(), TileCategory::Obstacle);
        input.on_key_press(KeyCode::Digit4);
        assert_eq!(input.selection(), TileCategory::Exit);
        input.on_key_press(KeyCode::Digit1);
        assert_eq!(input.selection(), TileCategory::PlayerSpawn);
    }

    #[test]
    fn unbound_keys_keep_the_selection() {
        let (_, mut input) = setup();
        input.on_key_press(KeyCode::Digit2);
        input.on_key_press(KeyCode::KeyQ);
        input.on_key_press(KeyCode::Escape);
        assert_eq!(input.selection(), TileCategory::Enemy);
    }

    #[test]
    fn small_release_distance_is_a_click() {
        let (mut grid, mut input) = setup();
        let center = grid.hex_to_pixel(3, 2);
        input.on_pointer_down(&grid, center);
        input.on_pointer_up(&mut grid, center + Vec2::new(3.0, 0.0));
        assert_eq!(grid.tile(3, 2).unwrap().category, TileCategory::PlayerSpawn);
    }

    #[test]
    fn click_toggles_back_to_empty() {
        let (mut grid, mut input) = setup();
        let center = grid.hex_to_pixel(3, 2);
        input.on_pointer_down(&grid, center);
        input.on_pointer_up(&mut grid, center);
        input.on_pointer_down(&grid, center);
        input.on_pointer_up(&mut grid, center);
        assert_eq!(grid.tile(3, 2).unwrap().category, TileCategory::Empty);
    }

    #[test]
    fn large_release_distance_swaps_tiles() {
        let (mut grid, mut input) = setup();
        grid.set_tile(1, 1, TileCategory::Obstacle);
        input.on_pointer_down(&grid, grid.hex_to_pixel(1, 1));
        let target = grid.hex_to_pixel(1, 4);
        input.on_pointer_up(&mut grid, target);
        assert_eq!(grid.tile(1, 1).unwrap().category, TileCategory::Empty);
        assert_eq!(grid.tile(1, 4).unwrap().category, TileCategory::Obstacle);
    }

    #[test]
    fn drag_back_to_origin_hex_does_nothing() {
        let (mut grid, mut input) = setup();
        grid.set_tile(2, 2, TileCategory::Enemy);
        let center = grid.hex_to_pixel(2, 2);
        // Well past the click threshold but still inside the same hex.
        input.on_pointer_down(&grid, center);
        input.on_pointer_up(&mut grid, center + Vec2::new(15.0, 0.0));
        assert_eq!(grid.tile(2, 2).unwrap().category, TileCategory::Enemy);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let (mut grid, mut input) = setup();
        let target = grid.hex_to_pixel(0, 0);
        input.on_pointer_up(&mut grid, target);
        assert_eq!(grid.tile(0, 0).unwrap().category, TileCategory::Empty);
    }

    #[test]
    fn press_is_cleared_after_release() {
        let (mut grid, mut input) = setup();
        let center = grid.hex_to_pixel(0, 0);
        input.on_pointer_down(&grid, center);
        input.on_pointer_up(&mut grid, center);
        // A stray second release must not re-apply the gesture.
        input.on_pointer_up(&mut grid, center);
        assert_eq!(grid.tile(0, 0).unwrap().category, TileCategory::PlayerSpawn);
    }

    #[test]
    fn drag_released_off_the_board_is_a_noop() {
        let (mut grid, mut input) = setup();
        grid.set_tile(0, 0, TileCategory::Obstacle);
        input.on_pointer_down(&grid, grid.hex_to_pixel(0, 0));
        let target = grid.hex_to_pixel(-3, 0);
        input.on_pointer_up(&mut grid, target);
        assert_eq!(grid.tile(0, 0).unwrap().category, TileCategory::Obstacle);
    }

    #[test]
    fn custom_threshold_widens_the_click_zone() {
        let mut grid = HexGrid::new(8, 6, 40.0);
        let mut input = GestureController::with_threshold(30.0);
        let center = grid.hex_to_pixel(2, 2);
        input.on_pointer_down(&grid, center);
        input.on_pointer_up(&mut grid, center + Vec2::new(20.0, 0.0));
        // 20 px would be a drag at the default threshold; here it's a click.
        assert_eq!(grid.tile(2, 2).unwrap().category, TileCategory::PlayerSpawn);
    }

    #[test]
    fn status_line_names_the_selection() {
        let (_, mut input) = setup();
        assert_eq!(input.status_line(), "Selected: Player (1-4)");
        input.on_key_press(KeyCode::Digit3);
        assert_eq!(input.status_line(), "Selected: Obstacle (1-4)");
    }
}
