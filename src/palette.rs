//! Rendering metadata for the editor: an RGBA colour type and the
//! category → colour lookup. Kept out of [`crate::grid`] so the model stays
//! free of rendering concerns; hosts fetch a tile's colour by category when
//! drawing its polygon.

use bytemuck::{Pod, Zeroable};

use crate::grid::TileCategory;

/// RGBA colour with components in 0.0–1.0.
///
/// `#[repr(C)]` + `Pod` so hosts can copy it straight into a vertex or
/// uniform buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);

    /// Opaque colour from 8-bit channel values.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0])
    }
}

/// Window clear colour behind the grid.
pub const BACKGROUND: Color = Color::rgb8(30, 30, 30);

/// Outline colour of every hex polygon.
pub const HEX_BORDER: Color = Color::BLACK;

/// Colour of the status label text.
pub const LABEL_TEXT: Color = Color::WHITE;

/// Fill colour for a tile of the given category.
///
/// The exit shares the empty fill: it is marked by drawing an "X" over the
/// cell (see [`crate::grid::HexGrid::exit_position`]) rather than by colour.
pub fn tile_color(category: TileCategory) -> Color {
    match category {
        TileCategory::Empty | TileCategory::Exit => Color::rgb8(240, 240, 240),
        TileCategory::PlayerSpawn => Color::rgb8(220, 50, 50),
        TileCategory::Enemy => Color::rgb8(50, 200, 50),
        TileCategory::Obstacle => Color::rgb8(150, 100, 60),
    }
}
