// =============================================================================
// GRID — Hex tile storage and coordinate math
//
// Everything the editor knows about the board lives here:
// - Tile storage addressed by axial (q, r) coordinates
// - Mutation rules (set, toggle, swap, the single-exit rule)
// - Pixel ↔ hex transforms for a pointy-top, odd-row-offset layout
// =============================================================================

use glam::Vec2;

// ── Tile data ────────────────────────────────────────────────────────────────

/// Logical role of a tile in the grid. Exactly one role per tile;
/// rendering and editor behaviour both key off this value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileCategory {
    #[default]
    Empty,
    PlayerSpawn,
    Enemy,
    Obstacle,
    Exit,
}

impl TileCategory {
    /// Display name used for the selection status line.
    pub fn label(self) -> &'static str {
        match self {
            TileCategory::Empty => "Empty",
            TileCategory::PlayerSpawn => "Player",
            TileCategory::Enemy => "Enemy",
            TileCategory::Obstacle => "Obstacle",
            TileCategory::Exit => "Exit",
        }
    }
}

/// A single cell of the board. Plain data — all rules live on [`HexGrid`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub category: TileCategory,
}

// ── HexGrid ──────────────────────────────────────────────────────────────────

/// Pixel position of the center of hex (0, 0), so the grid is not drawn
/// flush against the window corner.
pub const GRID_ORIGIN: Vec2 = Vec2::new(100.0, 100.0);

/// A rectangular board of hex tiles addressed by axial `(q, r)` coordinates,
/// `0 ≤ q < width`, `0 ≤ r < height`.
///
/// Grid-wide rule: at most one tile holds [`TileCategory::Exit`] at any time.
/// Every mutating operation preserves this by construction (clear-before-set),
/// so there is no state from which it can be violated.
///
/// All coordinate arguments are accepted unchecked; out-of-bounds coordinates
/// make lookups return `None` and mutations do nothing. Clicks near the board
/// edge are expected input for an editor, not errors.
pub struct HexGrid {
    width: i32,
    height: i32,
    size: f32,
    /// Row-major backing store: index = r * width + q.
    tiles: Vec<Tile>,
}

impl HexGrid {
    /// Create a `width` × `height` board of empty tiles.
    /// `size` is the hex radius (center to corner) in pixels.
    ///
    /// Dimensions and hex size are fixed for the lifetime of the grid.
    pub fn new(width: u32, height: u32, size: f32) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            size,
            tiles: vec![Tile::default(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    /// Hex radius (center to corner) in pixels.
    pub fn size(&self) -> f32 { self.size }

    fn in_bounds(&self, q: i32, r: i32) -> bool {
        q >= 0 && q < self.width && r >= 0 && r < self.height
    }

    fn index(&self, q: i32, r: i32) -> usize {
        (r * self.width + q) as usize
    }

    // ── Tile logic ───────────────────────────────────────────────────────────

    /// The tile at `(q, r)`, or `None` if the coordinate is off the board.
    pub fn tile(&self, q: i32, r: i32) -> Option<Tile> {
        if self.in_bounds(q, r) {
            Some(self.tiles[self.index(q, r)])
        } else {
            None
        }
    }

    /// Assign `category` to the tile at `(q, r)`. Does nothing out of bounds.
    ///
    /// Placing [`TileCategory::Exit`] first clears any existing exit elsewhere,
    /// so the single-exit rule holds after every call. Overwriting the exit
    /// tile with a non-exit category is a plain overwrite.
    pub fn set_tile(&mut self, q: i32, r: i32, category: TileCategory) {
        if !self.in_bounds(q, r) {
            return;
        }
        if category == TileCategory::Exit {
            self.clear_exit();
        }
        let i = self.index(q, r);
        self.tiles[i].category = category;
    }

    /// Remove any existing exit tile. Internal to the single-exit rule.
    fn clear_exit(&mut self) {
        for tile in &mut self.tiles {
            if tile.category == TileCategory::Exit {
                tile.category = TileCategory::Empty;
            }
        }
    }

    /// Apply the editor's "place selected category" action: a tile that
    /// already holds `category` resets to empty, anything else becomes
    /// `category`. Routed through [`set_tile`](Self::set_tile) so exit
    /// uniqueness holds for every path.
    pub fn toggle_tile(&mut self, q: i32, r: i32, category: TileCategory) {
        let Some(tile) = self.tile(q, r) else { return };
        if tile.category == category {
            self.set_tile(q, r, TileCategory::Empty);
        } else {
            self.set_tile(q, r, category);
        }
    }

    /// Swap the categories of the tiles at `a` and `b`.
    ///
    /// Does nothing if either coordinate is off the board, or if either tile
    /// holds the exit: the exit is immovable and only ever placed or removed
    /// via [`set_tile`](Self::set_tile).
    pub fn swap_tiles(&mut self, a: (i32, i32), b: (i32, i32)) {
        let (Some(ta), Some(tb)) = (self.tile(a.0, a.1), self.tile(b.0, b.1)) else {
            return;
        };
        if ta.category == TileCategory::Exit || tb.category == TileCategory::Exit {
            return;
        }
        let ia = self.index(a.0, a.1);
        let ib = self.index(b.0, b.1);
        self.tiles.swap(ia, ib);
    }

    /// Coordinate of the exit tile, if one has been placed.
    pub fn exit_position(&self) -> Option<(i32, i32)> {
        self.tiles
            .iter()
            .position(|t| t.category == TileCategory::Exit)
            .map(|i| (i as i32 % self.width, i as i32 / self.width))
    }

    // ── Hex math ─────────────────────────────────────────────────────────────
    //
    // Pointy-top hexes in "odd-r" offset layout: rows are 1.5·size apart,
    // columns √3·size apart, and every odd row is shifted right by half the
    // hex width.

    /// Pixel center of hex `(q, r)`. Pure; defined for any coordinate, not
    /// just those on the board.
    pub fn hex_to_pixel(&self, q: i32, r: i32) -> Vec2 {
        let apothem = 3.0_f32.sqrt() / 2.0 * self.size;
        let mut x = q as f32 * (2.0 * apothem);
        if r.rem_euclid(2) == 1 {
            // offset alternate rows
            x += apothem;
        }
        let y = r as f32 * (1.5 * self.size);
        GRID_ORIGIN + Vec2::new(x, y)
    }

    /// Hex containing (approximately) the pixel position `pos`.
    ///
    /// Inverse of [`hex_to_pixel`](Self::hex_to_pixel): exact at cell centers,
    /// deliberately approximate near cell boundaries. Each axis is rounded to
    /// the nearest integer independently rather than using cube-coordinate
    /// rounding; borderline clicks may resolve to a neighbouring cell, which
    /// is accepted imprecision for an editing surface.
    pub fn pixel_to_hex(&self, pos: Vec2) -> (i32, i32) {
        let p = pos - GRID_ORIGIN;
        let apothem = 3.0_f32.sqrt() / 2.0 * self.size;

        // Row first: its parity decides the horizontal lane offset.
        let r = (p.y / (1.5 * self.size)).round() as i32;
        let shift = if r.rem_euclid(2) == 1 { apothem } else { 0.0 };
        let q = ((p.x - shift) / (2.0 * apothem)).round() as i32;
        (q, r)
    }

    /// The six corner points of a hex centered at `center`, for drawing the
    /// cell polygon. Corners are 60° apart starting at −30°, which puts a
    /// vertex straight up (pointy-top) with flat edges left and right.
    pub fn hex_corners(&self, center: Vec2) -> [Vec2; 6] {
        let mut corners = [Vec2::ZERO; 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            let angle = (60.0 * i as f32 - 30.0).to_radians();
            *corner = center + self.size * Vec2::new(angle.cos(), angle.sin());
        }
        corners
    }

    // ── Iteration ────────────────────────────────────────────────────────────

    /// Visit every cell in row-major order (row 0 left to right, then row 1,
    /// …) with its coordinate, tile, and pixel center. This is the host's
    /// draw pass; the order is fixed so output is reproducible.
    pub fn for_each_tile(&self, mut f: impl FnMut(i32, i32, Tile, Vec2)) {
        for r in 0..self.height {
            for q in 0..self.width {
                let tile = self.tiles[self.index(q, r)];
                f(q, r, tile, self.hex_to_pixel(q, r));
            }
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
