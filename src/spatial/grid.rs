//! Tile grid geometry shared by extraction and recomposition
//!
//! A grid is implicit: it is derived from the image size and the tile size,
//! laid out row-major with tile 0 in the top-left corner. Every conversion
//! from a linear tile index to pixels goes through [`grid_position`] so that
//! cutting and pasting always agree on where a tile lives.

/// Pixel dimensions as `(width, height)`
pub type Dimensions = (u32, u32);

/// Uniform grid of tiles covering an image exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    tile_size: Dimensions,
    tiles_per_row: u32,
    tiles_per_column: u32,
}

impl TileGrid {
    /// Build the grid for an image, if the tile size divides it evenly
    ///
    /// Returns `None` when either tile component is zero or leaves a remainder.
    pub const fn new(image_size: Dimensions, tile_size: Dimensions) -> Option<Self> {
        let (image_width, image_height) = image_size;
        let (tile_width, tile_height) = tile_size;

        // checked_rem yields None for a zero divisor
        match (
            image_width.checked_rem(tile_width),
            image_height.checked_rem(tile_height),
        ) {
            (Some(0), Some(0)) => Some(Self {
                tile_size,
                tiles_per_row: image_width / tile_width,
                tiles_per_column: image_height / tile_height,
            }),
            _ => None,
        }
    }

    /// Tile size in pixels
    pub const fn tile_size(&self) -> Dimensions {
        self.tile_size
    }

    /// Number of tiles along the horizontal axis
    pub const fn tiles_per_row(&self) -> u32 {
        self.tiles_per_row
    }

    /// Number of tiles along the vertical axis
    pub const fn tiles_per_column(&self) -> u32 {
        self.tiles_per_column
    }

    /// Total number of tiles in the grid
    pub const fn tile_count(&self) -> usize {
        self.tiles_per_row as usize * self.tiles_per_column as usize
    }
}

/// Row and column of a linear tile index
///
/// A zero `tiles_per_row` maps every index to `(0, 0)` rather than dividing by zero.
pub const fn grid_position(tile_index: usize, tiles_per_row: u32) -> (usize, usize) {
    let per_row = tiles_per_row as usize;
    match (tile_index.checked_div(per_row), tile_index.checked_rem(per_row)) {
        (Some(row), Some(col)) => (row, col),
        _ => (0, 0),
    }
}

/// Top-left pixel of the tile at `tile_index` for tiles of `tile_size`
pub const fn tile_origin(
    tile_index: usize,
    tiles_per_row: u32,
    tile_size: Dimensions,
) -> (u32, u32) {
    let (row, col) = grid_position(tile_index, tiles_per_row);
    (
        (col as u32).saturating_mul(tile_size.0),
        (row as u32).saturating_mul(tile_size.1),
    )
}
