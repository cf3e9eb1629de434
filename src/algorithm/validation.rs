//! Geometric compatibility between an image, a tile size and an ordering

use crate::algorithm::permutation::is_permutation;
use crate::io::error::{Result, invalid_configuration};
use crate::spatial::{Dimensions, TileGrid};

/// Check that the inputs allow the image to be rearranged
///
/// All of the following must hold:
/// - the tile size is non-zero and divides the image width and height
/// - the ordering has one entry per tile
/// - the ordering uses each tile index exactly once
pub fn valid_input(image_size: Dimensions, tile_size: Dimensions, ordering: &[usize]) -> bool {
    validate(image_size, tile_size, ordering).is_ok()
}

/// Build the tile grid for valid inputs
///
/// # Errors
///
/// Returns [`RearrangeError::InvalidConfiguration`](crate::RearrangeError::InvalidConfiguration)
/// under exactly the conditions where [`valid_input`] returns `false`
pub fn validate(
    image_size: Dimensions,
    tile_size: Dimensions,
    ordering: &[usize],
) -> Result<TileGrid> {
    TileGrid::new(image_size, tile_size)
        .filter(|grid| grid.tile_count() == ordering.len() && is_permutation(ordering))
        .ok_or_else(|| invalid_configuration(image_size, tile_size, ordering))
}
