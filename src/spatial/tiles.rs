//! Cutting tiles out of an image and pasting them back into a fresh canvas
//!
//! Both directions place tiles with [`tile_origin`], so a tile cut from index
//! `k` and pasted at sequence position `k` lands exactly where it came from.

use crate::spatial::grid::{Dimensions, tile_origin};
use image::{GenericImageView, ImageBuffer, Pixel, imageops};

/// Owned pixel buffer holding one tile or a whole recomposed image
pub type TileBuffer<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Copy out the tile at `tile_index`
///
/// No validation is done here. A rectangle reaching past the image edge is
/// clipped to what the image holds.
pub fn extract_tile<I>(
    image: &I,
    tile_size: Dimensions,
    tile_index: usize,
    tiles_per_row: u32,
) -> TileBuffer<I::Pixel>
where
    I: GenericImageView + 'static,
{
    let (left, top) = tile_origin(tile_index, tiles_per_row, tile_size);
    imageops::crop_imm(image, left, top, tile_size.0, tile_size.1).to_image()
}

/// Paste `tiles` in sequence order onto a blank canvas sized like `reference`
///
/// The tile at position `i` goes to grid position `i`, using that tile's own
/// dimensions. Pixels are copied without blending. Tiles that fall outside the
/// canvas are clipped.
pub fn recompose_image<I, P>(
    reference: &I,
    tiles: &[TileBuffer<P>],
    tiles_per_row: u32,
) -> TileBuffer<P>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel,
{
    let (width, height) = reference.dimensions();
    let mut canvas: TileBuffer<P> = ImageBuffer::new(width, height);

    for (position, tile) in tiles.iter().enumerate() {
        let (left, top) = tile_origin(position, tiles_per_row, tile.dimensions());
        imageops::replace(&mut canvas, tile, i64::from(left), i64::from(top));
    }

    canvas
}
