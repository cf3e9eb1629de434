//! Rearranging an image's tiles into a new order
//!
//! The pipeline is: validate the inputs against the image size, cut one tile
//! per ordering entry, paste the tiles back in sequence order, and save. Nothing
//! is extracted or written when validation fails.

use crate::algorithm::validation::validate;
use crate::io::error::Result;
use crate::io::image::{load_image, save_image};
use crate::io::progress::ProgressManager;
use crate::spatial::Dimensions;
use crate::spatial::tiles::{TileBuffer, extract_tile, recompose_image};
use image::{DynamicImage, Pixel};
use std::path::Path;

/// Rearrange the tiles of a pixel buffer
///
/// Output position `i` receives the source tile `ordering[i]`.
///
/// # Errors
///
/// Returns [`RearrangeError::InvalidConfiguration`](crate::RearrangeError::InvalidConfiguration)
/// if the tile size or ordering do not fit the image
pub fn rearrange_buffer<P>(
    image: &TileBuffer<P>,
    tile_size: Dimensions,
    ordering: &[usize],
    progress: Option<&ProgressManager>,
) -> Result<TileBuffer<P>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    let grid = validate(image.dimensions(), tile_size, ordering)?;
    let tiles_per_row = grid.tiles_per_row();

    let tiles: Vec<TileBuffer<P>> = ordering
        .iter()
        .map(|&tile_index| {
            let tile = extract_tile(image, tile_size, tile_index, tiles_per_row);
            if let Some(pm) = progress {
                pm.tile_extracted();
            }
            tile
        })
        .collect();

    Ok(recompose_image(image, &tiles, tiles_per_row))
}

/// Rearrange the tiles of a decoded image, keeping its colour type
///
/// # Errors
///
/// Returns [`RearrangeError::InvalidConfiguration`](crate::RearrangeError::InvalidConfiguration)
/// if the tile size or ordering do not fit the image
pub fn rearrange_image(
    image: &DynamicImage,
    tile_size: Dimensions,
    ordering: &[usize],
) -> Result<DynamicImage> {
    rearrange_dynamic(image, tile_size, ordering, None)
}

fn rearrange_dynamic(
    image: &DynamicImage,
    tile_size: Dimensions,
    ordering: &[usize],
    progress: Option<&ProgressManager>,
) -> Result<DynamicImage> {
    let rearranged = match image {
        DynamicImage::ImageLuma8(buffer) => {
            DynamicImage::ImageLuma8(rearrange_buffer(buffer, tile_size, ordering, progress)?)
        }
        DynamicImage::ImageLumaA8(buffer) => {
            DynamicImage::ImageLumaA8(rearrange_buffer(buffer, tile_size, ordering, progress)?)
        }
        DynamicImage::ImageRgb8(buffer) => {
            DynamicImage::ImageRgb8(rearrange_buffer(buffer, tile_size, ordering, progress)?)
        }
        DynamicImage::ImageRgba8(buffer) => {
            DynamicImage::ImageRgba8(rearrange_buffer(buffer, tile_size, ordering, progress)?)
        }
        DynamicImage::ImageLuma16(buffer) => {
            DynamicImage::ImageLuma16(rearrange_buffer(buffer, tile_size, ordering, progress)?)
        }
        DynamicImage::ImageLumaA16(buffer) => {
            DynamicImage::ImageLumaA16(rearrange_buffer(buffer, tile_size, ordering, progress)?)
        }
        DynamicImage::ImageRgb16(buffer) => {
            DynamicImage::ImageRgb16(rearrange_buffer(buffer, tile_size, ordering, progress)?)
        }
        DynamicImage::ImageRgba16(buffer) => {
            DynamicImage::ImageRgba16(rearrange_buffer(buffer, tile_size, ordering, progress)?)
        }
        DynamicImage::ImageRgb32F(buffer) => {
            DynamicImage::ImageRgb32F(rearrange_buffer(buffer, tile_size, ordering, progress)?)
        }
        DynamicImage::ImageRgba32F(buffer) => {
            DynamicImage::ImageRgba32F(rearrange_buffer(buffer, tile_size, ordering, progress)?)
        }
        // Colour types added to the codec later fall back to 16-bit RGBA
        other => DynamicImage::ImageRgba16(rearrange_buffer(
            &other.to_rgba16(),
            tile_size,
            ordering,
            progress,
        )?),
    };

    Ok(rearranged)
}

/// Rearrange the image at `image_path` and save the result to `out_path`
///
/// The image is split into tiles of `tile_size` and output position `i`
/// receives source tile `ordering[i]`.
///
/// # Errors
///
/// Returns an error if:
/// - The source image cannot be loaded
/// - The tile size or ordering do not fit the image (nothing is written)
/// - The result cannot be saved
pub fn rearrange_tiles(
    image_path: &Path,
    tile_size: Dimensions,
    ordering: &[usize],
    out_path: &Path,
) -> Result<()> {
    rearrange_tiles_with_progress(image_path, tile_size, ordering, out_path, None)
}

/// Like [`rearrange_tiles`], reporting each extracted tile to `progress`
///
/// # Errors
///
/// Same conditions as [`rearrange_tiles`]
pub fn rearrange_tiles_with_progress(
    image_path: &Path,
    tile_size: Dimensions,
    ordering: &[usize],
    out_path: &Path,
    progress: Option<&ProgressManager>,
) -> Result<()> {
    let image = load_image(image_path)?;
    let rearranged = rearrange_dynamic(&image, tile_size, ordering, progress)?;
    drop(image);

    save_image(&rearranged, out_path)
}
