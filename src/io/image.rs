//! Loading and saving images through the `image` codecs

use crate::io::error::{RearrangeError, Result};
use crate::spatial::Dimensions;
use image::DynamicImage;
use std::path::Path;

/// Decode the image at `path`
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a decodable image
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| RearrangeError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the pixel dimensions of the image at `path` without decoding it
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its header is not recognised
pub fn read_dimensions(path: &Path) -> Result<Dimensions> {
    image::image_dimensions(path).map_err(|e| RearrangeError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Encode `image` to `path`, picking the format from the file extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The extension names no supported format
/// - The format cannot hold the image's colour type
/// - The file cannot be written
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RearrangeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| RearrangeError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
