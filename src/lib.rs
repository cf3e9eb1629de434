//! Rearrange the tiles of an image into a new order
//!
//! An image is cut into a uniform grid of rectangular tiles, the tiles are
//! reassembled in the order given by a permutation, and the result is written
//! to a new image file. Tile size and ordering are checked against the image
//! before any pixel is touched.

#![forbid(unsafe_code)]

/// Validation, orderings and the rearrangement pipeline
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tile grid geometry, extraction and recomposition
pub mod spatial;

pub use algorithm::rearrange::{rearrange_image, rearrange_tiles};
pub use algorithm::validation::valid_input;
pub use io::error::{RearrangeError, Result};
pub use spatial::Dimensions;
