//! Spatial layout of the tile grid
//!
//! This module contains:
//! - Grid geometry and index-to-pixel mapping
//! - Tile extraction and recomposition

/// Grid geometry and index-to-pixel mapping
pub mod grid;
/// Tile extraction and recomposition
pub mod tiles;

pub use grid::{Dimensions, TileGrid};
