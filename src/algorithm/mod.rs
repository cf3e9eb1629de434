//! Validation, orderings and the rearrangement pipeline

/// Orderings over tile indices
pub mod permutation;
/// The rearrangement pipeline from source image to saved result
pub mod rearrange;
/// Geometric compatibility checks
pub mod validation;
