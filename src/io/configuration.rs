//! Constants and runtime configuration defaults

/// Message carried by every invalid configuration error
pub const INVALID_CONFIGURATION_MESSAGE: &str =
    "The tile size or ordering are not valid for the given image";

// Default values for configurable parameters
/// Fixed seed for reproducible shuffles
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_rearranged";

/// Separator between width and height in a tile size argument (`16x8`)
pub const TILE_SIZE_SEPARATOR: char = 'x';

/// Separator between indices in an ordering argument (`3,2,1,0`)
pub const ORDERING_SEPARATOR: char = ',';

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
