//! Command-line interface for rearranging the tiles of one image

use crate::algorithm::permutation::{inverse, shuffled};
use crate::algorithm::rearrange::rearrange_tiles_with_progress;
use crate::io::configuration::{
    DEFAULT_SEED, ORDERING_SEPARATOR, OUTPUT_SUFFIX, TILE_SIZE_SEPARATOR,
};
use crate::io::error::{Result, invalid_configuration, invalid_parameter};
use crate::io::image::read_dimensions;
use crate::io::progress::ProgressManager;
use crate::spatial::{Dimensions, TileGrid};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "retile")]
#[command(
    author,
    version,
    about = "Cut an image into tiles and reassemble them in a given order"
)]
/// Command-line arguments for the rearrangement tool
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Tile size in pixels, such as 16x8, or a single number for square tiles
    #[arg(short, long, value_parser = parse_tile_size)]
    pub tile_size: Dimensions,

    /// Comma-separated source tile index for each output position
    #[arg(
        short = 'O',
        long,
        value_delimiter = ORDERING_SEPARATOR,
        required_unless_present = "shuffle"
    )]
    pub order: Vec<usize>,

    /// Use a random ordering instead of --order
    #[arg(short = 'S', long, conflicts_with = "order")]
    pub shuffle: bool,

    /// Random seed for reproducible shuffles
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Apply the inverse of the ordering, undoing an earlier rearrangement
    #[arg(short, long)]
    pub inverse: bool,

    /// Output image path (defaults to <input>_rearranged.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process the file even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if an existing output file should be left alone
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Destination for the rearranged image
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.target))
    }
}

/// Parse `WIDTHxHEIGHT` or `SIZE` into tile dimensions
///
/// # Errors
///
/// Returns a message if a component is not a positive integer
pub fn parse_tile_size(text: &str) -> std::result::Result<Dimensions, String> {
    let parse_component = |component: &str| match component.trim().parse::<u32>() {
        Ok(0) => Err(format!("tile dimensions must be positive, got '{text}'")),
        Ok(value) => Ok(value),
        Err(e) => Err(format!("invalid tile dimension '{component}': {e}")),
    };

    match text.split_once(TILE_SIZE_SEPARATOR) {
        Some((width, height)) => Ok((parse_component(width)?, parse_component(height)?)),
        None => {
            let side = parse_component(text)?;
            Ok((side, side))
        }
    }
}

/// Default output path: `<stem>_rearranged.<ext>` beside the input
pub fn default_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = match input_path.extension() {
        Some(extension) => format!(
            "{}{OUTPUT_SUFFIX}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        ),
        None => format!("{}{OUTPUT_SUFFIX}", stem.to_string_lossy()),
    };

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Drives a single rearrangement from parsed arguments
pub struct TileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl TileProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Rearrange the target image according to the CLI arguments
    ///
    /// Returns the ordering that was applied, or `None` when the target was
    /// skipped because its output already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is missing or unreadable, the tile size
    /// or ordering do not fit the image, or the output cannot be written
    pub fn process(&mut self) -> Result<Option<Vec<usize>>> {
        if !self.cli.target.is_file() {
            return Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be an existing image file",
            ));
        }

        let output_path = self.cli.output_path();
        if !self.should_process(&output_path) {
            return Ok(None);
        }

        let image_size = read_dimensions(&self.cli.target)?;
        let ordering = self.resolve_ordering(image_size)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start(&self.cli.target, ordering.len());
        }

        rearrange_tiles_with_progress(
            &self.cli.target,
            self.cli.tile_size,
            &ordering,
            &output_path,
            self.progress_manager.as_ref(),
        )?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        if self.cli.shuffle {
            self.report_ordering(&ordering);
        }

        Ok(Some(ordering))
    }

    fn resolve_ordering(&self, image_size: Dimensions) -> Result<Vec<usize>> {
        let ordering = if self.cli.shuffle {
            let grid = TileGrid::new(image_size, self.cli.tile_size).ok_or_else(|| {
                invalid_configuration(image_size, self.cli.tile_size, &self.cli.order)
            })?;
            shuffled(grid.tile_count(), self.cli.seed)
        } else {
            self.cli.order.clone()
        };

        if self.cli.inverse {
            inverse(&ordering)
                .ok_or_else(|| invalid_configuration(image_size, self.cli.tile_size, &ordering))
        } else {
            Ok(ordering)
        }
    }

    fn should_process(&self, output_path: &Path) -> bool {
        if !self.cli.skip_existing() || !output_path.exists() {
            return true;
        }

        // Allow print for user feedback on skipped files
        #[allow(clippy::print_stderr)]
        if !self.cli.quiet {
            eprintln!(
                "Skipping: {} (output exists at {})",
                self.cli.target.display(),
                output_path.display()
            );
        }
        false
    }

    // Allow print so a random ordering can be replayed or inverted later
    #[allow(clippy::print_stdout)]
    fn report_ordering(&self, ordering: &[usize]) {
        if self.cli.quiet {
            return;
        }

        let joined = ordering
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(&ORDERING_SEPARATOR.to_string());
        println!("{joined}");
    }
}
