//! Command-line interface for batch bisection, equalization and edge maps

use crate::io::configuration::{
    DEFAULT_EDGE_OPERATOR, DEFAULT_QUANTIZE_COLORS, DEFAULT_QUANTIZE_ITERATIONS, DEFAULT_SEED,
    EDGES_SUFFIX, EQUALIZED_SUFFIX, HORIZONTAL_HALF_LABELS, OUTPUT_EXTENSION, QUANTIZED_SUFFIX,
    VERTICAL_HALF_LABELS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_surface, save_image};
use crate::io::progress::ProgressManager;
use crate::matrix::Matrix;
use crate::raster::palette::palletize;
use crate::raster::planes::{planes_to_rgb, rgba_planes};
use crate::raster::surface::Raster;
use crate::spatial::split::split2;
use crate::transform::histogram::equalize;
use crate::transform::kernels::EdgeOperator;
use crate::transform::range::absolutize;
use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

/// Extensions picked up when the target is a directory
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

#[derive(Parser)]
#[command(name = "rastermatrix")]
#[command(
    author,
    version,
    about = "Bisect images and write equalized and edge-detected halves"
)]
/// Command-line arguments for the batch tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible palettes
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Bisect into top and bottom halves instead of left and right
    #[arg(short, long)]
    pub vertical: bool,

    /// Kernel used for the edge rendition of each half
    #[arg(short, long, value_enum, default_value_t = DEFAULT_EDGE_OPERATOR)]
    pub edges: EdgeOperator,

    /// Also write an N-colour palettized rendition of each half (0 for the default)
    #[arg(short = 'Q', long, value_name = "N")]
    pub quantize: Option<usize>,
}

impl Cli {
    /// Check if existing output directories should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Labels for the two halves of a bisection
    pub const fn half_labels(&self) -> [&'static str; 2] {
        if self.vertical {
            VERTICAL_HALF_LABELS
        } else {
            HORIZONTAL_HALF_LABELS
        }
    }

    /// Palette size for quantized output, if requested
    pub const fn palette_size(&self) -> Option<usize> {
        match self.quantize {
            Some(0) => Some(DEFAULT_QUANTIZE_COLORS),
            other => other,
        }
    }

    /// Images written per half
    pub const fn outputs_per_half(&self) -> usize {
        if self.quantize.is_some() { 4 } else { 3 }
    }
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    rng: StdRng,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let rng = StdRng::seed_from_u64(cli.seed);

        Self {
            cli,
            rng,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, decoding or writing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"file must be a png, jpeg or gif image",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if path.is_file() && is_image(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or a directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if output_dir(input_path).exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, 2 * self.cli.outputs_per_half());
        }

        let surface = load_surface(input_path)?;
        let dir = output_dir(input_path);
        debug!("process_file: {} into {}", input_path.display(), dir.display());

        let halves = split2(&surface, self.cli.vertical);
        for (half, label) in halves.iter().zip(self.cli.half_labels()) {
            if half.bounds().is_empty() {
                continue;
            }
            let named = |suffix: &str| dir.join(format!("{label}{suffix}.{OUTPUT_EXTENSION}"));
            self.write(index, half, &named(""))?;

            let [r, g, b, _] = rgba_planes(half);
            let equalized = planes_to_rgb(&[equalize(&r)?, equalize(&g)?, equalize(&b)?])?;
            self.write(index, &equalized, &named(EQUALIZED_SUFFIX))?;

            let operator = self.cli.edges;
            let edges = planes_to_rgb(&[
                edge_map(&r, operator)?,
                edge_map(&g, operator)?,
                edge_map(&b, operator)?,
            ])?;
            self.write(index, &edges, &named(EDGES_SUFFIX))?;

            if let Some(colors) = self.cli.palette_size() {
                let quantized =
                    palletize(half, colors, &mut self.rng, DEFAULT_QUANTIZE_ITERATIONS)?;
                self.write(index, &quantized.surface, &named(QUANTIZED_SUFFIX))?;
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn write(&mut self, index: usize, raster: &dyn Raster, path: &Path) -> Result<()> {
        save_image(raster, path)?;
        if let Some(ref mut pm) = self.progress_manager {
            pm.output_written(index);
        }
        Ok(())
    }
}

/// Absolute response to `operator` scaled into `[0, 255]`
///
/// Planes smaller than the kernel give an all-zero map of the same size.
///
/// # Errors
///
/// Propagates failures from [`Matrix::conv`]
pub fn edge_map(plane: &Matrix<u8>, operator: EdgeOperator) -> Result<Matrix<u8>> {
    let kernel = operator.kernel();
    if plane.width() < kernel.width() || plane.height() < kernel.height() {
        return Ok(Matrix::new(plane.width(), plane.height()));
    }
    Ok(absolutize(&plane.convert::<f64>().conv(&kernel, 1, 1)?))
}

/// Directory receiving the outputs for `input_path`, named after its stem
pub fn output_dir(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    input_path
        .parent()
        .map_or_else(|| PathBuf::from(stem), |parent| parent.join(stem))
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
