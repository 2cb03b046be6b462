//! Engine constants and runtime configuration defaults

use crate::transform::kernels::EdgeOperator;

// Bounds iterative elimination on pathological inputs
/// Maximum quotient-reduction rounds per pivot column in `Matrix::det`
pub const MAX_REDUCTION_ROUNDS: usize = 4096;

// Palette quantization
/// Default number of palette entries for quantized output
pub const DEFAULT_QUANTIZE_COLORS: usize = 16;
/// Default cap on k-means refinement rounds
pub const DEFAULT_QUANTIZE_ITERATIONS: usize = 256;

// Default values for configurable parameters
/// Fixed seed for reproducible random fills and palettes
pub const DEFAULT_SEED: u64 = 42;

/// Operator behind the edge rendition when none is requested
pub const DEFAULT_EDGE_OPERATOR: EdgeOperator = EdgeOperator::Laplace12;
/// Side length of the default Laplacian-of-Gaussian kernel
pub const DEFAULT_LOG_SIZE: usize = 9;
/// Scale of the default Laplacian-of-Gaussian kernel
pub const DEFAULT_LOG_SCALE: f64 = 1.4;

// Output settings
/// Labels of the two halves produced by a horizontal bisection
pub const HORIZONTAL_HALF_LABELS: [&str; 2] = ["L", "R"];
/// Labels of the two halves produced by a vertical bisection
pub const VERTICAL_HALF_LABELS: [&str; 2] = ["T", "B"];
/// Suffix for the histogram-equalized rendition of a half
pub const EQUALIZED_SUFFIX: &str = "H";
/// Suffix for the edge map of a half
pub const EDGES_SUFFIX: &str = "E";
/// Suffix for the palettized rendition of a half
pub const QUANTIZED_SUFFIX: &str = "Q";
/// Extension of every written image
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
