//! Geometry and tiling utilities
//!
//! This module contains spatial-related functionality including:
//! - Half-open pixel rectangles
//! - Cropping through native sub-regions or clamped views
//! - Fair-remainder grid splitting and bisection
//! - Quotient-remainder ranging and gcd/lcm

/// Cropping of rasters to rectangles
pub mod crop;
/// Quotient-remainder stepping, gcd and lcm
pub mod ranging;
/// Half-open pixel rectangles
pub mod rect;
/// Grid and bisection splitting
pub mod split;

pub use crop::{Crop, CroppedView, crop};
pub use rect::Rect;
pub use split::{split_n, split2};
