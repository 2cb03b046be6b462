//! Image/matrix bridge
//!
//! This module contains the raster side of the engine:
//! - Colour model and surface layouts
//! - Canonicalization and RGBA regularization
//! - Plane extraction and recombination
//! - Palette quantization

/// Minimal origin-anchored surface copies
pub mod canonical;
/// 16-bit premultiplied colour model and conversions
pub mod color;
/// Palettes and palette quantization
pub mod palette;
/// Byte planes and their matrix bridge
pub mod planes;
/// Regularization to 8-bit premultiplied RGBA
pub mod regularize;
/// Surfaces, layouts and the raster trait
pub mod surface;

pub use canonical::canonicalize;
pub use color::Rgba64;
pub use palette::{Palette, Quantization, palletize};
pub use planes::{Channel, dimensions};
pub use regularize::to_rgba;
pub use surface::{Layout, PackedFormat, Raster, SubsampleRatio, Surface, YCbCrPlanes};
