//! Dense generic matrices and a pixel-format aware bridge between images and matrices
//!
//! Matrices carry integer, float or complex elements and support arithmetic,
//! elimination, strided convolution and spectral transforms. Rasters in any
//! supported pixel layout can be canonicalized, split into 8-bit planes,
//! quantized to a palette and cropped or tiled.

#![deny(unsafe_code)]

/// Descriptive statistics and windowed raster features
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Activation functions for elementwise maps
pub mod math;
/// Dense matrix storage, arithmetic, elimination and convolution
pub mod matrix;
/// Colour model, pixel layouts, planes and palette quantization
pub mod raster;
/// Rectangles, cropping, splitting and integer ranging
pub mod spatial;
/// Spectral transforms, kernels, range remapping and histograms
pub mod transform;

pub use io::error::{EngineError, Result};
pub use matrix::{Index2, Matrix};
