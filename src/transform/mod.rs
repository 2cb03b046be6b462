//! Transforms built on the matrix engine

/// Histogram equalization of byte planes
pub mod histogram;
/// Kernel generators and edge operators
pub mod kernels;
/// Value-range remapping and saturating conversion
pub mod range;
/// Discrete Fourier transform and complex helpers
pub mod spectral;
