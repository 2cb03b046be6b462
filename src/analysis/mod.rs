//! Descriptive statistics and windowed raster features

/// Left/right windowed covariance and per-plane surface convolution
pub mod features;
/// Means, median, mode, variance and covariance over samples
pub mod statistics;
