//! Dense numeric matrix engine
//!
//! This module contains the generic matrix and its operation set:
//! - Storage, element access and structural reshaping
//! - Scalar, elementwise and product arithmetic
//! - Elementary transforms, determinant and inverse
//! - Convolution, deconvolution and same-size filtering

/// Scalar, elementwise and matrix-product arithmetic
pub mod arithmetic;
/// Strided convolution and its adjoint
pub mod convolution;
/// Matrix storage, access, iteration and reshaping
pub mod dense;
/// Numeric capabilities required of elements
pub mod element;
/// Elementary row/column transforms, determinant and inverse
pub mod elimination;
/// Text rendering
pub mod format;
/// Randomly filled constructors
pub mod random;

pub use dense::{Elements, Index2, Matrix, Windows};
pub use element::{Real, Scalar, compare_nan_low};
pub use elimination::Axis;
