//! Windowed features computed over raster planes

use log::debug;

use crate::analysis::statistics::{Estimator, covariance};
use crate::io::error::Result;
use crate::matrix::Matrix;
use crate::raster::planes::{planes_to_rgba, rgba_planes};
use crate::raster::surface::{Raster, Surface};
use crate::spatial::split::split2;
use crate::transform::range::shrink_u8;

/// Covariance between matching windows of the left and right halves
///
/// The raster is bisected into left and right halves and both are read as
/// RGBA planes. A `width` by `height` window slides over the right half in
/// steps of `(dx, dy)`; for each position the population covariance with the
/// window at the same offset in the left half lands in cell `(x / dx, y / dy)`
/// of the channel's output. Windows that overrun the left half leave their
/// cell at zero. Channels are returned in R, G, B, A order.
///
/// # Errors
///
/// Returns `InvalidStep` for a zero step and `OutOfBounds` for a window with
/// a zero dimension
pub fn lr_covariance(
    raster: &dyn Raster,
    width: usize,
    height: usize,
    dx: usize,
    dy: usize,
) -> Result<[Matrix<f64>; 4]> {
    let [left, right] = split2(raster, false);
    let left = rgba_planes(&left);
    let right = rgba_planes(&right);

    let mut covs: [Matrix<f64>; 4] = Default::default();
    for ((cov, l), r) in covs.iter_mut().zip(&left).zip(&right) {
        let windows = r.windows(dx, dy, width, height)?;
        let (Some(cols), Some(rows)) = (
            r.width().checked_sub(width),
            r.height().checked_sub(height),
        ) else {
            continue;
        };
        *cov = Matrix::new(cols / dx + 1, rows / dy + 1);
        for (at, window) in windows {
            let Ok(mirror) = l.sub_matrix(at.x, at.y, at.x + width, at.y + height) else {
                continue;
            };
            let value = covariance(
                Estimator::Population,
                &mirror.to_vec(),
                &window.to_vec(),
            );
            cov.assign(at.x / dx, at.y / dy, value)?;
        }
    }
    debug!(
        "lr_covariance: {}x{} windows over {}",
        width,
        height,
        raster.bounds()
    );
    Ok(covs)
}

/// Convolve every RGBA plane with an integer kernel
///
/// Each plane is widened to `i32`, convolved with stride `(dx, dy)` and
/// saturated back into `[0, 255]`. The result is an RGBA surface at the
/// origin sized by the convolution output.
///
/// # Errors
///
/// Propagates `InvalidStep` and `LargeKernel` from [`Matrix::conv`]
pub fn convolve_surface(
    raster: &dyn Raster,
    kernel: &Matrix<i32>,
    dx: usize,
    dy: usize,
) -> Result<Surface> {
    let [r, g, b, a] = rgba_planes(raster);
    let convolve = |plane: Matrix<u8>| -> Result<Matrix<u8>> {
        Ok(shrink_u8(&plane.convert::<i32>().conv(kernel, dx, dy)?))
    };
    planes_to_rgba(&[convolve(r)?, convolve(g)?, convolve(b)?, convolve(a)?])
}
