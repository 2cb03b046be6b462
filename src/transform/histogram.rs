//! Histogram equalization of single-byte planes

use image::GrayImage;

use crate::io::error::{EngineError, Result};
use crate::matrix::Matrix;
use crate::raster::planes::{gray_to_matrix, matrix_to_gray};

/// Number of distinct sample values in a byte plane
const BUCKETS: usize = 256;

/// Frequency of every byte value
pub fn histogram(plane: &Matrix<u8>) -> [u64; BUCKETS] {
    let mut counts = [0_u64; BUCKETS];
    for value in plane.values() {
        if let Some(count) = counts.get_mut(usize::from(value)) {
            *count += 1;
        }
    }
    counts
}

/// Remap samples through their cumulative distribution scaled to `[0, 255]`
///
/// Bucket `i` maps to `(before(i) · 255 + count(i) · i) / total`, rounding an
/// exact half up. A constant plane is returned unchanged.
///
/// # Errors
///
/// Returns `EmptyPlane` if the plane holds no samples
pub fn equalize(plane: &Matrix<u8>) -> Result<Matrix<u8>> {
    let counts = histogram(plane);
    let mut lookup = [0_u64; BUCKETS];
    let mut total = 0_u64;
    for (bucket, (entry, &count)) in lookup.iter_mut().zip(&counts).enumerate() {
        *entry = total * 255 + count * bucket as u64;
        total += count;
    }
    if total == 0 {
        return Err(EngineError::EmptyPlane {
            operation: "equalize",
        });
    }

    let remapped = lookup.map(|cumulative| {
        let mut level = cumulative / total;
        if (cumulative % total) * 2 >= total {
            level += 1;
        }
        u8::try_from(level).unwrap_or(u8::MAX)
    });
    Ok(plane.map(|value| {
        remapped
            .get(usize::from(value))
            .copied()
            .unwrap_or(value)
    }))
}

/// [`equalize`] applied to a grayscale image
///
/// # Errors
///
/// Returns `EmptyPlane` for a zero-sized image
pub fn equalize_plane(plane: &GrayImage) -> Result<GrayImage> {
    let equalized = equalize(&gray_to_matrix(plane))?;
    Ok(matrix_to_gray(&equalized))
}
