//! Palettes and iterative palette quantization

use log::{debug, warn};
use rand::Rng;

use crate::io::error::{Result, invalid_parameter};
use crate::raster::canonical::MAX_PALETTE;
use crate::raster::color::{Rgba64, TRANSPARENT, color_distance, random_color};
use crate::raster::surface::{Raster, Surface};
use crate::spatial::rect::Rect;

/// Ordered colour table addressed by byte indices
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette(pub Vec<Rgba64>);

impl Palette {
    /// Index of the nearest entry, the lowest index among equals
    ///
    /// Distance is the sum over channels of the squared 16-bit difference
    /// divided by four. An empty palette answers zero.
    pub fn index(&self, color: Rgba64) -> usize {
        let mut best = (0, u64::MAX);
        for (i, entry) in self.0.iter().enumerate() {
            let distance: u64 = entry
                .0
                .iter()
                .zip(color.0.iter())
                .map(|(&a, &b)| {
                    let d = u64::from(a.abs_diff(b));
                    (d * d) >> 2
                })
                .sum();
            if distance == 0 {
                return i;
            }
            if distance < best.1 {
                best = (i, distance);
            }
        }
        best.0
    }

    /// Summed squared distance between same-position entries
    ///
    /// Palettes of different length are maximally distant.
    pub fn distance(&self, other: &Self) -> u64 {
        if self.0.len() != other.0.len() {
            return u64::MAX;
        }
        self.0
            .iter()
            .zip(&other.0)
            .map(|(&a, &b)| color_distance(a, b))
            .fold(0, u64::saturating_add)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the palette has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome of [`palletize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantization {
    /// Paletted, origin-anchored rendition of the source
    pub surface: Surface,
    /// Palette refinements applied
    pub iterations: usize,
    /// Whether a refinement pass left the palette unchanged
    pub converged: bool,
}

/// Quantize a raster to `n` colours by iterative centroid refinement
///
/// Starts from `n` random colours. Each pass assigns every pixel to its
/// nearest entry and replaces each entry by the truncated per-channel mean of
/// its pixels; entries with no pixels become transparent. Refinement stops
/// when a pass reproduces the palette exactly or after `max_iterations`
/// refinements, in which case the result is reported as not converged.
///
/// # Errors
///
/// Returns `InvalidParameter` if `n` is outside `1..=256` or
/// `max_iterations` is zero
pub fn palletize<R: Rng>(
    raster: &dyn Raster,
    n: usize,
    rng: &mut R,
    max_iterations: usize,
) -> Result<Quantization> {
    if n == 0 || n > MAX_PALETTE {
        return Err(invalid_parameter("n", &n, &"must be between 1 and 256"));
    }
    if max_iterations == 0 {
        return Err(invalid_parameter(
            "max_iterations",
            &max_iterations,
            &"must be at least 1",
        ));
    }

    let bounds = raster.bounds();
    let rect = Rect::from_size(bounds.width(), bounds.height());
    let pixels: Vec<Rgba64> = bounds
        .points()
        .map(|(x, y)| raster.rgba64_at(x, y))
        .collect();
    let mut palette = Palette((0..n).map(|_| random_color(rng)).collect());
    if pixels.is_empty() {
        return Ok(Quantization {
            surface: Surface::paletted(rect, palette.0),
            iterations: 0,
            converged: true,
        });
    }

    let mut indices = vec![0_u8; pixels.len()];
    let mut iterations = 0;
    let converged = loop {
        let next = refine(&palette, &pixels, &mut indices);
        if next == palette {
            break true;
        }
        palette = next;
        iterations += 1;
        debug!("palletize: refinement {iterations} of {n} colours");
        if iterations >= max_iterations {
            warn!("palletize: stopped after {max_iterations} refinements without a fixed point");
            assign(&palette, &pixels, &mut indices);
            break false;
        }
    };

    let mut surface = Surface::paletted(rect, palette.0);
    for ((x, y), index) in rect.points().zip(indices) {
        surface.set_index(x, y, index);
    }
    Ok(Quantization {
        surface,
        iterations,
        converged,
    })
}

fn assign(palette: &Palette, pixels: &[Rgba64], indices: &mut [u8]) {
    for (slot, &color) in indices.iter_mut().zip(pixels) {
        *slot = u8::try_from(palette.index(color)).unwrap_or(u8::MAX);
    }
}

/// Assign pixels to `palette` and return the centroid palette
fn refine(palette: &Palette, pixels: &[Rgba64], indices: &mut [u8]) -> Palette {
    assign(palette, pixels, indices);
    let mut sums = vec![[0_u64; 4]; palette.len()];
    let mut counts = vec![0_u64; palette.len()];
    for (&index, color) in indices.iter().zip(pixels) {
        let i = usize::from(index);
        if let (Some(sum), Some(count)) = (sums.get_mut(i), counts.get_mut(i)) {
            for (total, &channel) in sum.iter_mut().zip(color.0.iter()) {
                *total += u64::from(channel);
            }
            *count += 1;
        }
    }
    Palette(
        sums.iter()
            .zip(&counts)
            .map(|(sum, &count)| {
                if count == 0 {
                    return TRANSPARENT;
                }
                image::Rgba(sum.map(|total| (total / count) as u16))
            })
            .collect(),
    )
}
