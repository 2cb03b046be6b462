//! Grid and bisection splitting of rasters
//!
//! Remainders are spread with a running carry so cells in one row or column
//! differ by at most one pixel, larger cells landing right and bottom first
//! whenever the carry wraps.

use log::debug;

use crate::raster::surface::Raster;
use crate::spatial::crop::{Crop, crop};
use crate::spatial::ranging::range_qr;
use crate::spatial::rect::Rect;

/// Cut `[start, start + length)` into `parts` spans with a running remainder
///
/// Span boundaries come from [`range_qr`], so sizes differ by at most one.
pub fn fair_spans(start: i32, length: usize, parts: usize) -> Vec<(i32, i32)> {
    let (Ok(n), Ok(length)) = (i64::try_from(parts), i64::try_from(length)) else {
        return Vec::new();
    };
    if n == 0 {
        return Vec::new();
    }
    let lo = i64::from(start);
    let hi = lo.saturating_add(length);
    let mut cuts: Vec<i64> = range_qr(lo, hi, n).map(|(q, _)| q).collect();
    // An empty range yields no steps, leaving every span empty
    cuts.resize(parts, hi);
    cuts.push(hi);
    cuts.windows(2)
        .filter_map(|pair| match *pair {
            [a, b] => Some((saturate_coord(a), saturate_coord(b))),
            _ => None,
        })
        .collect()
}

fn saturate_coord(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

/// Split into `rows` by `columns` cells, returned row-major
///
/// Zero cells or an empty raster give an empty grid.
pub fn split_n(source: &dyn Raster, columns: usize, rows: usize) -> Vec<Vec<Crop<'_>>> {
    let bounds = source.bounds();
    if columns == 0 || rows == 0 || bounds.is_empty() {
        return Vec::new();
    }
    debug!("split_n: {bounds} into {columns}x{rows} cells");
    let xs = fair_spans(bounds.min[0], bounds.width(), columns);
    fair_spans(bounds.min[1], bounds.height(), rows)
        .into_iter()
        .map(|(y0, y1)| {
            xs.iter()
                .map(|&(x0, x1)| crop(source, &Rect::new(x0, y0, x1, y1)))
                .collect()
        })
        .collect()
}

/// Bisect into two halves, the first receiving the floor of the midpoint
///
/// `vertical` stacks the halves top and bottom; otherwise they sit left and
/// right.
pub fn split2(source: &dyn Raster, vertical: bool) -> [Crop<'_>; 2] {
    let b = source.bounds();
    let (first, second) = if vertical {
        let mid = midpoint(b.min[1], b.max[1]);
        (
            Rect::new(b.min[0], b.min[1], b.max[0], mid),
            Rect::new(b.min[0], mid, b.max[0], b.max[1]),
        )
    } else {
        let mid = midpoint(b.min[0], b.max[0]);
        (
            Rect::new(b.min[0], b.min[1], mid, b.max[1]),
            Rect::new(mid, b.min[1], b.max[0], b.max[1]),
        )
    };
    [crop(source, &first), crop(source, &second)]
}

const fn midpoint(lo: i32, hi: i32) -> i32 {
    ((lo as i64 + hi as i64).div_euclid(2)) as i32
}
