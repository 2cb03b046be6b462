//! Minimal origin-anchored copies of surfaces
//!
//! A canonical copy keeps the layout of its source but drops stride padding
//! and moves the bounds to start at `(0, 0)`. Rasters that are not concrete
//! surfaces are read pixel by pixel into 8-bit premultiplied RGBA.

use log::debug;

use crate::raster::color::Rgba64;
use crate::raster::regularize::read_rgba;
use crate::raster::surface::{Layout, Raster, Surface, YCbCrPlanes};
use crate::spatial::rect::Rect;

/// Largest palette a paletted surface can address with byte indices
pub const MAX_PALETTE: usize = 256;

/// Origin-anchored minimal copy of any raster
pub fn canonicalize(raster: &dyn Raster) -> Surface {
    match raster.as_surface() {
        Some(surface) => copy_region(surface, &surface.rect, [0, 0]),
        None => {
            debug!(
                "canonicalize: reading {} foreign raster pixel by pixel",
                raster.bounds()
            );
            read_rgba(raster)
        }
    }
}

/// Minimal copy of `region` keeping absolute coordinates
///
/// `region` is clipped to the surface bounds first.
pub fn extract(surface: &Surface, region: &Rect) -> Surface {
    let region = surface.rect.intersect(region);
    copy_region(surface, &region, region.min)
}

/// Copy `bpp`-byte pixels of `region` row by row into a tightly packed buffer
///
/// Source rows shorter than expected leave the remainder zeroed.
pub fn reduce(pix: &[u8], stride: usize, source: &Rect, region: &Rect, bpp: usize) -> Vec<u8> {
    let row_len = region.width() * bpp;
    let mut out = vec![0; row_len * region.height()];
    if row_len == 0 {
        return out;
    }
    let dx = region.min[0].abs_diff(source.min[0]) as usize * bpp;
    let first_row = region.min[1].abs_diff(source.min[1]) as usize;
    for (row, target) in out.chunks_mut(row_len).enumerate() {
        let start = (first_row + row) * stride + dx;
        let available = pix.get(start..).unwrap_or_default();
        let n = available.len().min(row_len);
        if let (Some(dst), Some(src)) = (target.get_mut(..n), available.get(..n)) {
            dst.copy_from_slice(src);
        }
    }
    out
}

fn copy_region(surface: &Surface, region: &Rect, origin: [i32; 2]) -> Surface {
    let rect = Rect {
        min: origin,
        max: [
            origin[0] + (region.max[0] - region.min[0]),
            origin[1] + (region.max[1] - region.min[1]),
        ],
    };
    let source = &surface.rect;
    let layout = match &surface.layout {
        Layout::Packed { format, pix, stride } => {
            let bpp = format.bytes_per_pixel();
            Layout::Packed {
                format: *format,
                pix: reduce(pix, *stride, source, region, bpp),
                stride: region.width() * bpp,
            }
        }
        Layout::YCbCr(planes) => Layout::YCbCr(copy_planes(planes, source, region, &rect)),
        Layout::NYCbCrA {
            planes,
            alpha,
            alpha_stride,
        } => Layout::NYCbCrA {
            planes: copy_planes(planes, source, region, &rect),
            alpha: reduce(alpha, *alpha_stride, source, region, 1),
            alpha_stride: region.width(),
        },
        Layout::Paletted {
            pix,
            stride,
            palette,
        } => Layout::Paletted {
            pix: reduce(pix, *stride, source, region, 1),
            stride: region.width(),
            palette: capped_palette(palette),
        },
        Layout::Uniform(color) => Layout::Uniform(*color),
    };
    Surface { rect, layout }
}

fn capped_palette(palette: &[Rgba64]) -> Vec<Rgba64> {
    palette.iter().take(MAX_PALETTE).copied().collect()
}

/// Copy luma verbatim and resample chroma onto the grid of `target`
///
/// Each target chroma cell takes the source chroma of the first luma pixel
/// it covers, which is an exact copy whenever the region starts on a chroma
/// boundary.
fn copy_planes(planes: &YCbCrPlanes, source: &Rect, region: &Rect, target: &Rect) -> YCbCrPlanes {
    let mut out = YCbCrPlanes::blank(target, planes.ratio);
    out.y = reduce(&planes.y, planes.y_stride, source, region, 1);

    let (fx, fy) = planes.ratio.factors();
    let chroma = planes.ratio.chroma_rect(target);
    let shift = [region.min[0] - target.min[0], region.min[1] - target.min[1]];
    for (i, (cx, cy)) in chroma.points().enumerate() {
        let lx = (cx * fx).max(target.min[0]) + shift[0];
        let ly = (cy * fy).max(target.min[1]) + shift[1];
        let Some(offset) = planes.c_offset(source, lx, ly) else {
            continue;
        };
        let values = planes.cb.get(offset).zip(planes.cr.get(offset));
        let slots = out.cb.get_mut(i).zip(out.cr.get_mut(i));
        if let (Some((cb, cr)), Some((dst_cb, dst_cr))) = (values, slots) {
            *dst_cb = *cb;
            *dst_cr = *cr;
        }
    }
    out
}
