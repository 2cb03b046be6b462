//! Conversion of any raster to origin-anchored 8-bit premultiplied RGBA

use crate::raster::canonical::canonicalize;
use crate::raster::color::to_rgba8;
use crate::raster::surface::{Layout, PackedFormat, Raster, Surface};
use crate::spatial::rect::Rect;

/// Regularize to 8-bit premultiplied RGBA anchored at the origin
///
/// Common packed formats take byte-level fast paths; everything else is read
/// through [`Raster::rgba64_at`] and truncated to the high byte.
pub fn to_rgba(raster: &dyn Raster) -> Surface {
    let Some(surface) = raster.as_surface() else {
        return read_rgba(raster);
    };
    let Some(format) = surface.packed_format() else {
        return read_rgba(raster);
    };
    let canonical = canonicalize(surface);
    let Layout::Packed { pix, .. } = &canonical.layout else {
        return read_rgba(raster);
    };
    let rect = canonical.rect;
    let expand = |pixel: fn(&[u8]) -> [u8; 4], bpp: usize| -> Vec<u8> {
        pix.chunks_exact(bpp).flat_map(pixel).collect()
    };
    let rgba = match format {
        PackedFormat::Rgba => pix.clone(),
        PackedFormat::Rgba64 => expand(high_bytes, 8),
        PackedFormat::Nrgba => expand(premultiply, 4),
        PackedFormat::Gray => expand(gray, 1),
        PackedFormat::Alpha => expand(alpha, 1),
        PackedFormat::Nrgba64
        | PackedFormat::Gray16
        | PackedFormat::Alpha16
        | PackedFormat::Cmyk => return read_rgba(raster),
    };
    Surface::from_packed(rect, PackedFormat::Rgba, rgba)
}

/// Generic per-pixel readout into 8-bit premultiplied RGBA
pub fn read_rgba(raster: &dyn Raster) -> Surface {
    let bounds = raster.bounds();
    let rect = Rect::from_size(bounds.width(), bounds.height());
    let pix = bounds
        .points()
        .flat_map(|(x, y)| to_rgba8(raster.rgba64_at(x, y)).0)
        .collect();
    Surface::from_packed(rect, PackedFormat::Rgba, pix)
}

fn byte(p: &[u8], i: usize) -> u8 {
    p.get(i).copied().unwrap_or(0)
}

fn high_bytes(p: &[u8]) -> [u8; 4] {
    [byte(p, 0), byte(p, 2), byte(p, 4), byte(p, 6)]
}

fn premultiply(p: &[u8]) -> [u8; 4] {
    let a = u16::from(byte(p, 3));
    let scale = |i: usize| (u16::from(byte(p, i)) * a / 255) as u8;
    [scale(0), scale(1), scale(2), byte(p, 3)]
}

fn gray(p: &[u8]) -> [u8; 4] {
    let v = byte(p, 0);
    [v, v, v, 255]
}

fn alpha(p: &[u8]) -> [u8; 4] {
    let v = byte(p, 0);
    [v, v, v, v]
}
