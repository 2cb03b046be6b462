//! Pixel surfaces as a closed sum type over memory layouts
//!
//! Every buffer starts at the pixel `rect.min`; the byte offset of `(x, y)` is
//! `(y - min.y) · stride + (x - min.x) · bytes_per_pixel`. Chroma planes of a
//! YCbCr surface are indexed in the subsampled grid of their ratio. 16-bit
//! samples are stored big-endian.

use crate::raster::color::{
    Rgba64, TRANSPARENT, from_alpha16, from_cmyk, from_gray16, from_nrgba8, from_nrgba16,
    from_nycbcra, from_rgba8, from_ycbcr, widen,
};
use crate::spatial::rect::Rect;

/// Chroma subsampling ratio of a YCbCr surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubsampleRatio {
    /// Full-resolution chroma
    #[default]
    R444,
    /// Half horizontal resolution
    R422,
    /// Half horizontal and half vertical resolution
    R420,
    /// Half vertical resolution
    R440,
    /// Quarter horizontal resolution
    R411,
    /// Quarter horizontal and half vertical resolution
    R410,
}

impl SubsampleRatio {
    /// Luma pixels per chroma sample as `(horizontal, vertical)`
    pub const fn factors(self) -> (i32, i32) {
        match self {
            Self::R444 => (1, 1),
            Self::R422 => (2, 1),
            Self::R420 => (2, 2),
            Self::R440 => (1, 2),
            Self::R411 => (4, 1),
            Self::R410 => (4, 2),
        }
    }

    /// Chroma grid covering a luma rectangle, in chroma coordinates
    pub const fn chroma_rect(self, luma: &Rect) -> Rect {
        let (fx, fy) = self.factors();
        Rect {
            min: [luma.min[0].div_euclid(fx), luma.min[1].div_euclid(fy)],
            max: [
                (luma.max[0] + fx - 1).div_euclid(fx),
                (luma.max[1] + fy - 1).div_euclid(fy),
            ],
        }
    }
}

/// Packed interleaved layouts of fixed bytes per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackedFormat {
    /// 8-bit premultiplied RGBA
    Rgba,
    /// 16-bit premultiplied RGBA
    Rgba64,
    /// 8-bit straight-alpha RGBA
    Nrgba,
    /// 16-bit straight-alpha RGBA
    Nrgba64,
    /// 8-bit gray
    Gray,
    /// 16-bit gray
    Gray16,
    /// 8-bit alpha mask
    Alpha,
    /// 16-bit alpha mask
    Alpha16,
    /// 8-bit CMYK
    Cmyk,
}

impl PackedFormat {
    /// Bytes occupied by one pixel
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Gray | Self::Alpha => 1,
            Self::Gray16 | Self::Alpha16 => 2,
            Self::Rgba | Self::Nrgba | Self::Cmyk => 4,
            Self::Rgba64 | Self::Nrgba64 => 8,
        }
    }

    /// Decode one pixel from its bytes
    pub fn decode(self, px: &[u8]) -> Rgba64 {
        let byte = |i: usize| px.get(i).copied().unwrap_or(0);
        let word = |i: usize| u16::from_be_bytes([byte(2 * i), byte(2 * i + 1)]);
        match self {
            Self::Rgba => from_rgba8(byte(0), byte(1), byte(2), byte(3)),
            Self::Rgba64 => image::Rgba([word(0), word(1), word(2), word(3)]),
            Self::Nrgba => from_nrgba8(byte(0), byte(1), byte(2), byte(3)),
            Self::Nrgba64 => from_nrgba16(word(0), word(1), word(2), word(3)),
            Self::Gray => from_gray16(widen(byte(0))),
            Self::Gray16 => from_gray16(word(0)),
            Self::Alpha => from_alpha16(widen(byte(0))),
            Self::Alpha16 => from_alpha16(word(0)),
            Self::Cmyk => from_cmyk(byte(0), byte(1), byte(2), byte(3)),
        }
    }
}

/// Luma and chroma planes of a YCbCr surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YCbCrPlanes {
    /// Luma samples, one per pixel
    pub y: Vec<u8>,
    /// Blue-difference chroma samples
    pub cb: Vec<u8>,
    /// Red-difference chroma samples
    pub cr: Vec<u8>,
    /// Bytes between vertically adjacent luma samples
    pub y_stride: usize,
    /// Bytes between vertically adjacent chroma samples
    pub c_stride: usize,
    /// Chroma subsampling ratio
    pub ratio: SubsampleRatio,
}

/// Memory layout and pixel data of a [`Surface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Interleaved pixels of a fixed format
    Packed {
        /// Pixel format
        format: PackedFormat,
        /// Pixel bytes starting at `rect.min`
        pix: Vec<u8>,
        /// Bytes between vertically adjacent pixels
        stride: usize,
    },
    /// Planar luma with subsampled chroma
    YCbCr(YCbCrPlanes),
    /// Planar YCbCr with a full-resolution straight alpha plane
    NYCbCrA {
        /// Colour planes
        planes: YCbCrPlanes,
        /// Alpha samples, one per pixel
        alpha: Vec<u8>,
        /// Bytes between vertically adjacent alpha samples
        alpha_stride: usize,
    },
    /// One byte palette index per pixel
    Paletted {
        /// Palette indices starting at `rect.min`
        pix: Vec<u8>,
        /// Bytes between vertically adjacent indices
        stride: usize,
        /// Colours addressed by the indices
        palette: Vec<Rgba64>,
    },
    /// A single colour everywhere
    Uniform(Rgba64),
}

/// Pixel buffer with explicit geometry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    /// Pixel bounds
    pub rect: Rect,
    /// Encoding and buffers
    pub layout: Layout,
}

/// Anything that can be read pixel by pixel
///
/// Readers outside [`Raster::bounds`] get transparent black.
pub trait Raster {
    /// Pixel bounds
    fn bounds(&self) -> Rect;

    /// Premultiplied colour at `(x, y)`
    fn rgba64_at(&self, x: i32, y: i32) -> Rgba64;

    /// Direct access when the raster is a concrete surface
    fn as_surface(&self) -> Option<&Surface> {
        None
    }

    /// Native sub-region accessor, if the raster has one
    fn sub_image(&self, _rect: &Rect) -> Option<Surface> {
        None
    }
}

fn offset(rect: &Rect, stride: usize, bpp: usize, x: i32, y: i32) -> Option<usize> {
    if !rect.contains(x, y) {
        return None;
    }
    let dy = y.abs_diff(rect.min[1]) as usize;
    let dx = x.abs_diff(rect.min[0]) as usize;
    Some(dy * stride + dx * bpp)
}

impl YCbCrPlanes {
    /// Zeroed planes covering `rect`
    pub fn blank(rect: &Rect, ratio: SubsampleRatio) -> Self {
        let chroma = ratio.chroma_rect(rect);
        let (cw, ch) = (chroma.width(), chroma.height());
        Self {
            y: vec![0; rect.area()],
            cb: vec![0; cw * ch],
            cr: vec![0; cw * ch],
            y_stride: rect.width(),
            c_stride: cw,
            ratio,
        }
    }

    /// Offset of the luma sample for pixel `(x, y)`
    pub fn y_offset(&self, rect: &Rect, x: i32, y: i32) -> Option<usize> {
        offset(rect, self.y_stride, 1, x, y)
    }

    /// Offset of the chroma sample for pixel `(x, y)`
    pub fn c_offset(&self, rect: &Rect, x: i32, y: i32) -> Option<usize> {
        if !rect.contains(x, y) {
            return None;
        }
        let (fx, fy) = self.ratio.factors();
        let chroma = self.ratio.chroma_rect(rect);
        offset(&chroma, self.c_stride, 1, x.div_euclid(fx), y.div_euclid(fy))
    }

    fn sample(&self, rect: &Rect, x: i32, y: i32) -> Option<(u8, u8, u8)> {
        let yo = self.y_offset(rect, x, y)?;
        let co = self.c_offset(rect, x, y)?;
        Some((
            *self.y.get(yo)?,
            *self.cb.get(co)?,
            *self.cr.get(co)?,
        ))
    }
}

impl Surface {
    /// Zeroed packed surface
    pub fn packed(rect: Rect, format: PackedFormat) -> Self {
        let stride = rect.width() * format.bytes_per_pixel();
        Self {
            rect,
            layout: Layout::Packed {
                format,
                pix: vec![0; stride * rect.height()],
                stride,
            },
        }
    }

    /// Packed surface over existing bytes laid out at minimal stride
    pub fn from_packed(rect: Rect, format: PackedFormat, pix: Vec<u8>) -> Self {
        let stride = rect.width() * format.bytes_per_pixel();
        Self {
            rect,
            layout: Layout::Packed { format, pix, stride },
        }
    }

    /// Zeroed YCbCr surface
    pub fn ycbcr(rect: Rect, ratio: SubsampleRatio) -> Self {
        Self {
            rect,
            layout: Layout::YCbCr(YCbCrPlanes::blank(&rect, ratio)),
        }
    }

    /// Zeroed YCbCr surface with an alpha plane
    pub fn nycbcra(rect: Rect, ratio: SubsampleRatio) -> Self {
        Self {
            rect,
            layout: Layout::NYCbCrA {
                planes: YCbCrPlanes::blank(&rect, ratio),
                alpha: vec![0; rect.area()],
                alpha_stride: rect.width(),
            },
        }
    }

    /// Paletted surface with every index zero
    pub fn paletted(rect: Rect, palette: Vec<Rgba64>) -> Self {
        Self {
            rect,
            layout: Layout::Paletted {
                pix: vec![0; rect.area()],
                stride: rect.width(),
                palette,
            },
        }
    }

    /// Single-colour surface over `rect`
    pub const fn uniform(rect: Rect, color: Rgba64) -> Self {
        Self {
            rect,
            layout: Layout::Uniform(color),
        }
    }

    /// Pixel width
    pub const fn width(&self) -> usize {
        self.rect.width()
    }

    /// Pixel height
    pub const fn height(&self) -> usize {
        self.rect.height()
    }

    /// Packed format, if the layout is packed
    pub const fn packed_format(&self) -> Option<PackedFormat> {
        match &self.layout {
            Layout::Packed { format, .. } => Some(*format),
            _ => None,
        }
    }

    /// Mutable bytes of the packed pixel at `(x, y)`
    pub fn pixel_mut(&mut self, x: i32, y: i32) -> Option<&mut [u8]> {
        let Layout::Packed { format, pix, stride } = &mut self.layout else {
            return None;
        };
        let bpp = format.bytes_per_pixel();
        let start = offset(&self.rect, *stride, bpp, x, y)?;
        pix.get_mut(start..start + bpp)
    }

    /// Bytes of the packed pixel at `(x, y)`
    pub fn pixel(&self, x: i32, y: i32) -> Option<&[u8]> {
        let Layout::Packed { format, pix, stride } = &self.layout else {
            return None;
        };
        let bpp = format.bytes_per_pixel();
        let start = offset(&self.rect, *stride, bpp, x, y)?;
        pix.get(start..start + bpp)
    }

    /// Overwrite the palette index at `(x, y)`
    pub fn set_index(&mut self, x: i32, y: i32, index: u8) -> bool {
        let Layout::Paletted { pix, stride, .. } = &mut self.layout else {
            return false;
        };
        match offset(&self.rect, *stride, 1, x, y).and_then(|i| pix.get_mut(i)) {
            Some(cell) => {
                *cell = index;
                true
            }
            None => false,
        }
    }

    /// Palette index at `(x, y)`
    pub fn index_at(&self, x: i32, y: i32) -> Option<u8> {
        let Layout::Paletted { pix, stride, .. } = &self.layout else {
            return None;
        };
        offset(&self.rect, *stride, 1, x, y).and_then(|i| pix.get(i).copied())
    }

    fn color_at(&self, x: i32, y: i32) -> Option<Rgba64> {
        let rect = &self.rect;
        match &self.layout {
            Layout::Packed { format, .. } => self.pixel(x, y).map(|px| format.decode(px)),
            Layout::YCbCr(planes) => {
                let (l, cb, cr) = planes.sample(rect, x, y)?;
                Some(from_ycbcr(l, cb, cr))
            }
            Layout::NYCbCrA {
                planes,
                alpha,
                alpha_stride,
            } => {
                let (l, cb, cr) = planes.sample(rect, x, y)?;
                let a = alpha.get(offset(rect, *alpha_stride, 1, x, y)?)?;
                Some(from_nycbcra(l, cb, cr, *a))
            }
            Layout::Paletted { palette, .. } => {
                let index = self.index_at(x, y)?;
                palette.get(usize::from(index)).copied()
            }
            Layout::Uniform(c) => rect.contains(x, y).then_some(*c),
        }
    }
}

impl Raster for Surface {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn rgba64_at(&self, x: i32, y: i32) -> Rgba64 {
        self.color_at(x, y).unwrap_or(TRANSPARENT)
    }

    fn as_surface(&self) -> Option<&Surface> {
        Some(self)
    }

    fn sub_image(&self, rect: &Rect) -> Option<Surface> {
        if matches!(self.layout, Layout::Uniform(_)) {
            return None;
        }
        Some(crate::raster::canonical::extract(self, &self.rect.intersect(rect)))
    }
}
